use crate::facts::{timeout_from_secs, FactFetcher};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use numclass_core::response::{parse_number, ClassificationResult};

#[derive(Debug, clap::Args, Clone)]
pub struct ClassifyOptions {
    /// Base-10 integer to classify (e.g., "153" or "-42")
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Output as JSON, same body the HTTP endpoint returns
    #[arg(long)]
    pub json: bool,

    /// Skip the fun fact lookup
    #[arg(long)]
    pub offline: bool,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let number = parse_number(Some(options.number.as_str()))?;

    let fun_fact = if options.offline {
        String::new()
    } else {
        if global.verbose {
            eprintln!("Fetching fun fact from: {}", global.fact_url);
        }

        let facts = FactFetcher::new(&global.fact_url, timeout_from_secs(global.fact_timeout))?;
        facts.fetch(number).await?
    };

    let result =
        tokio::task::spawn_blocking(move || ClassificationResult::new(number, fun_fact)).await?;

    if options.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", format_result(&result));
    }

    Ok(())
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

/// Human readable summary of a classification
fn format_result(result: &ClassificationResult) -> String {
    let mut lines = vec![
        format!("{} {}", "Number:    ".bold(), result.number),
        format!("{} {}", "Prime:     ".bold(), yes_no(result.is_prime)),
        format!("{} {}", "Perfect:   ".bold(), yes_no(result.is_perfect)),
        format!("{} {}", "Properties:".bold(), result.properties.join(", ")),
        format!("{} {}", "Digit sum: ".bold(), result.digit_sum),
    ];

    if !result.fun_fact.is_empty() {
        lines.push(format!("{} {}", "Fun fact:  ".bold(), result.fun_fact.trim_end()));
    }

    lines.join("\n")
}
