use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod facts;
mod prelude;
mod server;

#[cfg(test)]
mod test_support;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers and decorate them with a fun fact"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Base URL of the trivia service queried as `{url}/{number}`
    #[clap(
        long,
        env = "NUMCLASS_FACT_URL",
        global = true,
        default_value = crate::facts::DEFAULT_FACT_URL
    )]
    fact_url: String,

    /// Seconds to wait for the trivia service (0 waits forever)
    #[clap(long, env = "NUMCLASS_FACT_TIMEOUT", global = true, default_value = "10")]
    fact_timeout: u64,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the classify-number HTTP endpoint
    Serve(crate::server::App),

    /// Classify a single number from the command line
    Classify(crate::classify::ClassifyOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
    }
}
