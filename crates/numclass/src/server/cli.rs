#[derive(Debug, clap::Args)]
#[command(about = "Serve the classify-number HTTP endpoint")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "NUMCLASS_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "NUMCLASS_HOST", default_value = "0.0.0.0")]
    pub host: String,
}
