use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod gemini;
mod generate;
mod prelude;
mod server;
#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Relay natural-language prompts to Gemini and return code directives"
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
    #[clap(long, env = "CODERELAY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the HTTP relay (POST /generate)
    Serve(crate::server::ServeOptions),

    /// Send a single prompt and print the resulting directive
    Generate(crate::generate::GenerateOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error.
    dotenv::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
    }
}
