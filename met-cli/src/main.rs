//! Portal CLI - command line tool for fetching forecast data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "met-cli",
    version,
    about = "Meteorological data portal toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: met_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    met_cmd::run(cli.command).await
}
