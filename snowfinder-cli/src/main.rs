//! SnowFinder CLI - query the resort ranking service from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "snowfinder-cli",
    version,
    about = "Snowiest resorts and peak snowfall periods, from the command line"
)]
struct Cli {
    /// Base URL of the ranking service
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    base_url: String,

    #[command(subcommand)]
    command: snowfinder_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    snowfinder_cmd::run(&cli.base_url, cli.command).await
}
