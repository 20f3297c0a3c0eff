//! Olympics CLI - Command line dashboard for 120 years of Summer Olympic results.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "olympics-cli",
    version,
    about = "Summer Olympics medal and participation analysis"
)]
struct Cli {
    #[command(flatten)]
    source: olympics_cmd::SourceArgs,

    #[command(subcommand)]
    command: olympics_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    olympics_cmd::run(&cli.source, cli.command)
}
