//! SMR CLI - Monthly siltation rate analysis from XYZ survey batches.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "smr-cli",
    version,
    about = "Monthly siltation rate analysis toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: smr_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    smr_cmd::run(cli.command)
}
