//! BFCI CLI - Command line tool for Burkina Faso climate index maps.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bfci-cli",
    version,
    about = "Burkina Faso climate index toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bfci_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("[BFCI Debug] cli: starting");
    bfci_cmd::run(cli.command)
}
