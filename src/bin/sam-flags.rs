use clap::Parser;

use sam_inspect::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::flags::FlagsCli::parse();
    cli::init_logging();
    cli::flags::run(&cli.args)
}
