use clap::Parser;

use sam_inspect::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::header::HeaderCli::parse();
    cli::init_logging();
    cli::header::run(&cli.args)
}
