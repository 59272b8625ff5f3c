use clap::Parser;
use user_directory::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::run(cli)
}
