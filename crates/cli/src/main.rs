//! `sockforge`: run socket recipe passes against stash snapshots.

mod commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sockforge", version, about = "Socket recipe matching and application")]
struct Cli {
    /// Emit JSON logs instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: commands::Commands,
}

fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        sockforge_observability::init();
    } else {
        sockforge_observability::init_pretty();
    }

    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
