//! CLI frontend for Westbound, Eli Klunder's move to Las Vegas.

mod play;
mod recap;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "westbound",
    about = "Westbound: Eli Klunder's move to Las Vegas, a choose-your-own-adventure",
    version
)]
struct Cli {
    /// Automatically play through a sample path without interactive input
    #[arg(long)]
    demo: bool,

    /// Open the route view automatically once an ending is reached
    #[arg(long, alias = "turtle")]
    view: bool,
}

fn main() {
    let cli = Cli::parse();

    // Story text goes to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = play::PlayOptions {
        demo: cli.demo,
        view: cli.view,
    };

    if let Err(e) = play::run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
