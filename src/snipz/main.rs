use clap::Parser;
use env_logger::{Builder, Env};

mod cli;

use cli::setup::Cli;

/// Log level comes from RUST_LOG, else `warn` (`debug` with --verbose).
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = cli::commands::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
