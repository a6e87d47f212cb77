mod cli;
mod logging;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any pipeline stage runs.
    logging::init_logging(cli.verbose);

    if let Err(err) = cli::run(&cli, &mut std::io::stdout().lock()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
