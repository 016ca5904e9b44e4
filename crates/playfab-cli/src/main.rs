mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI and dispatch; logging is initialized once settings are loaded.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("playfab error: {:#}", err);
        std::process::exit(1);
    }
}
