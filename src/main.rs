use clap::Parser;
use cleanup::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();
    cleanup::logging::init(cli.verbose);

    if let Err(e) = execute_command(cli) {
        eprintln!("cleanup: {}", e);
        std::process::exit(1);
    }
}
