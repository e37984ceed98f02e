//! Diagrammer CLI - Dispatch graph and figure requests

mod cli;
mod script;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let app = cli::DiagrammerApp::from_cli(&cli_args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = app.run(cli_args, &mut out) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
