//! roster CLI
//!
//! Lists organization members from a JSON data file.

use std::process::ExitCode;

use clap::Parser;

mod args;
mod logging;
mod run;

use args::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stderr only, stdout carries the listing
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::List(args) => run::list(&args).await.and_then(|c| run::render(&c)),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(run::exit_code(&err))
        }
    }
}
