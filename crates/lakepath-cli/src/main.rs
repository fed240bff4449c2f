mod cli;
mod runner;

use clap::Parser;
use cli::{Cli, is_usage_error};
use runner::Runner;
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    let Cli {
        config,
        debug,
        command,
    } = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if is_usage_error(&err) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let runner = Runner::new(config, debug);
    let mut out = io::stdout().lock();

    match runner.run(&command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
