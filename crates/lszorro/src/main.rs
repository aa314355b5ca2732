//! lszorro - list all Zorro devices

use clap::Parser;
use lszorro::cli::Cli;
use lszorro::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use lszorro::logging;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_GENERAL_ERROR)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    logging::init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match lszorro::run(&cli, &mut out) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            drop(out);
            eprintln!("lszorro: {}", e);
            ExitCode::from(EXIT_GENERAL_ERROR)
        }
    }
}
