use std::process::ExitCode;

use clap::Parser;
use greencity::cli::{self, Cli};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    greencity_console::init_with_directive(cli.log_directive());

    match cli::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
