// SPDX-License-Identifier: MPL-2.0
use iced_sorter::config::{self, Config};
use iced_sorter::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", config::HELP);
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_arguments(args, Config::env_language()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", config::HELP);
            return ExitCode::from(2);
        }
    };

    logging::init();
    tracing::info!(?config, "starting");

    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
