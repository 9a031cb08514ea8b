mod app;

use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

use app::cli::Cli;
use app::error::SyncError;

fn main() -> ExitCode {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<SyncError>() {
            Some(sync_err) => {
                if !sync_err.is_reported() {
                    eprintln!("Error: {:#}", err);
                }
                sync_err.exit_code()
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
