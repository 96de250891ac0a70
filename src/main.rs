use clap::Parser;
use std::process::ExitCode;

use tfplan::cli::Cli;
use tfplan::config::Config;
use tfplan::utils::{error::report_error, logger::init_logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let loaded = match &cli.config {
        Some(config_path) => Config::load_custom(config_path),
        None => Config::load(),
    };

    let result = loaded
        .map_err(anyhow::Error::from)
        .and_then(|config| cli.execute(config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
