use clap::Parser;
use routelens::cli::{run_cli, Cli};
use routelens::logging::{init_logging_with_config, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = init_logging_with_config(&LogConfig::from_env()) {
        eprintln!("Warning: {e:#}");
    }

    let cli = Cli::parse();
    match run_cli(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
