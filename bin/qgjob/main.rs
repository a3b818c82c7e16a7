//! qgjob - submit and track test jobs
//!
//! ```text
//! qgjob submit --org-id <id> --app-version-id <id> --test <path> --target <emulator|device|browserstack>
//! qgjob status <job-id>
//! qgjob health
//! ```

mod commands;
mod style;

use qgjob::{Command, Error, Invocation};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::style::print_error;

#[tokio::main]
async fn main() -> ExitCode {
    let invocation = match qgjob::parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        // Prints usage/help and exits 2 (0 for --help/--version).
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => {
            print_error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(invocation.verbosity);

    match run(invocation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "qgjob=info,warn",
        _ => "qgjob=debug,info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(invocation: Invocation) -> anyhow::Result<()> {
    let config = &invocation.config;

    match invocation.command {
        Command::Submit(req) => commands::submit::run(config, req).await,
        Command::Status(query) => commands::status::run(config, query).await,
        Command::Health => commands::health::run(config).await,
    }
}
