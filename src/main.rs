mod api;
mod cli;
mod config;
mod error;
mod models;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{render_error, App, Cli};
use config::Config;
use error::AppError;
use models::Query;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging on stderr so stdout only carries the reading.
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        },
        Err(e) => {
            let message = e.to_string();
            let message = message.trim().trim_start_matches("error: ");
            return report(&AppError::usage(message));
        },
    };

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(e) => report(&e),
    }
}

async fn run(cli: &Cli) -> error::Result<String> {
    let query = cli.query()?;
    debug!("Interpreted arguments as {:?}", query);

    let config = match query {
        Query::Help => Config::default(),
        _ => Config::from_env()?,
    };
    info!("Using IQAir endpoint {}", config.base_url);

    App::new(config).run(&query).await
}

fn report(err: &AppError) -> ExitCode {
    debug!("Exiting with error: {:?}", err);
    eprintln!("{}", render_error(err));
    ExitCode::from(err.exit_code())
}
