use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{error, LevelFilter};

use tab_grabber::{grab, OutputRecord, SongsterrClient};

#[derive(Parser)]
#[command(name = "tab-grabber")]
#[command(version, about = "Download a guitar tab from a Songsterr page", long_about = None)]
struct Cli {
    /// Songsterr URL
    #[arg(short = 'u', long = "url")]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger, RUST_LOG overrides the default level
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter(None, LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let url = match Cli::parse().url {
        Some(url) if !url.is_empty() => url,
        _ => {
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::FAILURE;
        }
    };

    match run(&url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str) -> tab_grabber::Result<()> {
    let client = SongsterrClient::try_default()?;
    let record = grab(&client, url, Path::new(".")).await?;
    report(&record)
}

/// Print the result record as a single JSON line
fn report(record: &OutputRecord) -> tab_grabber::Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}
