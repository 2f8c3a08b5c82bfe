use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use report_client::data::{self, executable_dir, prompt_stdin};
use report_client::{ClientError, Outcome, ReportClient, DEFAULT_ENDPOINT, DEFAULT_REPORT_NAME};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sends a file of maintenance records to the report server and prints where the PDF was saved.
///
/// Without `--data` the client looks for `records.json` next to its executable and asks for a
/// path when that file is missing.
#[derive(Parser)]
#[command(author, version, about = "Requests a maintenance report PDF from the report server")]
struct Cli {
    /// JSON file holding an array of records.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Report generation endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Folder the server should write the report to (defaults to the current directory).
    #[arg(long)]
    folder: Option<PathBuf>,

    /// File name of the report.
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    filename: String,
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), ClientError> {
    let data_file = match cli.data {
        Some(path) if path.is_file() => path,
        Some(path) => return Err(ClientError::DataFileNotFound(path)),
        None => data::locate_data_file(&executable_dir()?, prompt_stdin)?,
    };
    let records = data::load_records(&data_file)?;

    let folder = match cli.folder {
        Some(folder) => folder,
        None => env::current_dir().map_err(|source| ClientError::Environment {
            what: "the working directory",
            source,
        })?,
    };

    let client = ReportClient::new(cli.endpoint);
    tracing::info!(endpoint = client.endpoint(), "requesting report");
    match client.send(&folder.to_string_lossy(), &cli.filename, &records)? {
        Outcome::Saved(path) => println!("PDF saved at {}", path),
        Outcome::Failed { status, body } => println!("Error: {} {}", status, body),
    }
    Ok(())
}

fn main() {
    init_logger();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
