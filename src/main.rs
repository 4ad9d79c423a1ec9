//! filter_drive CLI - copy wanted files from a Drive folder into a shared
//! subfolder.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use filter_drive::{
    collect_entries, extract_folder_id, run_filter, Authenticator, DriveClient, FilterReport,
    FilterRequest, MatchStrategy,
};

/// CLI tool for filtering a Google Drive folder by a wanted list.
#[derive(Parser)]
#[command(name = "filter_drive")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to service account JSON credentials file.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// Pre-issued OAuth access token with Drive scope; takes precedence
    /// over --credentials.
    #[arg(long, env = "DRIVE_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy wanted entries into a new publicly shared subfolder.
    Filter {
        /// Source folder URL or ID.
        folder: String,

        /// Wanted list text: codes or file names separated by newlines,
        /// commas or semicolons.
        #[arg(long, short = 'l')]
        list: Option<String>,

        /// Read the wanted list from a file instead.
        #[arg(long, conflicts_with = "list")]
        list_file: Option<PathBuf>,

        /// Name for the destination folder (defaults to a timestamped name).
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Matching strategy: 'code' (extension-insensitive) or 'exact'.
        #[arg(long = "match", default_value = "code")]
        strategy: MatchStrategy,

        /// Print the full report as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },

    /// List entries in a folder.
    List {
        /// Folder URL or ID.
        folder: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let auth = build_authenticator(&cli)?;
    let client = DriveClient::new(auth);

    match cli.command {
        Commands::Filter {
            folder,
            list,
            list_file,
            name,
            strategy,
            json,
        } => {
            let list_text = wanted_text(list, list_file)?;

            let request = FilterRequest {
                folder_ref: folder,
                list_text,
                job_name: name,
                strategy,
            };

            let report = run_filter(&client, &request)
                .await
                .context("Filter run failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&report);
            }
        }

        Commands::List { folder } => {
            let folder_id = extract_folder_id(&folder)
                .with_context(|| format!("Invalid folder URL or ID: {}", folder))?;

            let entries = collect_entries(&client, &folder_id)
                .await
                .with_context(|| format!("Failed to list folder: {}", folder_id))?;

            if entries.is_empty() {
                println!("No entries found.");
            } else {
                println!("{:<44} {:<40} {}", "ID", "TYPE", "NAME");
                println!("{}", "-".repeat(100));
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }
    }

    Ok(())
}

/// The wanted-list text from whichever of the two sources was given.
fn wanted_text(list: Option<String>, list_file: Option<PathBuf>) -> Result<String> {
    match (list, list_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read wanted list from {:?}", path)),
        (None, None) => anyhow::bail!("either --list or --list-file is required"),
    }
}

fn build_authenticator(cli: &Cli) -> Result<Authenticator> {
    if let Some(token) = &cli.access_token {
        return Ok(Authenticator::from_access_token(token.clone()));
    }

    let path = cli
        .credentials
        .as_ref()
        .context("either --credentials or --access-token is required")?;

    Authenticator::from_file(path)
        .with_context(|| format!("Failed to load credentials from {:?}", path))
}

fn print_summary(report: &FilterReport) {
    println!("Destination: {} ({})", report.folder_name, report.folder_id);
    println!("Share link:  {}", report.result_link);
    println!("Source entries scanned: {}", report.total_source_entries);

    println!("Matched ({}):", report.matched.len());
    for item in &report.matched {
        for entry in &item.entries {
            println!("  [{}] {}", item.raw_label, entry.name);
        }
    }

    if report.unmatched.is_empty() {
        println!("Every wanted item was found.");
    } else {
        println!("Not found ({}):", report.unmatched.len());
        for label in &report.unmatched {
            println!("  {}", label);
        }
    }
}
