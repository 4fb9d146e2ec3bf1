// ABOUTME: CLI for computing and storing document metrics with docstats.
// ABOUTME: Analyzes a file, stdin, or URL directly, or manages uploads in a local document store.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docstats_metrics::{analyze, compute_metrics};
use docstats_store::{
    decode_text, DocumentStore, DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_FILE_SIZE_BYTES,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Compute readability and word-frequency metrics for plain-text documents.
#[derive(Parser, Debug)]
#[command(name = "docstats")]
#[command(about = "Compute readability and word-frequency metrics for text documents", long_about = None)]
struct Cli {
    /// Directory holding uploaded documents and the document index.
    #[arg(long, global = true, default_value = "uploads")]
    store: PathBuf,

    /// Maximum accepted upload size in bytes.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FILE_SIZE_BYTES)]
    max_size: u64,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute metrics without storing anything.
    Analyze {
        /// File path, http(s) URL, or "-" for stdin.
        target: String,

        /// Print unrounded counts and the full word ranking.
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Store a .txt file and print its metrics.
    Upload {
        path: PathBuf,

        /// Store the file now and analyse it later with `process`.
        #[arg(long, default_value_t = false)]
        defer: bool,
    },

    /// Analyse every stored document that is still pending.
    Process,

    /// Print the stored metrics for a document.
    Results { file_id: String },

    /// List recently uploaded documents, newest first.
    History {
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },

    /// Report whether the store can be opened.
    Health,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Analyze { target, raw } => {
            let bytes = load_bytes(target)?;
            let text = decode_text(&bytes);
            debug!(input = %target, bytes = bytes.len(), "loaded analysis target");
            if *raw {
                print_json(&analyze(&text), cli.compact)
            } else {
                print_json(&compute_metrics(&text), cli.compact)
            }
        }
        Command::Upload { path, defer } => {
            let mut store = open_store(&cli)?;
            let filename = upload_name(path)?;
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            if *defer {
                let summary = store.upload_deferred(&filename, file)?;
                print_json(&summary, cli.compact)
            } else {
                let response = store.upload(&filename, file)?;
                print_json(&response, cli.compact)
            }
        }
        Command::Process => {
            let mut store = open_store(&cli)?;
            let analyzed = store.analyze_pending()?;
            print_json(&json!({ "analyzed": analyzed }), cli.compact)
        }
        Command::Results { file_id } => {
            let store = open_store(&cli)?;
            let results = store.results(file_id)?;
            print_json(&results, cli.compact)
        }
        Command::History { limit } => {
            let store = open_store(&cli)?;
            print_json(&store.history(*limit), cli.compact)
        }
        Command::Health => {
            let store = open_store(&cli)?;
            print_json(&store.health(), cli.compact)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn open_store(cli: &Cli) -> Result<DocumentStore> {
    let store = DocumentStore::builder()
        .upload_dir(&cli.store)
        .max_file_size_bytes(cli.max_size)
        .open()
        .with_context(|| format!("failed to open document store at {}", cli.store.display()))?;
    info!(store = %cli.store.display(), documents = store.documents().len(), "opened store");
    Ok(store)
}

fn upload_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("not a file: {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

fn is_remote(target: &str) -> bool {
    Url::parse(target)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if is_remote(target) {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        let bytes = resp.bytes()?;
        return Ok(bytes.to_vec());
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read(&path).with_context(|| format!("failed to read {}", target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://example.com/doc.txt"));
        assert!(is_remote("https://example.com"));
        assert!(!is_remote("ftp://example.com/doc.txt"));
        assert!(!is_remote("notes.txt"));
        assert!(!is_remote("/tmp/notes.txt"));
    }

    #[test]
    fn test_upload_name_uses_final_component() {
        assert_eq!(upload_name(Path::new("/tmp/dir/sample.txt")).unwrap(), "sample.txt");
        assert!(upload_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "docstats", "history", "--limit", "3", "--store", "/tmp/x", "--compact",
        ]);
        assert_eq!(cli.store, PathBuf::from("/tmp/x"));
        assert!(cli.compact);
        assert!(matches!(cli.command, Command::History { limit: 3 }));
    }
}
