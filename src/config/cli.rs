use crate::domain::storage::StorageKeys;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Where to write the merged field statuses
    #[arg(long, default_value = StorageKeys::FIELD_STATUSES)]
    pub output: PathBuf,

    /// JSON file listing the sources to scrape instead of the built-in ones
    #[arg(long)]
    pub sources_file: Option<PathBuf>,

    /// Abort the whole run when any single source fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
