use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Steam64 id (17 digits) or vanity name of the profile
    pub identifier: String,

    /// Optional JSON settings file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Community base URL, overrides the settings file
    #[arg(long, env = "STEAM_COMMUNITY_URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds, overrides the settings file
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write the profile JSON here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
