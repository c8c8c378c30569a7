use crate::config::cli::Args;
use crate::error::Result;
use crate::infrastructure::DEFAULT_BASE_URL;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let settings = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Command line flags win over the settings file.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }
}

pub struct Config {
    pub args: Args,
    pub settings: Settings,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let settings = match &args.config_file {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        }
        .with_overrides(&args);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            args,
            settings,
            http_client,
        })
    }
}
