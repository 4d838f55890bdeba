//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Identity attached to every outbound request.
///
/// Jumia's crawler policy allows bots that clearly identify themselves and
/// leave a way to reach their owner; spoofed browser agents get blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdentity {
    /// Sent as `User-Agent`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Sent as `From`
    #[serde(default = "default_contact")]
    pub contact: String,
}

impl RequestIdentity {
    pub fn new(user_agent: impl Into<String>, contact: impl Into<String>) -> Self {
        Self { user_agent: user_agent.into(), contact: contact.into() }
    }
}

impl Default for RequestIdentity {
    fn default() -> Self {
        Self { user_agent: default_user_agent(), contact: default_contact() }
    }
}

fn default_user_agent() -> String {
    "JumiaScraperBot/1.0 (+https://github.com/blanco7/Jumia-Scraping-Project)".to_string()
}

fn default_contact() -> String {
    "kokou.germain.etu@esmt.sn".to_string()
}

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site root, e.g. `https://www.jumia.sn`
    #[serde(default = "default_site")]
    pub site: String,

    /// Category path segment, e.g. `smartphones`
    #[serde(default = "default_category")]
    pub category: String,

    /// Bot identity headers
    #[serde(default)]
    pub identity: RequestIdentity,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed courtesy delay after each page, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Skip the courtesy delay after the final page
    #[serde(default)]
    pub skip_final_delay: bool,

    /// Number of pages for multi-page runs
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Console output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_site() -> String {
    "https://www.jumia.sn".to_string()
}

fn default_category() -> String {
    "smartphones".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_pages() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: default_site(),
            category: default_category(),
            identity: RequestIdentity::default(),
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
            skip_final_delay: false,
            pages: default_pages(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("jumia-crawler.toml");
        if local_config.exists() {
            debug!("Found jumia-crawler.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("jumia-crawler").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unparseable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(site) = std::env::var("JUMIA_SITE") {
            self.site = site;
        }

        if let Ok(category) = std::env::var("JUMIA_CATEGORY") {
            self.category = category;
        }

        if let Ok(delay) = std::env::var("JUMIA_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        if let Ok(timeout) = std::env::var("JUMIA_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(agent) = std::env::var("JUMIA_USER_AGENT") {
            self.identity.user_agent = agent;
        }

        if let Ok(contact) = std::env::var("JUMIA_CONTACT") {
            self.identity.contact = contact;
        }

        self
    }

    /// Category listing URL: `<site>/<category>/`.
    ///
    /// Each path segment of the category is percent-encoded on its own, so
    /// nested categories keep their `/` separators.
    pub fn category_url(&self) -> String {
        let path = self
            .category
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!("{}/{}/", self.site.trim_end_matches('/'), path)
    }
}

/// Output format for the console preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
