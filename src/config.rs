use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

/// Default config file, read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "binder.toml";

#[derive(Debug, Parser)]
#[command(name = "cms-binder")]
#[command(about = "Bind CMS content documents into the placeholder regions of a static page")]
pub struct Cli {
    /// Config file to read
    #[arg(env = "CMS_BINDER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host page holding the `cms-*` placeholder regions.
    pub page: PathBuf,
    /// Where the bound page is written; `-` means stdout.
    pub output: String,
    /// Local content directory, or an `http(s)://` base URL.
    pub content_root: String,
    /// Per-request timeout for HTTP content sources.
    pub timeout_secs: u64,
    /// Menu panel to show instead of the first one.
    pub initial_tab: Option<String>,
    pub documents: DocumentPaths,
}

/// Well-known locations of the five content documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentPaths {
    pub about: String,
    pub gallery: String,
    pub menu: String,
    pub footer: String,
    pub instagram: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page: PathBuf::from("website/index.html"),
            output: "-".to_string(),
            content_root: "website".to_string(),
            timeout_secs: 10,
            initial_tab: None,
            documents: DocumentPaths::default(),
        }
    }
}

impl Default for DocumentPaths {
    fn default() -> Self {
        DocumentPaths {
            about: "/_data/about.json".to_string(),
            gallery: "/_data/gallery.json".to_string(),
            menu: "/_data/menu.json".to_string(),
            footer: "/_data/footer.json".to_string(),
            instagram: "/_data/instagram.json".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            warn!("{} not found, using default config", path.display());
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::parse(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(text).map_err(|e| format!("Invalid config: {}", e))?;
        if config.timeout_secs == 0 {
            return Err("Invalid config: timeout_secs must be at least 1".to_string());
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }
}
