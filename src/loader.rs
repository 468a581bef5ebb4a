use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::DocumentPaths;
use crate::models::about::AboutContent;
use crate::models::footer::FooterContent;
use crate::models::gallery::GalleryContent;
use crate::models::instagram::InstagramContent;
use crate::models::menu::MenuContent;

/// Why a content document could not be used. Only ever logged: callers of
/// [`ContentSource::load_json`] see an absent document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document path {0:?}")]
    BadPath(String),
}

/// Where content documents come from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Fetched over HTTP, document paths resolved against `base`.
    Http { client: reqwest::Client, base: Url },
    /// Read from a directory, document paths taken relative to it.
    Dir(PathBuf),
}

/// The five content documents of one page load; any of them may be absent.
#[derive(Debug, Default)]
pub struct ContentBundle {
    pub about: Option<AboutContent>,
    pub gallery: Option<GalleryContent>,
    pub menu: Option<MenuContent>,
    pub footer: Option<FooterContent>,
    pub instagram: Option<InstagramContent>,
}

impl ContentBundle {
    pub fn available(&self) -> usize {
        [
            self.about.is_some(),
            self.gallery.is_some(),
            self.menu.is_some(),
            self.footer.is_some(),
            self.instagram.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

impl ContentSource {
    /// `http://` and `https://` roots select HTTP, anything else is a directory.
    pub fn from_root(root: &str, timeout: Duration) -> Result<Self, String> {
        if root.starts_with("http://") || root.starts_with("https://") {
            let base = Url::parse(root).map_err(|e| format!("Invalid content_root {}: {}", root, e))?;
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| format!("HTTP client error: {}", e))?;
            Ok(ContentSource::Http { client, base })
        } else {
            Ok(ContentSource::Dir(PathBuf::from(root)))
        }
    }

    /// Load and parse one document. Every failure becomes `None`.
    pub async fn load_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.fetch(path).await {
            Ok(doc) => {
                debug!("Loaded {}", path);
                Some(doc)
            }
            Err(e) => {
                warn!("Content document {} unavailable: {}", path, e);
                None
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let body = match self {
            ContentSource::Http { client, base } => {
                let url = base
                    .join(path)
                    .map_err(|e| LoadError::BadPath(format!("{}: {}", path, e)))?;
                let resp = client.get(url).send().await?;
                if !resp.status().is_success() {
                    return Err(LoadError::Status(resp.status().as_u16()));
                }
                resp.bytes().await?.to_vec()
            }
            ContentSource::Dir(root) => tokio::fs::read(resolve_in(root, path)?).await?,
        };
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Map a site path such as `/_data/menu.json` into `root`, refusing anything
/// that would leave it.
fn resolve_in(root: &Path, path: &str) -> Result<PathBuf, LoadError> {
    let relative = Path::new(path.trim_start_matches('/'));
    let inside = relative.components().next().is_some()
        && relative.components().all(|c| matches!(c, Component::Normal(_)));
    if !inside {
        return Err(LoadError::BadPath(path.to_string()));
    }
    Ok(root.join(relative))
}

/// Request all five documents at once and wait for every one to settle.
pub async fn load_all(source: &ContentSource, paths: &DocumentPaths) -> ContentBundle {
    let (about, gallery, menu, footer, instagram) = tokio::join!(
        source.load_json::<AboutContent>(&paths.about),
        source.load_json::<GalleryContent>(&paths.gallery),
        source.load_json::<MenuContent>(&paths.menu),
        source.load_json::<FooterContent>(&paths.footer),
        source.load_json::<InstagramContent>(&paths.instagram),
    );
    ContentBundle { about, gallery, menu, footer, instagram }
}
