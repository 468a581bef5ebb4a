use serde::{Deserialize, Serialize};

use super::Photo;

/// `instagram.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramContent {
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub photos: Option<Vec<Photo>>,
}

impl InstagramContent {
    pub fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or_default()
    }
}
