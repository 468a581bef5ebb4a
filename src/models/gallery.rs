use serde::{Deserialize, Serialize};

use super::Photo;

/// `gallery.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryContent {
    pub photos: Option<Vec<Photo>>,
}

impl GalleryContent {
    pub fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or_default()
    }
}
