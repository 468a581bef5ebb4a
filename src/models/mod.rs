use std::fmt;

use serde::{Deserialize, Serialize};

pub mod about;
pub mod footer;
pub mod gallery;
pub mod instagram;
pub mod menu;

/// A display value the CMS may send either as a JSON string or a number
/// (stat figures, prices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One photo of the gallery strip or the Instagram grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    pub image: Option<String>,
    pub alt: Option<String>,
}

impl Photo {
    /// The image URL, if there is one worth rendering.
    pub fn usable_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Photos with a usable image URL, in document order.
pub fn usable_photos(photos: &[Photo]) -> impl Iterator<Item = (&Photo, &str)> {
    photos.iter().filter_map(|p| p.usable_image().map(|url| (p, url)))
}
