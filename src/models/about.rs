use serde::{Deserialize, Serialize};

use super::Scalar;

/// `about.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub section_label: Option<String>,
    /// May contain `\n` line breaks.
    pub section_title: Option<String>,
    pub paragraph1: Option<String>,
    pub paragraph2: Option<String>,
    pub stats: Option<Vec<Stat>>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub number: Option<Scalar>,
    pub label: Option<String>,
}

impl AboutContent {
    pub fn stats(&self) -> &[Stat] {
        self.stats.as_deref().unwrap_or_default()
    }
}
