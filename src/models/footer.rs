use serde::{Deserialize, Serialize};

/// `footer.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub tagline: Option<String>,
    pub motto: Option<String>,
    pub hours: Option<Vec<HoursEntry>>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoursEntry {
    pub days: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Option<String>,
    pub url: Option<String>,
}

/// Placeholder url the CMS ships before a profile is configured.
pub const PLACEHOLDER_URL: &str = "#";

impl FooterContent {
    pub fn hours(&self) -> &[HoursEntry] {
        self.hours.as_deref().unwrap_or_default()
    }

    pub fn social_links(&self) -> &[SocialLink] {
        self.social_links.as_deref().unwrap_or_default()
    }

    pub fn has_contact(&self) -> bool {
        [&self.address, &self.phone, &self.email]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

impl SocialLink {
    /// The url, unless it is absent, empty or the `#` placeholder.
    pub fn live_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != PLACEHOLDER_URL)
    }
}
