use crate::models::instagram::InstagramContent;
use crate::models::{usable_photos, Photo};
use crate::page::Dom;
use crate::regions;
use crate::render::{external_link, html_escape, non_empty};

const DEFAULT_ALT: &str = "Instagram post";

const IG_ICON: &str = r#"<div class="ig-icon"><svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><rect x="2" y="2" width="20" height="20" rx="5"/><circle cx="12" cy="12" r="5"/><circle cx="17.5" cy="6.5" r="1.5" fill="currentColor" stroke="none"/></svg></div>"#;

pub fn bind(dom: &mut dyn Dom, data: Option<&InstagramContent>) {
    let Some(data) = data else {
        return;
    };

    if let (Some(handle), Some(url)) = (
        non_empty(data.handle.as_deref()),
        non_empty(data.profile_url.as_deref()),
    ) {
        dom.set_html(regions::INSTAGRAM_HANDLE, &render_follow_line(handle, url));
    }

    if let Some(html) = render_grid(data.photos()) {
        dom.set_html(regions::INSTAGRAM_GRID, &html);
    }
}

pub fn render_follow_line(handle: &str, profile_url: &str) -> String {
    format!(
        "Follow us at {}",
        external_link(profile_url, &format!("@{}", html_escape(handle)))
    )
}

/// Same exclusion rules as the gallery strip; `None` leaves the grid as is.
pub fn render_grid(photos: &[Photo]) -> Option<String> {
    let mut html = String::new();
    for (photo, url) in usable_photos(photos) {
        html.push_str(&format!(
            "<div class=\"instagram-post\"><img src=\"{}\" alt=\"{}\">{}</div>",
            html_escape(url),
            html_escape(non_empty(photo.alt.as_deref()).unwrap_or(DEFAULT_ALT)),
            IG_ICON
        ));
    }
    if html.is_empty() {
        None
    } else {
        Some(html)
    }
}
