use crate::models::gallery::GalleryContent;
use crate::models::{usable_photos, Photo};
use crate::page::Dom;
use crate::regions;
use crate::render::html_escape;

/// Replace the gallery strip, but only when at least one photo has an image.
/// Placeholder data never blanks a populated gallery.
pub fn bind(dom: &mut dyn Dom, data: Option<&GalleryContent>) {
    let Some(data) = data else {
        return;
    };
    if let Some(html) = render_strip(data.photos()) {
        dom.set_html(regions::GALLERY, &html);
    }
}

/// `None` when no photo has a usable image URL.
pub fn render_strip(photos: &[Photo]) -> Option<String> {
    let mut html = String::new();
    for (photo, url) in usable_photos(photos) {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape(url),
            html_escape(photo.alt.as_deref().unwrap_or(""))
        ));
    }
    if html.is_empty() {
        None
    } else {
        Some(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{normalized, HtmlPage};

    const PAGE: &str = r#"<div id="cms-gallery"><img src="/static/g1.jpg" alt="Dining room"></div>"#;

    fn gallery(json: &str) -> GalleryContent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_renders_usable_photos_in_order() {
        let mut page = HtmlPage::new(PAGE);
        bind(
            &mut page,
            Some(&gallery(r#"{"photos": [{"image": "/a.jpg", "alt": "A"}, {"image": ""}, {"image": "/c.jpg"}]}"#)),
        );
        assert_eq!(
            page.inner_html("cms-gallery"),
            Some(normalized(r#"<img src="/a.jpg" alt="A"><img src="/c.jpg" alt="">"#))
        );
    }

    #[test]
    fn test_placeholder_photos_keep_existing_strip() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, Some(&gallery(r#"{"photos": [{"image": ""}, {"alt": "x"}]}"#)));
        bind(&mut page, Some(&gallery(r#"{"photos": []}"#)));
        bind(&mut page, Some(&gallery("{}")));
        assert_eq!(page.to_html(), PAGE);
    }
}
