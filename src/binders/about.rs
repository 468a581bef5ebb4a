use crate::models::about::{AboutContent, Stat};
use crate::page::Dom;
use crate::regions;
use crate::render::{html_escape, multiline_html, non_empty};

/// Write every present field of the about document to its region.
/// Missing fields keep whatever the page already shows.
pub fn bind(dom: &mut dyn Dom, data: Option<&AboutContent>) {
    let Some(data) = data else {
        return;
    };

    if let Some(label) = &data.section_label {
        dom.set_text(regions::ABOUT_LABEL, label);
    }
    if let Some(title) = non_empty(data.section_title.as_deref()) {
        dom.set_html(regions::ABOUT_TITLE, &multiline_html(title));
    }
    if let Some(p1) = &data.paragraph1 {
        dom.set_text(regions::ABOUT_P1, p1);
    }
    if let Some(p2) = &data.paragraph2 {
        dom.set_text(regions::ABOUT_P2, p2);
    }

    let stats = data.stats();
    if !stats.is_empty() {
        dom.set_html(regions::ABOUT_STATS, &render_stats(stats));
    }

    if let Some(photo) = non_empty(data.photo.as_deref()) {
        dom.set_attr(regions::ABOUT_PHOTO, "src", photo);
    }
}

pub fn render_stats(stats: &[Stat]) -> String {
    let mut html = String::new();
    for stat in stats {
        html.push_str(&format!(
            "<div><div class=\"about-stat-number\">{}</div><div class=\"about-stat-label\">{}</div></div>",
            html_escape(&stat.number.as_ref().map(|n| n.to_string()).unwrap_or_default()),
            html_escape(stat.label.as_deref().unwrap_or("")),
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    const PAGE: &str = r#"<span id="cms-about-label">Our Story</span>
<h2 id="cms-about-title">Default title</h2>
<p id="cms-about-p1">Default one</p>
<p id="cms-about-p2">Default two</p>
<div id="cms-about-stats"><div>10 years</div></div>
<img id="cms-about-photo" src="/static/about.jpg" alt="">"#;

    fn about(json: &str) -> AboutContent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_document_changes_nothing() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, None);
        assert_eq!(page.to_html(), PAGE);
    }

    #[test]
    fn test_title_line_breaks() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, Some(&about(r#"{"sectionTitle": "Fresh food,\nmade <daily>"}"#)));
        assert_eq!(page.inner_html("cms-about-title").as_deref(), Some("Fresh food,<br>made &lt;daily&gt;"));
    }

    #[test]
    fn test_empty_title_is_ignored() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, Some(&about(r#"{"sectionTitle": ""}"#)));
        assert_eq!(page.to_html(), PAGE);
    }

    #[test]
    fn test_stats_replace_region() {
        let mut page = HtmlPage::new(PAGE);
        bind(
            &mut page,
            Some(&about(r#"{"stats": [{"number": 25, "label": "Years"}, {"number": "3k+", "label": "Guests"}]}"#)),
        );
        assert_eq!(
            page.inner_html("cms-about-stats").as_deref(),
            Some(
                "<div><div class=\"about-stat-number\">25</div><div class=\"about-stat-label\">Years</div></div>\
                 <div><div class=\"about-stat-number\">3k+</div><div class=\"about-stat-label\">Guests</div></div>"
            )
        );
    }

    #[test]
    fn test_empty_stats_keep_defaults() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, Some(&about(r#"{"stats": []}"#)));
        assert_eq!(page.inner_html("cms-about-stats").as_deref(), Some("<div>10 years</div>"));
    }

    #[test]
    fn test_photo_sets_src() {
        let mut page = HtmlPage::new(PAGE);
        bind(&mut page, Some(&about(r#"{"photo": "/uploads/team.jpg", "sectionLabel": "About"}"#)));
        assert_eq!(page.attr("cms-about-photo", "src"), Some("/uploads/team.jpg"));
        assert_eq!(page.inner_html("cms-about-label").as_deref(), Some("About"));
        assert_eq!(page.inner_html("cms-about-title").as_deref(), Some("Default title"));
    }
}
