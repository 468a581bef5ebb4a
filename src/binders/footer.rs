use crate::models::footer::{FooterContent, HoursEntry, SocialLink};
use crate::page::Dom;
use crate::regions;
use crate::render::{dial_target, external_link, html_escape, non_empty};

pub fn bind(dom: &mut dyn Dom, data: Option<&FooterContent>) {
    let Some(data) = data else {
        return;
    };

    if let Some(tagline) = &data.tagline {
        dom.set_text(regions::FOOTER_TAGLINE, tagline);
    }
    if let Some(motto) = &data.motto {
        dom.set_text(regions::FOOTER_MOTTO, motto);
    }

    let hours = data.hours();
    if !hours.is_empty() {
        dom.set_html(regions::FOOTER_HOURS, &render_hours(hours));
    }

    if data.has_contact() {
        dom.set_html(regions::FOOTER_CONTACT, &render_contact(data));
    }

    let socials = data.social_links();
    if !socials.is_empty() {
        dom.set_html(regions::FOOTER_SOCIALS, &render_socials(socials));
    }
}

pub fn render_hours(hours: &[HoursEntry]) -> String {
    hours
        .iter()
        .map(|h| {
            format!(
                "<li><a href=\"#\">{}: {}</a></li>",
                html_escape(h.days.as_deref().unwrap_or("")),
                html_escape(h.time.as_deref().unwrap_or(""))
            )
        })
        .collect()
}

/// Address, phone and email, each rendered only when present.
pub fn render_contact(data: &FooterContent) -> String {
    let mut html = String::new();
    if let Some(address) = non_empty(data.address.as_deref()) {
        html.push_str(&format!("{}<br>", html_escape(address)));
    }
    if let Some(phone) = non_empty(data.phone.as_deref()) {
        html.push_str(&format!(
            "<a href=\"tel:{}\">{}</a><br>",
            dial_target(phone),
            html_escape(phone)
        ));
    }
    if let Some(email) = non_empty(data.email.as_deref()) {
        html.push_str(&format!(
            "<a href=\"mailto:{}\">{}</a>",
            html_escape(email),
            html_escape(email)
        ));
    }
    format!("<p>{}</p>", html)
}

/// Live profiles open externally; placeholder links stay inert.
pub fn render_socials(links: &[SocialLink]) -> String {
    let mut html = String::new();
    for link in links {
        let label = html_escape(link.platform.as_deref().unwrap_or(""));
        match link.live_url() {
            Some(url) => html.push_str(&external_link(url, &label)),
            None => html.push_str(&format!("<a href=\"#\">{}</a>", label)),
        }
    }
    html
}
