//! Shared markup helpers used by the region binders.

/// Escape text for use in element content or a double-quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape text and turn embedded line breaks into `<br>`.
pub fn multiline_html(s: &str) -> String {
    html_escape(&s.replace("\r\n", "\n")).replace('\n', "<br>")
}

/// Returns the value when it is present and non-empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Dialable target for a `tel:` link: digits only, plus a leading `+`.
/// e.g. "+1 (555) 123-4567" => "+15551234567"
/// A `+` anywhere after the first kept character is dropped along with the
/// other punctuation, so "555 ext+2" dials "5552".
pub fn dial_target(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Anchor that opens in a new browsing context without a back-reference.
pub fn external_link(href: &str, label_html: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
        html_escape(href),
        label_html
    )
}
