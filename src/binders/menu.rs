use std::collections::HashSet;

use log::{debug, warn};

use crate::models::menu::{MenuCategory, MenuContent, MenuItem, OptionGroup};
use crate::models::Scalar;
use crate::page::Dom;
use crate::regions;
use crate::render::html_escape;
use crate::tabs::{MenuTabs, Tab, HIDDEN_STYLE};

/// Marker class shared by every rendered category panel.
pub const PANEL_CLASS: &str = "menu-content";

/// Rebuild the tab strip and every category panel from the menu document.
/// Panels from an earlier bind are removed first, so rebinding the same
/// document leaves the same page. Returns the tab state for the controller.
pub fn bind(dom: &mut dyn Dom, data: Option<&MenuContent>) -> Option<MenuTabs> {
    let data = data?;
    let categories = usable_categories(data.categories());
    if categories.is_empty() {
        return None;
    }
    if !dom.contains(regions::MENU_TABS) || !dom.contains(regions::MENU_INNER) {
        debug!("Menu regions missing from page, skipping menu");
        return None;
    }

    let tabs = MenuTabs::new(
        categories
            .iter()
            .map(|(id, cat)| Tab {
                panel_id: id.clone(),
                label: display(cat.name.as_ref()),
            })
            .collect(),
    );
    dom.set_html(regions::MENU_TABS, &tabs.render_strip());

    dom.remove_by_class(regions::MENU_INNER, PANEL_CLASS);

    let panels: String = categories
        .iter()
        .enumerate()
        .map(|(i, (id, cat))| render_panel(id, cat, i == 0))
        .collect();
    dom.append_html(regions::MENU_INNER, &panels);

    Some(tabs)
}

/// Categories that can be addressed as a panel, paired with their id.
/// Ids are reused as element ids and inside the tab's click handler, so
/// missing, malformed and repeated ids are dropped. Numeric ids are used
/// in their printed form.
fn usable_categories(categories: &[MenuCategory]) -> Vec<(String, &MenuCategory)> {
    let mut seen = HashSet::new();
    let mut usable = Vec::with_capacity(categories.len());
    for cat in categories {
        let id = display(cat.id.as_ref());
        if !is_valid_panel_id(&id) {
            warn!("Skipping menu category {:?}: invalid id {:?}", cat.name, id);
            continue;
        }
        if !seen.insert(id.clone()) {
            warn!("Skipping menu category {:?}: duplicate id {:?}", cat.name, id);
            continue;
        }
        usable.push((id, cat));
    }
    usable
}

/// Printed form of an optional scalar; absent renders as empty text.
fn display(value: Option<&Scalar>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn is_valid_panel_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&' | '\\'))
}

pub fn render_panel(id: &str, category: &MenuCategory, visible: bool) -> String {
    let mut html = format!(
        "<div id=\"{}\" class=\"{}\"{}>",
        html_escape(id),
        PANEL_CLASS,
        if visible { String::new() } else { format!(" style=\"{}\"", HIDDEN_STYLE) }
    );

    html.push_str("<div class=\"menu-columns\">");
    for item in category.items() {
        html.push_str(&render_item(item));
    }
    html.push_str("</div>");

    let groups = category.options_groups();
    if !groups.is_empty() {
        html.push_str("<div class=\"menu-options-grid\">");
        for group in groups {
            html.push_str(&render_option_group(group));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

fn render_item(item: &MenuItem) -> String {
    let mut html = String::from("<div class=\"menu-item\"><div>");
    html.push_str(&format!(
        "<div class=\"menu-item-name\">{}</div>",
        html_escape(item.name.as_deref().unwrap_or(""))
    ));
    if let Some(desc) = item.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!("<div class=\"menu-item-desc\">{}</div>", html_escape(desc)));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"menu-item-price\">{}</div>",
        html_escape(&item.price.as_ref().map(|p| p.to_string()).unwrap_or_default())
    ));
    html.push_str("</div>");
    html
}

fn render_option_group(group: &OptionGroup) -> String {
    let mut html = format!(
        "<div class=\"menu-options-col\"><h4 class=\"menu-options-heading\">{}</h4><ul class=\"menu-options-list\">",
        html_escape(&display(group.heading.as_ref()))
    );
    for opt in group.options() {
        html.push_str(&format!("<li>{}</li>", html_escape(&opt.to_string())));
    }
    html.push_str("</ul></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    const PAGE: &str = r#"<section id="cms-menu-inner"><h2>Menu</h2><div id="cms-menu-tabs"><button class="menu-tab active">Static</button></div><div id="static" class="menu-content">static menu</div></section>"#;

    fn menu(json: &str) -> MenuContent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_item_without_description() {
        let item: MenuItem = serde_json::from_str(r#"{"name": "Soup", "price": "$6"}"#).unwrap();
        assert_eq!(
            render_item(&item),
            "<div class=\"menu-item\"><div><div class=\"menu-item-name\">Soup</div></div><div class=\"menu-item-price\">$6</div></div>"
        );
    }

    #[test]
    fn test_option_groups_rendered() {
        let cat: MenuCategory = serde_json::from_str(
            r#"{"id": "plates", "name": "Plates", "items": [], "optionsGroups": [{"heading": "Sides", "options": ["Rice", "Beans"]}, {"heading": "Sauces"}]}"#,
        )
        .unwrap();
        let html = render_panel("plates", &cat, false);
        assert!(html.starts_with("<div id=\"plates\" class=\"menu-content\" style=\"display:none\">"));
        assert!(html.contains(
            "<div class=\"menu-options-grid\"><div class=\"menu-options-col\"><h4 class=\"menu-options-heading\">Sides</h4><ul class=\"menu-options-list\"><li>Rice</li><li>Beans</li></ul></div>"
        ));
        assert!(html.contains("<h4 class=\"menu-options-heading\">Sauces</h4><ul class=\"menu-options-list\"></ul>"));
    }

    #[test]
    fn test_no_option_grid_without_groups() {
        let cat: MenuCategory = serde_json::from_str(r#"{"id": "a", "items": [{"name": "Tea", "price": 2}]}"#).unwrap();
        assert!(!render_panel("a", &cat, true).contains("menu-options-grid"));
    }

    #[test]
    fn test_bind_replaces_static_panels() {
        let mut page = HtmlPage::new(PAGE);
        let tabs = bind(
            &mut page,
            Some(&menu(r#"{"categories": [{"id": "breakfast", "name": "Breakfast", "items": [{"name": "Eggs", "price": 8}]}, {"id": "lunch", "name": "Lunch"}]}"#)),
        )
        .unwrap();
        assert_eq!(tabs.active_id(), Some("breakfast"));
        assert!(!page.contains("static"));
        assert!(page.contains("breakfast"));
        assert!(page.contains("lunch"));
        assert_eq!(page.attr("breakfast", "style"), None);
        assert_eq!(page.attr("lunch", "style"), Some(HIDDEN_STYLE));
        assert!(page.inner_html("cms-menu-inner").unwrap().starts_with("<h2>Menu</h2><div id=\"cms-menu-tabs\">"));
    }

    #[test]
    fn test_empty_or_absent_menu_is_noop() {
        let mut page = HtmlPage::new(PAGE);
        assert!(bind(&mut page, None).is_none());
        assert!(bind(&mut page, Some(&menu(r#"{"categories": []}"#))).is_none());
        assert!(bind(&mut page, Some(&menu("{}"))).is_none());
        assert_eq!(page.to_html(), PAGE);
    }

    #[test]
    fn test_invalid_and_duplicate_ids_skipped() {
        let data = menu(
            r#"{"categories": [{"id": "a", "name": "A"}, {"name": "No id"}, {"id": "b c", "name": "Space"}, {"id": "a", "name": "Again"}, {"id": "x');alert(1);('", "name": "Bad"}]}"#,
        );
        let ids: Vec<String> = usable_categories(data.categories()).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_numeric_ids_names_and_options_render() {
        let data = menu(
            r#"{"categories": [{"id": 7, "name": 2024, "items": [], "optionsGroups": [{"heading": "Sizes", "options": ["S", 12]}]}]}"#,
        );
        let mut page = HtmlPage::new(PAGE);
        let tabs = bind(&mut page, Some(&data)).unwrap();
        assert_eq!(tabs.active_id(), Some("7"));
        assert!(page.inner_html("cms-menu-tabs").unwrap().contains("switchTab('7')\">2024</button>"));
        assert!(page.inner_html("7").unwrap().contains("<li>S</li><li>12</li>"));
    }
}
