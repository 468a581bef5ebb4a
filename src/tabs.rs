use log::debug;

use crate::page::Dom;
use crate::regions;
use crate::render::html_escape;

/// Inline style that hides an inactive menu panel.
pub const HIDDEN_STYLE: &str = "display:none";

/// Page-side action the tab buttons invoke in the browser.
const ACTIVATE_ACTION: &str = "switchTab";

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Element id of the panel this tab shows.
    pub panel_id: String,
    pub label: String,
}

/// Tab strip state for the menu: which panels exist and which one is shown.
/// Owned by the page controller; the first tab starts active.
#[derive(Debug, Clone)]
pub struct MenuTabs {
    tabs: Vec<Tab>,
    active: usize,
}

impl MenuTabs {
    pub fn new(tabs: Vec<Tab>) -> Self {
        MenuTabs { tabs, active: 0 }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.tabs.get(self.active).map(|t| t.panel_id.as_str())
    }

    /// One button per tab, the active one carrying the `active` class.
    pub fn render_strip(&self) -> String {
        let mut html = String::new();
        for (i, tab) in self.tabs.iter().enumerate() {
            html.push_str(&format!(
                "<button class=\"menu-tab{}\" onclick=\"{}('{}')\">{}</button>",
                if i == self.active { " active" } else { "" },
                ACTIVATE_ACTION,
                html_escape(&tab.panel_id),
                html_escape(&tab.label),
            ));
        }
        html
    }

    /// Show the panel with `panel_id`, hide every other one and move the
    /// `active` marker to its tab. Unknown ids change nothing.
    pub fn activate(&mut self, dom: &mut dyn Dom, panel_id: &str) -> bool {
        let Some(index) = self.tabs.iter().position(|t| t.panel_id == panel_id) else {
            debug!("No menu panel #{}, tab unchanged", panel_id);
            return false;
        };

        for (i, tab) in self.tabs.iter().enumerate() {
            if i == index {
                dom.remove_attr(&tab.panel_id, "style");
            } else {
                dom.set_attr(&tab.panel_id, "style", HIDDEN_STYLE);
            }
        }
        self.active = index;
        dom.set_html(regions::MENU_TABS, &self.render_strip());
        true
    }
}
