use log::info;

use crate::binders::{about, footer, gallery, instagram, menu};
use crate::loader::ContentBundle;
use crate::page::HtmlPage;
use crate::tabs::MenuTabs;

/// Owns the host page for one page load, plus the menu tab state the
/// binders produce.
pub struct PageController {
    page: HtmlPage,
    tabs: Option<MenuTabs>,
}

impl PageController {
    pub fn new(page: HtmlPage) -> Self {
        PageController { page, tabs: None }
    }

    /// Run every binder in fixed order. Each one runs regardless of what
    /// the others did and only touches its own regions.
    pub fn bind(&mut self, bundle: &ContentBundle) {
        about::bind(&mut self.page, bundle.about.as_ref());
        gallery::bind(&mut self.page, bundle.gallery.as_ref());
        if let Some(tabs) = menu::bind(&mut self.page, bundle.menu.as_ref()) {
            self.tabs = Some(tabs);
        }
        footer::bind(&mut self.page, bundle.footer.as_ref());
        instagram::bind(&mut self.page, bundle.instagram.as_ref());

        info!("Bound {} of 5 content documents", bundle.available());
    }

    /// Show one menu panel and hide the rest. `false` when there is no
    /// bound menu or no panel with that id.
    pub fn switch_tab(&mut self, panel_id: &str) -> bool {
        match self.tabs.as_mut() {
            Some(tabs) => tabs.activate(&mut self.page, panel_id),
            None => false,
        }
    }

    pub fn tabs(&self) -> Option<&MenuTabs> {
        self.tabs.as_ref()
    }

    pub fn page(&self) -> &HtmlPage {
        &self.page
    }

    pub fn into_html(self) -> String {
        self.page.into_html()
    }
}
