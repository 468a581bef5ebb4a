use log::debug;
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

use crate::render::html_escape;

/// Elements that never carry content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Element-level editing primitives the binders need from the host page.
/// Every mutating call is a no-op returning `false` (or `0`) when the target
/// id is not present in the page.
pub trait Dom {
    fn contains(&self, id: &str) -> bool;

    /// Replace the content of an element with a markup fragment.
    fn set_html(&mut self, id: &str, html: &str) -> bool;

    /// Set (or overwrite) an attribute on the element.
    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool;

    fn remove_attr(&mut self, id: &str, name: &str) -> bool;

    /// Remove every descendant of `container_id` carrying `class`.
    /// Returns the number of elements removed.
    fn remove_by_class(&mut self, container_id: &str, class: &str) -> usize;

    /// Append a markup fragment after the existing content of an element.
    fn append_html(&mut self, container_id: &str, html: &str) -> bool;

    /// Replace the content of an element with escaped text.
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.set_html(id, &html_escape(text))
    }
}

/// A host page parsed into an HTML5 document tree and edited by element id.
/// A page that was never edited is written back byte for byte; an edited one
/// is serialized from the tree.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    source: String,
    doc: Html,
    edited: bool,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        let source = html.into();
        let doc = Html::parse_document(&source);
        HtmlPage { source, doc, edited: false }
    }

    pub fn to_html(&self) -> String {
        if self.edited {
            self.doc.html()
        } else {
            self.source.clone()
        }
    }

    pub fn into_html(self) -> String {
        if self.edited {
            self.doc.html()
        } else {
            self.source
        }
    }

    /// Content of an element, or `None` if it is missing or a void element.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.find(id).filter(holds_content).map(|el| el.inner_html())
    }

    /// Value of an attribute on the element carrying `id`.
    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.find(id).and_then(|el| attr_of(el.value(), name))
    }

    /// First element in document order carrying `id`, like `getElementById`.
    fn find(&self, id: &str) -> Option<ElementRef<'_>> {
        self.doc
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
    }

    fn find_or_log(&self, id: &str) -> Option<ElementRef<'_>> {
        let found = self.find(id);
        if found.is_none() {
            debug!("Region #{} not present in page, skipping", id);
        }
        found
    }

    fn content_holder(&self, id: &str) -> Option<ElementRef<'_>> {
        let el = self.find_or_log(id)?;
        if !holds_content(&el) {
            debug!("Region #{} is a <{}> and cannot hold content", id, el.value().name());
            return None;
        }
        Some(el)
    }

    /// Run `edit` against the element carrying `id`.
    fn edit_element<R>(&mut self, id: &str, edit: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let target = self.find_or_log(id)?.id();
        let mut node = self.doc.tree.get_mut(target)?;
        match node.value() {
            Node::Element(el) => {
                self.edited = true;
                Some(edit(el))
            }
            _ => None,
        }
    }
}

impl Dom for HtmlPage {
    fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        let Some(target) = self.content_holder(id).map(|el| el.id()) else {
            return false;
        };
        let children: Vec<_> = self
            .doc
            .tree
            .get(target)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default();
        for child in children {
            if let Some(mut node) = self.doc.tree.get_mut(child) {
                node.detach();
            }
        }
        self.edited = true;
        self.append_html(id, html)
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        self.edit_element(id, |el| {
            if let Some(slot) = el.attrs.iter_mut().find(|attr| &*attr.0.local == name) {
                slot.1 = value.into();
                return;
            }
            let mut key = el.name.clone();
            key.prefix = None;
            key.ns = "".into();
            key.local = name.into();
            // Kept sorted: element attribute lookups binary-search this list.
            let at = el.attrs.partition_point(|attr| attr.0 < key);
            el.attrs.insert(at, (key, value.into()));
        })
        .is_some()
    }

    fn remove_attr(&mut self, id: &str, name: &str) -> bool {
        self.edit_element(id, |el| {
            let before = el.attrs.len();
            el.attrs.retain(|attr| &*attr.0.local != name);
            el.attrs.len() != before
        })
        .unwrap_or(false)
    }

    fn remove_by_class(&mut self, container_id: &str, class: &str) -> usize {
        let Some(container) = self.find_or_log(container_id) else {
            return 0;
        };
        let root = container.id();

        // Outermost matches only; nested ones leave with their ancestor.
        let targets: Vec<_> = container
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| has_class(el.value(), class))
            .filter(|el| {
                !el.ancestors()
                    .take_while(|a| a.id() != root)
                    .filter_map(ElementRef::wrap)
                    .any(|a| has_class(a.value(), class))
            })
            .map(|el| el.id())
            .collect();

        for target in &targets {
            if let Some(mut node) = self.doc.tree.get_mut(*target) {
                node.detach();
            }
        }
        if !targets.is_empty() {
            self.edited = true;
        }
        targets.len()
    }

    fn append_html(&mut self, container_id: &str, html: &str) -> bool {
        let Some(target) = self.content_holder(container_id).map(|el| el.id()) else {
            return false;
        };
        let fragment = Html::parse_fragment(html);

        // Copy the parsed fragment's nodes under the target, keeping order.
        let mut pending = vec![(target, *fragment.root_element())];
        while let Some((parent, source)) = pending.pop() {
            for child in source.children() {
                let Some(mut parent_node) = self.doc.tree.get_mut(parent) else {
                    continue;
                };
                let copied = parent_node.append(child.value().clone()).id();
                pending.push((copied, child));
            }
        }
        self.edited = true;
        true
    }
}

fn holds_content(el: &ElementRef<'_>) -> bool {
    !VOID_ELEMENTS.contains(&el.value().name())
}

fn attr_of<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
    el.attrs().find(|(key, _)| *key == name).map(|(_, value)| value)
}

fn has_class(el: &Element, class: &str) -> bool {
    attr_of(el, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Markup as the page serializer writes it back, for comparing fragments
/// independent of attribute order and quoting.
#[cfg(test)]
pub fn normalized(fragment: &str) -> String {
    Html::parse_fragment(fragment).root_element().inner_html()
}

/// A whole document as the page serializer writes it back.
#[cfg(test)]
pub fn normalized_document(html: &str) -> String {
    Html::parse_document(html).html()
}
