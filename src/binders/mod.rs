//! One binder per content document. Each maps its document onto its own
//! page regions and leaves the page untouched when the document is absent.

pub mod about;
pub mod footer;
pub mod gallery;
pub mod instagram;
pub mod menu;
