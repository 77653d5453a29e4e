//! Small browser helpers. Every lookup may fail (no window in tests, element not
//! rendered yet); failures are logged and ignored.

use econest::Theme;
use tracing::{debug, warn};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        debug!(id, "scroll target not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

/// Put the theme class on `<html>`, replacing any previous theme class.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let classes = root.class_list();
    for other in [Theme::Light, Theme::Dark] {
        if other != theme {
            let _ = classes.remove_1(other.as_class());
        }
    }
    if let Err(err) = classes.add_1(theme.as_class()) {
        warn!(?err, "failed to apply theme class");
    }
}

/// Reload the current page (error fallback).
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        warn!(?err, "page reload failed");
    }
}
