//! Smooth scrolling for same-document anchor links.
//!
//! Every `a[href^='#']` present at setup gets a click handler that
//! suppresses the default jump and smooth-scrolls the target's top to the
//! viewport top instead. Links added later are not covered.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition};

/// Extracts the target id from a pure-fragment href. Only `#some-id`
/// qualifies; a bare `#`, a path, or an absolute URL does not.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Binds the click interception to every qualifying link in the document.
pub fn bind(document: &Document) {
    let Ok(links) = document.query_selector_all("a[href^='#']") else {
        return;
    };

    for index in 0..links.length() {
        let Some(link) = links.item(index) else {
            continue;
        };
        let Ok(link) = link.dyn_into::<Element>() else {
            continue;
        };

        let document = document.clone();
        let link_handle = link.clone();
        let click_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            // Default navigation is suppressed before the fragment is
            // resolved, so a dangling fragment is a dead click rather
            // than a jump. Deliberate: changing this to fall back to the
            // default jump would be a behavior change.
            event.prevent_default();

            let Some(href) = link_handle.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }) as Box<dyn FnMut(MouseEvent)>);

        if link
            .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
            .is_ok()
        {
            click_callback.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pure_fragment_hrefs() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#performance"), Some("performance"));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/pricing"), None);
        assert_eq!(fragment_id("https://example.com/#features"), None);
    }
}
