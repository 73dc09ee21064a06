//! Navbar restyling on scroll.
//!
//! The navbar's look is a pure function of the current scroll offset:
//! past [`SCROLL_THRESHOLD_PX`] it compacts (darker background, tighter
//! padding), at or below it it expands back. The mapping is re-evaluated
//! on every scroll event with no hysteresis, so flipping rapidly near the
//! threshold restyles just as rapidly.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Scroll offset (CSS pixels) past which the navbar compacts.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Derived presentation of the navbar, never stored between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    /// At or near the top of the page.
    Expanded,
    /// Scrolled past the threshold.
    Compact,
}

impl NavbarState {
    /// Classifies a vertical scroll offset.
    pub fn at_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX {
            NavbarState::Compact
        } else {
            NavbarState::Expanded
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarState::Expanded => "rgba(13, 17, 28, 0.85)",
            NavbarState::Compact => "rgba(13, 17, 28, 0.98)",
        }
    }

    pub fn padding(self) -> &'static str {
        match self {
            NavbarState::Expanded => "1.2rem 2rem",
            NavbarState::Compact => "0.6rem 2rem",
        }
    }
}

fn apply(navbar: &HtmlElement, state: NavbarState) {
    let style = navbar.style();
    let _ = style.set_property("background", state.background());
    let _ = style.set_property("padding", state.padding());
}

/// Resolves the navbar once and restyles it on every scroll event.
/// Without a `.navbar` element no listener is registered at all.
pub fn bind(window: &Window, document: &Document) {
    let Some(navbar) = document.query_selector(".navbar").ok().flatten() else {
        return;
    };
    let Ok(navbar) = navbar.dyn_into::<HtmlElement>() else {
        return;
    };

    let window_handle = window.clone();
    let scroll_callback = Closure::wrap(Box::new(move || {
        let offset = window_handle.scroll_y().unwrap_or(0.0);
        apply(&navbar, NavbarState::at_offset(offset));
    }) as Box<dyn FnMut()>);

    if window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        .is_ok()
    {
        // Page-lifetime listener, never removed.
        scroll_callback.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_only_past_threshold() {
        assert_eq!(NavbarState::at_offset(0.0), NavbarState::Expanded);
        assert_eq!(NavbarState::at_offset(50.0), NavbarState::Expanded);
        assert_eq!(NavbarState::at_offset(50.1), NavbarState::Compact);
        assert_eq!(NavbarState::at_offset(5000.0), NavbarState::Compact);
    }

    #[test]
    fn classification_is_idempotent() {
        for offset in [0.0, 49.9, 50.0, 50.1, 600.0] {
            let first = NavbarState::at_offset(offset);
            let second = NavbarState::at_offset(offset);
            assert_eq!(first, second);
            assert_eq!(first.background(), second.background());
            assert_eq!(first.padding(), second.padding());
        }
    }

    #[test]
    fn variants_render_distinct_styles() {
        assert_ne!(
            NavbarState::Expanded.background(),
            NavbarState::Compact.background()
        );
        assert_ne!(
            NavbarState::Expanded.padding(),
            NavbarState::Compact.padding()
        );
    }
}
