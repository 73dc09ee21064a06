//! Hover hook for the feature cards.
//!
//! Extension seam for future micro-interactions. The handler is bound to
//! every `.feature-card` at setup but currently does nothing: no DOM
//! mutation, no panic. Behavior can be added here without touching the
//! binding mechanism.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

pub fn bind(document: &Document) {
    let Ok(cards) = document.query_selector_all(".feature-card") else {
        return;
    };

    for index in 0..cards.length() {
        let Some(card) = cards.item(index) else {
            continue;
        };
        let Ok(card) = card.dyn_into::<Element>() else {
            continue;
        };

        let hover_callback = Closure::wrap(Box::new(move |_event: MouseEvent| {
            // Intentionally inert.
        }) as Box<dyn FnMut(MouseEvent)>);

        if card
            .add_event_listener_with_callback("mouseenter", hover_callback.as_ref().unchecked_ref())
            .is_ok()
        {
            hover_callback.forget();
        }
    }
}
