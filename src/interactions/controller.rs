//! Page controller: wires every interaction exactly once.
//!
//! The landing page calls [`init`] from its mount effect, after the
//! document's structure exists but without waiting for images or styles.
//! Each behavior resolves its own elements and silently skips itself when
//! they are absent, so `init` never panics on a stripped-down page variant.

use std::cell::Cell;

use log::debug;

use crate::interactions::{anchors, cards, reveal, scroll};

thread_local! {
    static INITIALIZED: Cell<bool> = Cell::new(false);
}

/// Registers all page interactions. Listeners live for the page's
/// lifetime; there is no teardown. Calling this more than once is a no-op
/// so the bindings can never be registered twice.
pub fn init() {
    if INITIALIZED.with(|flag| flag.replace(true)) {
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    debug!("Wiring page interactions");
    scroll::bind(&window, &document);
    reveal::bind(&document);
    anchors::bind(&document);
    cards::bind(&document);
}
