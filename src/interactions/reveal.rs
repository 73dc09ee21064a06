//! One-shot staggered reveal of the growth chart bars.
//!
//! An IntersectionObserver watches the chart container; the first time at
//! least half of it is visible, every bar gets an animation delay
//! proportional to its document-order index and its paused animation is
//! released. The reveal is terminal: scrolling the chart out of view and
//! back never restarts it. Deduplication lives in [`RevealSequence`]
//! rather than in the observer, since re-notification behavior differs
//! across platforms.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Visible fraction of the container that triggers the reveal.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

const STAGGER_STEP_SECS: f64 = 0.1;

/// Animation start delay, in seconds, for the bar at `index`.
/// Strictly increasing in `index`, giving a deterministic
/// left-to-right reveal order.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

/// `Unrevealed -> Revealed` state machine for one chart container.
/// The transition fires at most once for the page's lifetime.
#[derive(Debug, Default)]
pub struct RevealSequence {
    revealed: bool,
}

impl RevealSequence {
    /// Feeds one visibility notification. Returns the per-bar delay
    /// schedule exactly once, the first time `ratio` reaches the
    /// threshold; every later notification returns `None`.
    pub fn on_visibility(&mut self, ratio: f64, bar_count: usize) -> Option<Vec<f64>> {
        if self.revealed || ratio < VISIBILITY_THRESHOLD {
            return None;
        }
        self.revealed = true;
        Some((0..bar_count).map(stagger_delay).collect())
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

/// Observes the `.growth-chart` container, if the page has one.
pub fn bind(document: &Document) {
    let Some(chart) = document.query_selector(".growth-chart").ok().flatten() else {
        return;
    };

    let sequence = Rc::new(RefCell::new(RevealSequence::default()));
    let callback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Ok(bars) = entry.target().query_selector_all(".bar") else {
                    continue;
                };
                let schedule = sequence
                    .borrow_mut()
                    .on_visibility(entry.intersection_ratio(), bars.length() as usize);
                let Some(schedule) = schedule else {
                    continue;
                };
                for (index, delay) in schedule.iter().enumerate() {
                    let Some(bar) = bars.item(index as u32) else {
                        continue;
                    };
                    let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    let style = bar.style();
                    let _ = style.set_property("animation-delay", &format!("{delay:.1}s"));
                    let _ = style.set_property("animation-play-state", "running");
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    observer.observe(&chart);

    // The browser keeps the active observer alive; the closure must
    // outlive this scope too.
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_increase_with_index() {
        let mut sequence = RevealSequence::default();
        let schedule = sequence.on_visibility(0.6, 3).unwrap();
        assert_eq!(schedule, vec![0.0, 0.1, 0.2]);
        for pair in schedule.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn reveal_fires_at_most_once() {
        let mut sequence = RevealSequence::default();
        assert!(sequence.on_visibility(0.6, 3).is_some());
        // Scrolled away and back to 60% visible: no re-trigger.
        assert!(sequence.on_visibility(0.0, 3).is_none());
        assert!(sequence.on_visibility(0.6, 3).is_none());
        assert!(sequence.revealed());
    }

    #[test]
    fn below_threshold_does_not_consume_the_shot() {
        let mut sequence = RevealSequence::default();
        assert!(sequence.on_visibility(0.49, 3).is_none());
        assert!(!sequence.revealed());
        assert!(sequence.on_visibility(0.5, 3).is_some());
    }

    #[test]
    fn empty_container_reveals_nothing() {
        let mut sequence = RevealSequence::default();
        let schedule = sequence.on_visibility(1.0, 0).unwrap();
        assert!(schedule.is_empty());
        assert!(sequence.revealed());
    }
}
