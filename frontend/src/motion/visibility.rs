use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::debug;

// Observers report crossings a hair below the configured threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// When an intersection entry counts as "seen".
#[derive(Clone, Debug, PartialEq)]
pub enum Crossing {
    /// Intersection ratio at or above the value.
    AtLeast(f64),
    /// Intersection ratio strictly above the value.
    Above(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealTrigger {
    pub thresholds: Vec<f64>,
    pub root_margin: Option<&'static str>,
    pub crossing: Crossing,
}

impl RevealTrigger {
    pub fn at(threshold: f64) -> Self {
        Self {
            thresholds: vec![threshold],
            root_margin: None,
            crossing: Crossing::AtLeast(threshold),
        }
    }

    /// Fires only once the ratio passes `ratio`, observing both the first
    /// pixel and the crossing itself.
    pub fn above(ratio: f64) -> Self {
        Self {
            thresholds: vec![0.0, ratio],
            root_margin: None,
            crossing: Crossing::Above(ratio),
        }
    }

    pub fn with_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }

    pub fn admits(&self, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.crossing {
            Crossing::AtLeast(min) => ratio + RATIO_TOLERANCE >= min,
            Crossing::Above(min) => ratio > min,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchOutcome {
    Pending,
    Latched,
    AlreadyRevealed,
}

/// One-way reveal flag for a single element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn observe(&mut self, trigger: &RevealTrigger, is_intersecting: bool, ratio: f64) -> LatchOutcome {
        if self.revealed {
            return LatchOutcome::AlreadyRevealed;
        }
        if trigger.admits(is_intersecting, ratio) {
            self.revealed = true;
            LatchOutcome::Latched
        } else {
            LatchOutcome::Pending
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    element: &Element,
    trigger: RevealTrigger,
    on_reveal: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut latch = RevealLatch::default();
    let callback_trigger = trigger.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        if latch.is_revealed() {
            return;
        }
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let outcome = latch.observe(&callback_trigger, entry.is_intersecting(), entry.intersection_ratio());
            if outcome == LatchOutcome::Latched {
                // Nothing left to watch for once latched.
                observer.disconnect();
                on_reveal();
                return;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    let thresholds: Array = trigger.thresholds.iter().map(|t| wasm_bindgen::JsValue::from_f64(*t)).collect();
    options.set_threshold(&thresholds);
    if let Some(margin) = trigger.root_margin {
        options.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// Latches true the first time `node` satisfies `trigger`.
///
/// If the node never mounts the flag simply stays false.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = node.cast::<Element>().and_then(|element| {
                    observe(&element, trigger, move || revealed.set(true))
                });
                if observation.is_none() {
                    debug!("reveal target not mounted, skipping observer");
                }
                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_never_reverts() {
        let trigger = RevealTrigger::at(0.15);
        let mut latch = RevealLatch::default();

        assert_eq!(latch.observe(&trigger, true, 0.05), LatchOutcome::Pending);
        assert!(!latch.is_revealed());
        assert_eq!(latch.observe(&trigger, true, 0.2), LatchOutcome::Latched);

        for (intersecting, ratio) in [(false, 0.0), (true, 0.0), (false, 1.0), (true, 0.01)] {
            assert_eq!(latch.observe(&trigger, intersecting, ratio), LatchOutcome::AlreadyRevealed);
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn threshold_is_inclusive_with_tolerance() {
        let trigger = RevealTrigger::at(0.3);
        assert!(trigger.admits(true, 0.3));
        assert!(trigger.admits(true, 0.2995));
        assert!(!trigger.admits(true, 0.25));
        assert!(!trigger.admits(false, 0.9));
    }

    #[test]
    fn blur_trigger_needs_strictly_more_than_ratio() {
        let trigger = RevealTrigger::above(0.4);
        assert_eq!(trigger.thresholds, vec![0.0, 0.4]);
        assert!(!trigger.admits(true, 0.0));
        assert!(!trigger.admits(true, 0.4));
        assert!(trigger.admits(true, 0.41));
    }

    #[test]
    fn margin_is_carried() {
        let trigger = RevealTrigger::at(0.15).with_margin("0px 0px -40px 0px");
        assert_eq!(trigger.root_margin, Some("0px 0px -40px 0px"));
        assert_eq!(trigger.thresholds, vec![0.15]);
    }
}
