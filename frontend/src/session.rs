use std::rc::Rc;

use yew::prelude::*;
use log::{info, warn};

/// Page-wide state for one visit. Created when the journey mounts and
/// dropped with it; the scroll lock is released on unmount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub celebrated: bool,
    pub scroll_locked: bool,
    pub expanded_artifact: bool,
    pub audio_unlocked: bool,
    pub audio_playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Celebrate,
    ToggleArtifact,
    AudioUnlocked,
    PlaybackChanged(bool),
}

impl SessionState {
    /// Next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: SessionAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            SessionAction::Celebrate => {
                if self.celebrated {
                    return None;
                }
                next.celebrated = true;
                next.scroll_locked = true;
            }
            SessionAction::ToggleArtifact => {
                next.expanded_artifact = !self.expanded_artifact;
            }
            SessionAction::AudioUnlocked => {
                if self.audio_unlocked {
                    return None;
                }
                next.audio_unlocked = true;
                next.audio_playing = true;
            }
            SessionAction::PlaybackChanged(playing) => {
                if self.audio_playing == playing {
                    return None;
                }
                next.audio_playing = playing;
            }
        }
        Some(next)
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(err) = result {
        warn!("Could not update page scroll lock: {:?}", err);
    }
}

/// Applies `overflow: hidden` to the body while `locked` holds, and lifts
/// it again when the page goes away.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked: &bool| {
            let locked = *locked;
            if locked {
                info!("Locking page scroll");
                set_body_overflow(Some("hidden"));
            }
            move || {
                if locked {
                    set_body_overflow(None);
                }
            }
        },
        locked,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebrating_locks_scroll_once() {
        let fresh = Rc::new(SessionState::default());
        let celebrated = fresh.clone().reduce(SessionAction::Celebrate);
        assert!(celebrated.celebrated);
        assert!(celebrated.scroll_locked);
        assert!(!Rc::ptr_eq(&fresh, &celebrated));

        // Second trigger is a no-op: same state, nothing re-rendered or re-applied
        let again = celebrated.clone().reduce(SessionAction::Celebrate);
        assert!(Rc::ptr_eq(&celebrated, &again));
        assert_eq!(celebrated.apply(SessionAction::Celebrate), None);
    }

    #[test]
    fn artifact_toggles_freely() {
        let state = SessionState::default();
        let expanded = state.apply(SessionAction::ToggleArtifact).unwrap();
        assert!(expanded.expanded_artifact);
        let compact = expanded.apply(SessionAction::ToggleArtifact).unwrap();
        assert!(!compact.expanded_artifact);
    }

    #[test]
    fn celebration_survives_later_actions() {
        let mut state = SessionState::default().apply(SessionAction::Celebrate).unwrap();
        for action in [SessionAction::ToggleArtifact, SessionAction::PlaybackChanged(true), SessionAction::AudioUnlocked] {
            if let Some(next) = state.apply(action) {
                state = next;
            }
            assert!(state.celebrated);
            assert!(state.scroll_locked);
        }
    }

    #[test]
    fn audio_unlock_is_recorded_once() {
        let unlocked = SessionState::default().apply(SessionAction::AudioUnlocked).unwrap();
        assert!(unlocked.audio_unlocked && unlocked.audio_playing);
        assert_eq!(unlocked.apply(SessionAction::AudioUnlocked), None);

        let paused = unlocked.apply(SessionAction::PlaybackChanged(false)).unwrap();
        assert!(paused.audio_unlocked);
        assert!(!paused.audio_playing);
        assert_eq!(paused.apply(SessionAction::PlaybackChanged(false)), None);
    }
}
