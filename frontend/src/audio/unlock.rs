use crate::audio::player::PlaybackError;

/// DOM events that count as a user gesture for autoplay purposes.
pub const UNLOCK_EVENTS: [&str; 5] = ["click", "touchstart", "mousedown", "keydown", "scroll"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    TouchStart,
    MouseDown,
    KeyDown,
    Scroll,
}

impl Gesture {
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "click" => Some(Gesture::Click),
            "touchstart" => Some(Gesture::TouchStart),
            "mousedown" => Some(Gesture::MouseDown),
            "keydown" => Some(Gesture::KeyDown),
            "scroll" => Some(Gesture::Scroll),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AudioUnlockState {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UnlockEvent {
    Gesture(Gesture),
    PlayResolved(Result<(), PlaybackError>),
    Unmount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockCommand {
    StartPlayback,
    /// Playback began: apply the unlock volume and drop every gesture listener.
    FinishUnlock,
    DetachListeners,
    /// Playback began after the page went away; silence it, listeners are already gone.
    StopPlayback,
}

/// Locked/Unlocked plus bookkeeping for the in-flight attempt and listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockMachine {
    pub state: AudioUnlockState,
    pub attempt_in_flight: bool,
    pub listening: bool,
}

impl Default for UnlockMachine {
    fn default() -> Self {
        Self {
            state: AudioUnlockState::Locked,
            attempt_in_flight: false,
            listening: true,
        }
    }
}

/// Pure transition: returns the next machine and what the caller must do.
pub fn transition(machine: &UnlockMachine, event: UnlockEvent) -> (UnlockMachine, Option<UnlockCommand>) {
    let mut next = machine.clone();
    let command = match (machine.state, event) {
        (AudioUnlockState::Locked, UnlockEvent::Gesture(_)) if !machine.attempt_in_flight => {
            next.attempt_in_flight = true;
            Some(UnlockCommand::StartPlayback)
        }
        (AudioUnlockState::Locked, UnlockEvent::PlayResolved(Ok(()))) if machine.attempt_in_flight && !machine.listening => {
            next.state = AudioUnlockState::Unlocked;
            next.attempt_in_flight = false;
            Some(UnlockCommand::StopPlayback)
        }
        (AudioUnlockState::Locked, UnlockEvent::PlayResolved(Ok(()))) if machine.attempt_in_flight => {
            next.state = AudioUnlockState::Unlocked;
            next.attempt_in_flight = false;
            next.listening = false;
            Some(UnlockCommand::FinishUnlock)
        }
        (AudioUnlockState::Locked, UnlockEvent::PlayResolved(Err(_))) => {
            // Stay subscribed so the next gesture retries.
            next.attempt_in_flight = false;
            None
        }
        (_, UnlockEvent::Unmount) if machine.listening => {
            next.listening = false;
            Some(UnlockCommand::DetachListeners)
        }
        _ => None,
    };
    (next, command)
}

impl UnlockMachine {
    pub fn apply(&mut self, event: UnlockEvent) -> Option<UnlockCommand> {
        let (next, command) = transition(self, event);
        *self = next;
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> UnlockEvent {
        UnlockEvent::PlayResolved(Err(PlaybackError::Rejected("NotAllowedError".into())))
    }

    #[test]
    fn every_listed_event_qualifies() {
        for name in UNLOCK_EVENTS {
            assert!(Gesture::from_event_type(name).is_some(), "{name}");
        }
        assert_eq!(Gesture::from_event_type("mousemove"), None);
    }

    #[test]
    fn only_one_attempt_in_flight() {
        let mut machine = UnlockMachine::default();
        assert_eq!(machine.apply(UnlockEvent::Gesture(Gesture::Scroll)), Some(UnlockCommand::StartPlayback));
        assert_eq!(machine.apply(UnlockEvent::Gesture(Gesture::Click)), None);
        assert_eq!(machine.apply(UnlockEvent::Gesture(Gesture::KeyDown)), None);
        assert!(machine.attempt_in_flight);
    }

    #[test]
    fn rejection_keeps_listening_and_allows_retry() {
        let mut machine = UnlockMachine::default();
        machine.apply(UnlockEvent::Gesture(Gesture::Scroll));
        assert_eq!(machine.apply(rejected()), None);
        assert_eq!(machine.state, AudioUnlockState::Locked);
        assert!(machine.listening);
        assert!(!machine.attempt_in_flight);
        assert_eq!(machine.apply(UnlockEvent::Gesture(Gesture::Click)), Some(UnlockCommand::StartPlayback));
    }

    #[test]
    fn gestures_before_success_unlock_and_detach_exactly_once() {
        let mut machine = UnlockMachine::default();
        let mut unlocks = 0;
        let mut detaches = 0;
        let events = vec![
            UnlockEvent::Gesture(Gesture::Scroll),
            rejected(),
            UnlockEvent::Gesture(Gesture::TouchStart),
            UnlockEvent::Gesture(Gesture::Click),
            UnlockEvent::PlayResolved(Ok(())),
            UnlockEvent::Gesture(Gesture::KeyDown),
            UnlockEvent::PlayResolved(Ok(())),
            UnlockEvent::Gesture(Gesture::MouseDown),
            UnlockEvent::Unmount,
        ];
        for event in events {
            match machine.apply(event) {
                Some(UnlockCommand::FinishUnlock) => {
                    unlocks += 1;
                    detaches += 1;
                }
                Some(UnlockCommand::DetachListeners) => detaches += 1,
                _ => {}
            }
        }
        assert_eq!(unlocks, 1);
        assert_eq!(detaches, 1);
        assert_eq!(machine.state, AudioUnlockState::Unlocked);
        assert!(!machine.listening);
    }

    #[test]
    fn success_after_unmount_stops_without_second_detach() {
        let mut machine = UnlockMachine::default();
        let commands: Vec<_> = [
            UnlockEvent::Gesture(Gesture::Click),
            UnlockEvent::Unmount,
            UnlockEvent::PlayResolved(Ok(())),
        ]
        .into_iter()
        .map(|event| machine.apply(event))
        .collect();

        assert_eq!(
            commands,
            vec![
                Some(UnlockCommand::StartPlayback),
                Some(UnlockCommand::DetachListeners),
                Some(UnlockCommand::StopPlayback),
            ]
        );
        let detaches = commands
            .iter()
            .filter(|c| matches!(c, Some(UnlockCommand::DetachListeners | UnlockCommand::FinishUnlock)))
            .count();
        assert_eq!(detaches, 1);
        assert!(!machine.listening);
        assert!(!machine.attempt_in_flight);
    }

    #[test]
    fn unmount_while_locked_detaches_once() {
        let mut machine = UnlockMachine::default();
        assert_eq!(machine.apply(UnlockEvent::Unmount), Some(UnlockCommand::DetachListeners));
        assert_eq!(machine.apply(UnlockEvent::Unmount), None);
    }

    #[test]
    fn stray_success_without_attempt_is_ignored() {
        let machine = UnlockMachine::default();
        let (next, command) = transition(&machine, UnlockEvent::PlayResolved(Ok(())));
        assert_eq!(command, None);
        assert_eq!(next, machine);
    }
}
