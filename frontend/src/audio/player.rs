use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("audio element is not mounted")]
    Unmounted,
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Starts playback and resolves once the browser accepts or refuses it.
pub async fn play(audio: &HtmlAudioElement) -> Result<(), PlaybackError> {
    let promise = audio
        .play()
        .map_err(|err| PlaybackError::Rejected(format!("{:?}", err)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| PlaybackError::Rejected(format!("{:?}", err)))
}

pub fn pause(audio: &HtmlAudioElement) {
    if let Err(err) = audio.pause() {
        log::warn!("Pausing audio failed: {:?}", err);
    }
}

/// One-time element setup; nothing is fetched until the first play.
pub fn prepare(audio: &HtmlAudioElement, volume: f64) {
    audio.set_volume(volume);
    audio.set_preload("none");
    audio.set_loop(true);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleAction {
    Pause,
    Play { volume: f64 },
}

/// What the manual music button does given the current playing flag.
pub fn toggle_action(is_playing: bool, volume: f64) -> ToggleAction {
    if is_playing {
        ToggleAction::Pause
    } else {
        ToggleAction::Play { volume }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn toggle_pauses_when_playing() {
        assert_eq!(toggle_action(true, config::MANUAL_VOLUME), ToggleAction::Pause);
    }

    #[test]
    fn toggle_plays_quietly_when_stopped() {
        assert_eq!(
            toggle_action(false, config::MANUAL_VOLUME),
            ToggleAction::Play { volume: 0.03 }
        );
    }

    #[test]
    fn errors_render_for_logs() {
        assert_eq!(PlaybackError::Unmounted.to_string(), "audio element is not mounted");
        assert_eq!(
            PlaybackError::Rejected("NotAllowedError".into()).to_string(),
            "playback rejected: NotAllowedError"
        );
    }
}
