use yew::prelude::*;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlAudioElement, MouseEvent};

use crate::audio::player::{self, toggle_action, PlaybackError, ToggleAction};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct MusicToggleProps {
    pub audio_ref: NodeRef,
    pub playing: bool,
    pub on_change: Callback<bool>,
}

/// Manual pause/play, independent of the first-gesture unlock.
#[function_component(MusicToggle)]
pub fn music_toggle(props: &MusicToggleProps) -> Html {
    let onclick = {
        let audio_ref = props.audio_ref.clone();
        let on_change = props.on_change.clone();
        let playing = props.playing;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                error!("Toggle failed: {}", PlaybackError::Unmounted);
                return;
            };
            match toggle_action(playing, config::MANUAL_VOLUME) {
                ToggleAction::Pause => {
                    player::pause(&audio);
                    on_change.emit(false);
                }
                ToggleAction::Play { volume } => {
                    audio.set_volume(volume);
                    let on_change = on_change.clone();
                    spawn_local(async move {
                        match player::play(&audio).await {
                            Ok(()) => {
                                audio.set_volume(volume);
                                on_change.emit(true);
                            }
                            Err(err) => error!("Toggle failed: {}", err),
                        }
                    });
                }
            }
        })
    };

    html! {
        <button
            class="music-toggle"
            onclick={onclick}
            aria-label={if props.playing { "Pause music" } else { "Play music" }}
        >
            { if props.playing { "♪" } else { "×" } }
        </button>
    }
}
