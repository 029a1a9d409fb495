use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Function;
use web_sys::{Event, HtmlAudioElement, Window};

use crate::audio::player::{self, PlaybackError};
use crate::audio::unlock::{Gesture, UnlockCommand, UnlockEvent, UnlockMachine, UNLOCK_EVENTS};
use crate::config;

fn set_gesture_listeners(window: &Window, listener: &Function, attach: bool) {
    for name in UNLOCK_EVENTS {
        let result = if attach {
            window.add_event_listener_with_callback(name, listener)
        } else {
            window.remove_event_listener_with_callback(name, listener)
        };
        if let Err(err) = result {
            warn!("Could not update {} listener: {:?}", name, err);
        }
    }
}

/// Starts the background track on the first qualifying gesture.
///
/// Never plays on mount: browsers reject that with NotAllowedError. Each
/// gesture while locked tries once; a rejection leaves the listeners in
/// place for the next gesture, a success removes all of them.
#[hook]
pub fn use_audio_unlock(audio_ref: NodeRef, on_unlock: Callback<()>) {
    use_effect_with_deps(
        move |audio_ref: &NodeRef| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                player::prepare(&audio, config::UNLOCK_VOLUME);
            }

            let machine = Rc::new(RefCell::new(UnlockMachine::default()));
            let listener_fn: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

            let listener = {
                let machine = machine.clone();
                let listener_fn = listener_fn.clone();
                let audio_ref = audio_ref.clone();
                Closure::wrap(Box::new(move |event: Event| {
                    let Some(gesture) = Gesture::from_event_type(&event.type_()) else {
                        return;
                    };
                    if machine.borrow_mut().apply(UnlockEvent::Gesture(gesture)) != Some(UnlockCommand::StartPlayback) {
                        return;
                    }

                    let machine = machine.clone();
                    let listener_fn = listener_fn.clone();
                    let on_unlock = on_unlock.clone();
                    let audio = audio_ref.cast::<HtmlAudioElement>();
                    spawn_local(async move {
                        let outcome = match &audio {
                            Some(audio) => player::play(audio).await,
                            None => Err(PlaybackError::Unmounted),
                        };
                        if let Err(err) = &outcome {
                            info!("Audio unlock failed, waiting for next interaction: {}", err);
                        }

                        let command = machine.borrow_mut().apply(UnlockEvent::PlayResolved(outcome));
                        match command {
                            Some(UnlockCommand::FinishUnlock) => {
                                // Mobile browsers reset volume when playback starts.
                                if let Some(audio) = &audio {
                                    audio.set_volume(config::UNLOCK_VOLUME);
                                }
                                if let (Some(window), Some(function)) = (web_sys::window(), listener_fn.borrow().as_ref()) {
                                    set_gesture_listeners(&window, function, false);
                                }
                                debug!("Audio unlocked by {:?}", gesture);
                                on_unlock.emit(());
                            }
                            Some(UnlockCommand::StopPlayback) => {
                                if let Some(audio) = &audio {
                                    player::pause(audio);
                                }
                                debug!("Playback started after unmount, stopped");
                            }
                            _ => {}
                        }
                    });
                }) as Box<dyn FnMut(Event)>)
            };

            let function: Function = listener.as_ref().unchecked_ref::<Function>().clone();
            *listener_fn.borrow_mut() = Some(function.clone());

            let window = web_sys::window();
            if let Some(window) = &window {
                set_gesture_listeners(window, &function, true);
            }

            move || {
                let command = machine.borrow_mut().apply(UnlockEvent::Unmount);
                if command == Some(UnlockCommand::DetachListeners) {
                    if let Some(window) = &window {
                        set_gesture_listeners(window, &function, false);
                    }
                }
                drop(listener);
            }
        },
        audio_ref,
    );
}
