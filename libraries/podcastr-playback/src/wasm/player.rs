//! WASM-compatible player

use super::media::HtmlAudioMedia;
use crate::{
    ControlsConfig, MediaEvent, PlayerContext, PlayerControls, PlayerError, PlayerView,
    TransportAction,
};
use js_sys::Function;
use podcastr_core::Episode;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAudioElement};

type Controls = Rc<RefCell<PlayerControls<HtmlAudioMedia>>>;
type ChangeCallback = Rc<RefCell<Option<Function>>>;

const AUDIO_EVENTS: [&str; 5] = ["loadedmetadata", "timeupdate", "play", "pause", "ended"];

/// Browser player bound to one `<audio>` element
///
/// Wraps [`PlayerControls`] with a JavaScript-friendly API. The `onChange`
/// callback receives the current view after every action and every audio
/// event.
#[wasm_bindgen]
pub struct WasmPlayer {
    controls: Controls,
    audio: HtmlAudioElement,
    on_change: ChangeCallback,

    // Kept alive for as long as the listeners are registered
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

#[wasm_bindgen]
impl WasmPlayer {
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlAudioElement) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let controls = Rc::new(RefCell::new(PlayerControls::new(
            PlayerContext::default(),
            HtmlAudioMedia::new(audio.clone()),
            ControlsConfig::default(),
        )));
        let on_change: ChangeCallback = Rc::new(RefCell::new(None));

        let mut listeners = Vec::with_capacity(AUDIO_EVENTS.len());
        for name in AUDIO_EVENTS {
            let controls = Rc::clone(&controls);
            let on_change = Rc::clone(&on_change);
            let element = audio.clone();

            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let Some(event) = media_event(name, &element) else {
                    return;
                };
                // Browser events never fire while a call into the player is running
                let view = match controls.try_borrow_mut() {
                    Ok(mut controls) => {
                        controls.handle_media_event(event);
                        controls.view()
                    }
                    Err(_) => return,
                };
                emit_change(&on_change, &view);
            }) as Box<dyn FnMut(Event)>);

            audio.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            listeners.push((name, closure));
        }

        Ok(Self {
            controls,
            audio,
            on_change,
            listeners,
        })
    }

    // ===== Player Actions =====

    /// Play a single episode, replacing the playlist
    pub fn play(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episode: {}", e)))?;

        self.act(|controls| controls.context().play(episode));
        Ok(())
    }

    /// Play a list of episodes, starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let list: Vec<Episode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        self.act(|controls| controls.context().play_list(list, index))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.act(|controls| controls.context().toggle_play());
    }

    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, is_playing: bool) {
        self.act(|controls| controls.context().set_playing_state(is_playing));
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.act(|controls| controls.context().play_next());
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.act(|controls| controls.context().play_previous());
    }

    #[wasm_bindgen(js_name = toggleLooping)]
    pub fn toggle_looping(&mut self) {
        self.act(|controls| controls.context().toggle_looping());
    }

    #[wasm_bindgen(js_name = toggleShuffling)]
    pub fn toggle_shuffling(&mut self) {
        self.act(|controls| controls.context().toggle_shuffling());
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.act(|controls| controls.context().clear_player_state());
    }

    // ===== Control Surface =====

    /// Seek to a position in whole seconds
    pub fn seek(&mut self, amount: f64) {
        let amount = amount.max(0.0).floor() as u64;
        self.act(|controls| controls.seek(amount));
    }

    /// Press a transport button by name
    /// ("shuffle" | "previous" | "playPause" | "next" | "loop")
    pub fn press(&mut self, action: &str) -> Result<bool, JsValue> {
        let action = TransportAction::parse(action)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown control: {}", action)))?;

        Ok(self.act(|controls| controls.press(action)))
    }

    // ===== State Queries =====

    /// Current view as a plain object
    pub fn view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.controls.borrow().view()).unwrap_or(JsValue::NULL)
    }

    /// Current state (playlist, index, flags) as a plain object
    pub fn snapshot(&self) -> JsValue {
        let snapshot = self.controls.borrow().context().snapshot();
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    pub fn progress(&self) -> f64 {
        self.controls.borrow().progress() as f64
    }

    // ===== Event Listeners =====

    /// Register the change callback, called with the current view
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

impl WasmPlayer {
    // The borrow is released before the callback runs, so it may call back in
    fn act<R>(&mut self, action: impl FnOnce(&mut PlayerControls<HtmlAudioMedia>) -> R) -> R {
        let (result, view) = {
            let mut controls = self.controls.borrow_mut();
            let result = action(&mut *controls);
            (result, controls.view())
        };
        emit_change(&self.on_change, &view);
        result
    }
}

impl Drop for WasmPlayer {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            self.audio
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn media_event(name: &str, audio: &HtmlAudioElement) -> Option<MediaEvent> {
    match name {
        "loadedmetadata" => Some(MediaEvent::LoadedMetadata {
            duration: audio.duration(),
        }),
        "timeupdate" => Some(MediaEvent::TimeUpdate {
            position: audio.current_time(),
        }),
        "play" => Some(MediaEvent::Play),
        "pause" => Some(MediaEvent::Pause),
        "ended" => Some(MediaEvent::Ended),
        _ => None,
    }
}

fn emit_change(on_change: &ChangeCallback, view: &PlayerView) {
    let callback = on_change.borrow().clone();
    if let Some(cb) = callback {
        if let Ok(view) = serde_wasm_bindgen::to_value(view) {
            cb.call1(&JsValue::NULL, &view).ok();
        }
    }
}

fn to_js_error(error: PlayerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
