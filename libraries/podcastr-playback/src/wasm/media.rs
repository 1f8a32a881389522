//! `MediaElement` over a browser `<audio>` element

use crate::{MediaElement, PlayerError, Result};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

pub struct HtmlAudioMedia {
    element: HtmlAudioElement,
}

impl HtmlAudioMedia {
    pub fn new(element: HtmlAudioElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl MediaElement for HtmlAudioMedia {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn clear_source(&mut self) {
        self.element.pause().ok();
        self.element.remove_attribute("src").ok();
        self.element.load();
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlayerError::Media(describe(&e)))?;

        // Autoplay policy rejections arrive asynchronously; the element's
        // pause event reconciles the state in that case.
        let ignore = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
        let _ = promise.catch(&ignore);
        ignore.forget();
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            web_sys::console::warn_1(&e);
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn is_looping(&self) -> bool {
        self.element.loop_()
    }

    fn set_looping(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.element.set_autoplay(autoplay);
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
