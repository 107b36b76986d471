use fnv::FnvHashMap;
use room_core::SoundCue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One-shot cues backed by the page's `<audio>` elements.
pub struct CuePlayer {
    document: web::Document,
    elements: FnvHashMap<SoundCue, web::HtmlAudioElement>,
    audio_ctx: Option<web::AudioContext>,
}

impl CuePlayer {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            elements: FnvHashMap::default(),
            audio_ctx: None,
        }
    }

    fn element(&mut self, cue: SoundCue) -> Option<web::HtmlAudioElement> {
        if let Some(el) = self.elements.get(&cue) {
            return Some(el.clone());
        }
        let el = self
            .document
            .get_element_by_id(cue.element_id())
            .and_then(|e| e.dyn_into::<web::HtmlAudioElement>().ok());
        match el {
            Some(el) => {
                self.elements.insert(cue, el.clone());
                Some(el)
            }
            None => {
                log::error!("[audio] missing <audio id=\"{}\">", cue.element_id());
                None
            }
        }
    }

    /// Rewinds and plays the cue. A rejected `play()` is logged and dropped.
    pub fn play(&mut self, cue: SoundCue, volume: f32) {
        let Some(el) = self.element(cue) else {
            return;
        };
        _ = el.pause();
        el.set_current_time(0.0);
        el.set_volume(volume.clamp(0.0, 1.0) as f64);
        match el.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] {} play rejected: {:?}", cue.element_id(), e);
                }
            }),
            Err(e) => log::warn!("[audio] {} play error: {:?}", cue.element_id(), e),
        }
    }

    /// Resumes (creating on first use) the shared audio context. Browsers only
    /// allow this from a user gesture.
    pub fn unlock(&mut self) {
        if self.audio_ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.audio_ctx = Some(ctx),
                Err(e) => {
                    log::error!("[audio] AudioContext error: {:?}", e);
                    return;
                }
            }
        }
        if let Some(ctx) = &self.audio_ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
            log::info!("[audio] unlocked");
        }
    }
}
