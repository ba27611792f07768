use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fire-and-forget playback of the page's love-song element. Autoplay
/// rejection (or a missing element) is logged and swallowed; it must never
/// block the accept-path transition.
pub fn request_playback(document: &web::Document) {
    let Some(el) = document.get_element_by_id("love-audio") else {
        log::warn!("no #love-audio element; skipping playback");
        return;
    };
    let audio: web::HtmlAudioElement = match el.dyn_into() {
        Ok(a) => a,
        Err(_) => {
            log::warn!("#love-audio is not an audio element; skipping playback");
            return;
        }
    };
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("audio playback blocked: {:?}", e);
            }
        }),
        Err(e) => log::warn!("audio play() failed: {:?}", e),
    }
}
