use rand::thread_rng;
use web_sys as web;

use crate::core::anim::{
    GlyphParams, AMBIENT_PERIOD_MS, BURST_COUNT, BURST_STAGGER_MS, CELEBRATION_DURATION_MS,
    CELEBRATION_PERIOD_MS,
};
use crate::dom;

// Fall trajectory keyed by the element's declared duration/delay and the
// per-element --drift custom property.
const FALLING_HEART_CSS: &str = "\
.falling-heart {\n\
    position: fixed;\n\
    top: -50px;\n\
    z-index: 9999;\n\
    pointer-events: none;\n\
    animation: fall linear forwards;\n\
    filter: drop-shadow(0 0 5px rgba(255, 105, 180, 0.5));\n\
}\n\
@keyframes fall {\n\
    0% { top: -10%; opacity: 0; transform: translateX(0) rotate(0deg) scale(0); }\n\
    10% { opacity: 1; transform: translateX(0) rotate(45deg) scale(1); }\n\
    50% { transform: translateX(var(--drift)) rotate(180deg) scale(1); }\n\
    100% { top: 110%; opacity: 0; transform: translateX(calc(var(--drift) * 1.5)) rotate(360deg) scale(0.5); }\n\
}\n";

pub fn inject_fall_css(document: &web::Document) {
    dom::inject_style(document, FALLING_HEART_CSS);
}

/// Create one short-lived glyph element and schedule its own removal after
/// the fall animation finishes.
fn spawn_glyph(document: &web::Document, params: GlyphParams) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name("falling-heart");
    el.set_text_content(Some(params.glyph));
    let style = format!(
        "font-size:{:.0}px;left:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s;--drift:{:.0}px",
        params.size_px, params.left_pct, params.duration_s, params.delay_s, params.drift_px
    );
    _ = el.set_attribute("style", &style);
    _ = body.append_child(&el);

    dom::set_timeout(params.lifetime_ms(), move || {
        el.remove();
    });
}

/// Ambient stream: one small glyph every 300 ms for the life of the page.
pub fn start_ambient(document: web::Document) {
    dom::set_interval(AMBIENT_PERIOD_MS, move || {
        let params = GlyphParams::sample(&mut thread_rng(), false);
        spawn_glyph(&document, params);
    });
}

/// Celebration: an immediate staggered burst of 20 intense glyphs plus a
/// faster repeating stream that cancels itself after 10 seconds. Runs
/// alongside the ambient stream without suppressing it.
pub fn start_celebration(document: web::Document) {
    for i in 0..BURST_COUNT {
        let doc = document.clone();
        dom::set_timeout(i * BURST_STAGGER_MS, move || {
            let params = GlyphParams::sample(&mut thread_rng(), true);
            spawn_glyph(&doc, params);
        });
    }

    let doc = document.clone();
    let interval = dom::set_interval(CELEBRATION_PERIOD_MS, move || {
        let params = GlyphParams::sample(&mut thread_rng(), true);
        spawn_glyph(&doc, params);
    });
    if let Some(id) = interval {
        dom::set_timeout(CELEBRATION_DURATION_MS, move || {
            dom::clear_interval(id);
        });
    }
}
