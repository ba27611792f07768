use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Maintain the canvas internal pixel size at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Set one inline style property on an element found by id. Missing elements
/// and host rejections are ignored; styling is cosmetic.
pub fn set_style_by_id(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
            _ = html.style().set_property(property, value);
        }
    }
}

/// Append a `<style>` element with the given CSS to the document head.
pub fn inject_style(document: &web::Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }
}

/// Repeating timer; the closure leaks for the life of the page, matching the
/// emitters' session-long lifetime. Returns the interval handle.
pub fn set_interval(period_ms: i32, handler: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok()?;
    closure.forget();
    Some(id)
}

pub fn clear_interval(id: i32) {
    if let Some(window) = web::window() {
        window.clear_interval_with_handle(id);
    }
}

/// One-shot timer. The closure is freed after it fires.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(handler);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
}
