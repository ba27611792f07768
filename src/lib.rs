#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::core::Scene;

mod audio;
mod buttons;
mod camera;
mod core;
mod dom;
mod frame;
mod hearts;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("heart-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #heart-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Ambient hearts start falling as soon as the page loads.
    hearts::inject_fall_css(&document);
    hearts::start_ambient(document.clone());

    // Wall-clock seed so each visit gets a fresh cloud.
    let scene = Rc::new(RefCell::new(Scene::new(js_sys::Date::now() as u64)));
    buttons::wire_buttons(&document, scene.clone());

    let (star_count, heart_count) = {
        let s = scene.borrow();
        (s.stars.cloud.len() as u32, s.heart.cloud.len() as u32)
    };
    let gpu = frame::init_gpu(&canvas, star_count, heart_count).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
