use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::anim::{EXPLOSION_TICK_MS, PULSE_SETTLE_DELAY_MS};
use crate::core::Scene;
use crate::{dom, render};

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let time_ms = (now - self.started).as_secs_f64() as f32 * 1000.0;

        self.scene.borrow_mut().update(time_ms);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            if let Err(e) = g.render(dt_sec, time_ms, &scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    star_count: u32,
    heart_count: u32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, star_count, heart_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Fire the one-time intensify transition and drive the explosion on its
/// fixed tick. Progress advances by a fixed step per tick, so the sequence is
/// tick-count-bound rather than wall-clock-bound; delayed ticks stretch it.
/// Re-entrant calls are no-ops once the scene is intensified.
pub fn trigger_intensify(scene: &Rc<RefCell<Scene>>) {
    if !scene.borrow_mut().intensify() {
        return;
    }
    log::info!("[scene] intensified");

    let interval_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let scene_tick = scene.clone();
    let id_tick = interval_id.clone();
    let id = dom::set_interval(EXPLOSION_TICK_MS, move || {
        if scene_tick.borrow_mut().step_explosion() {
            if let Some(id) = id_tick.borrow_mut().take() {
                dom::clear_interval(id);
            }
            let scene_settle = scene_tick.clone();
            dom::set_timeout(PULSE_SETTLE_DELAY_MS, move || {
                scene_settle.borrow_mut().settle_pulse();
            });
        }
    });
    *interval_id.borrow_mut() = id;
}
