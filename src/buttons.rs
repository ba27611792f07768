use std::cell::RefCell;
use std::rc::Rc;

use rand::thread_rng;
use web_sys as web;

use crate::core::anim::{evade_offset, RejectState, RejectStyles};
use crate::core::Scene;
use crate::{audio, dom, frame, hearts, overlay};

const BTN_NO: &str = "btn-no";
const BTN_YES: &str = "btn-yes";

fn apply_reject_styles(document: &web::Document, styles: &RejectStyles, offset: (f32, f32)) {
    dom::set_style_by_id(document, BTN_NO, "font-size", &format!("{}px", styles.no_font_px));
    dom::set_style_by_id(
        document,
        BTN_NO,
        "padding",
        &format!("{}px {}px", styles.no_padding_px.0, styles.no_padding_px.1),
    );
    dom::set_style_by_id(
        document,
        BTN_NO,
        "transform",
        &format!("translate({:.0}px, {:.0}px)", offset.0, offset.1),
    );
    dom::set_style_by_id(document, BTN_YES, "font-size", &format!("{}px", styles.yes_font_px));
    dom::set_style_by_id(
        document,
        BTN_YES,
        "padding",
        &format!("{}px {}px", styles.yes_padding_px.0, styles.yes_padding_px.1),
    );
    if styles.hidden {
        dom::set_style_by_id(document, BTN_NO, "opacity", "0");
        dom::set_style_by_id(document, BTN_NO, "pointer-events", "none");
    }
}

/// Wire the two buttons. The "No" button evades and shrinks per click; the
/// "Yes" button accepts: swap views, request audio, start the celebration
/// burst, and fire the scene's intensify trigger.
pub fn wire_buttons(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let reject_state = Rc::new(RefCell::new(RejectState::new()));

    {
        let document = document.clone();
        let reject_state = reject_state.clone();
        dom::add_click_listener(&document.clone(), BTN_NO, move || {
            let styles = reject_state.borrow_mut().click();
            let offset = evade_offset(&mut thread_rng());
            apply_reject_styles(&document, &styles, offset);
            log::info!("[no] click {} -> font {:.0}px", reject_state.borrow().clicks(), styles.no_font_px);
        });
    }

    {
        let document = document.clone();
        dom::add_click_listener(&document.clone(), BTN_YES, move || {
            overlay::show_result(&document);
            audio::request_playback(&document);
            hearts::start_celebration(document.clone());
            frame::trigger_intensify(&scene);
        });
    }
}
