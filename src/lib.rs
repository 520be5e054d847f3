#![cfg(target_arch = "wasm32")]
use crate::widgets::fireflies::FieldParams;
use crate::widgets::pointer::PointerState;
use crate::widgets::{Anchors, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod form;
mod frame;
mod glow;
mod nav;
pub mod widgets;

/// Missing anchors just mean the page does not use that widget.
fn report(widget: &str, result: Result<(), WidgetError>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_missing_anchor() => log::debug!("[{}] skipped: {}", widget, e),
        Err(e) => log::warn!("[{}] setup failed: {}", widget, e),
    }
}

fn setup_fireflies(
    window: &web::Window,
    document: &web::Document,
    anchors: &Anchors,
    pointer: &Rc<RefCell<PointerState>>,
) -> Result<(), WidgetError> {
    if dom::prefers_reduced_motion(window) {
        log::debug!("[fireflies] reduced motion requested; field disabled");
        return Ok(());
    }
    let layer =
        frame::FireflyLayer::locate(document, anchors, FieldParams::default(), pointer.clone())?;
    let layer = Rc::new(RefCell::new(layer));
    frame::wire_canvas_resize(window, &layer);
    frame::start_loop(layer);
    log::info!("[fireflies] animation started");
    Ok(())
}

fn init(window: web::Window, document: web::Document) {
    let anchors = Anchors::default();
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let glow = match glow::CursorGlow::locate(&document, &anchors) {
        Ok(g) => {
            log::info!("[glow] cursor glow wired");
            Some(g)
        }
        Err(e) => {
            report("glow", Err(e));
            None
        }
    };
    report(
        "fireflies",
        setup_fireflies(&window, &document, &anchors, &pointer),
    );
    events::wire_pointer_tracking(&document, events::PointerWiring { pointer, glow });

    report(
        "sound",
        audio::setup_sound_toggle(&window, &document, &anchors),
    );
    report("join", form::setup_join_form(&document, &anchors));

    let nav = match nav::NavController::locate(&document, &anchors) {
        Ok(nav) => {
            nav.wire(&document);
            log::info!("[nav] menu wired");
            Some(nav)
        }
        Err(e) => {
            report("nav", Err(e));
            None
        }
    };
    events::wire_global_keydown(&document, nav);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lightbetween-web starting");

    if let Err(e) = bootstrap() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn bootstrap() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let ready_doc = document.clone();
    dom::on_ready(&ready_doc, move || init(window, document));
    Ok(())
}
