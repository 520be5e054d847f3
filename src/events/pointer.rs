use crate::dom;
use crate::glow::CursorGlow;
use crate::widgets::pointer::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub glow: Option<CursorGlow>,
}

pub fn wire_pointer_tracking(document: &web::Document, w: PointerWiring) {
    wire_pointermove(document, &w);
    wire_pointerleave(document, &w);
}

fn wire_pointermove(document: &web::Document, w: &PointerWiring) {
    let w = w.clone();
    dom::listen(document, "pointermove", move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_css_size(&window);
        let snapshot = {
            let mut ps = w.pointer.borrow_mut();
            ps.on_move(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
            *ps
        };
        if let Some(glow) = &w.glow {
            glow.paint(&snapshot);
        }
    });
}

fn wire_pointerleave(document: &web::Document, w: &PointerWiring) {
    let pointer = w.pointer.clone();
    dom::listen(document, "pointerleave", move |_: web::Event| {
        pointer.borrow_mut().on_leave();
    });
}
