use crate::dom;
use crate::nav::NavController;
use crate::widgets::nav::nav_event_for_key;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, nav: Option<&NavController>) {
    let key = ev.key();
    if let (Some(event), Some(nav)) = (nav_event_for_key(&key), nav) {
        nav.dispatch(event);
    }
}

pub fn wire_global_keydown(document: &web::Document, nav: Option<NavController>) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, nav.as_ref());
    });
}
