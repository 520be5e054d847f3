use crate::widgets::WidgetError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Look up `#id` and cast it to the expected element type. A missing element
/// or one of the wrong type both count as a missing anchor.
pub fn by_id<T: JsCast>(document: &web::Document, id: &'static str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(WidgetError::MissingAnchor(id))
}

pub fn query<T: JsCast>(root: &web::Element, selector: &'static str) -> Result<T, WidgetError> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(WidgetError::MissingAnchor(selector))
}

pub fn query_document<T: JsCast>(
    document: &web::Document,
    selector: &'static str,
) -> Result<T, WidgetError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(WidgetError::MissingAnchor(selector))
}

/// Register a listener for the page lifetime.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Inner window size in CSS pixels, zero when unavailable.
pub fn viewport_css_size(window: &web::Window) -> (f64, f64) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Run `f` once the DOM is parsed.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    let state = js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        f();
        return;
    }
    let closure = Closure::once(f);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}
