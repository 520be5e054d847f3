use crate::dom;
use crate::widgets::glow::glow_for_pointer;
use crate::widgets::pointer::PointerState;
use crate::widgets::{Anchors, WidgetError};
use web_sys as web;

/// Radial-gradient overlay that follows the pointer.
#[derive(Clone)]
pub struct CursorGlow {
    overlay: web::HtmlElement,
}

impl CursorGlow {
    pub fn locate(document: &web::Document, anchors: &Anchors) -> Result<Self, WidgetError> {
        let overlay = dom::by_id::<web::HtmlElement>(document, anchors.glow_id)?;
        Ok(Self { overlay })
    }

    #[inline]
    pub fn paint(&self, pointer: &PointerState) {
        _ = self
            .overlay
            .style()
            .set_property("background", &glow_for_pointer(pointer));
    }
}
