use crate::dom;
use crate::widgets::fireflies::{
    Blend, FieldCanvas, FieldParams, FireflyField, Fog, Sprite, Tick, Viewport,
};
use crate::widgets::pointer::PointerState;
use crate::widgets::{Anchors, WidgetError};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas implementation of the field's draw calls.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    fn radial(&self, center: Vec2, inner: f32, outer: f32) -> Option<web::CanvasGradient> {
        let (x, y) = (center.x as f64, center.y as f64);
        self.ctx
            .create_radial_gradient(x, y, inner as f64, x, y, outer as f64)
            .ok()
    }
}

impl FieldCanvas for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.composite_op());
    }

    fn fill_fog(&mut self, fog: &Fog) {
        let Some(gradient) = self.radial(fog.center, fog.inner_radius, fog.outer_radius) else {
            return;
        };
        for (offset, color) in fog.stops() {
            _ = gradient.add_color_stop(*offset, color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, fog.size.x as f64, fog.size.y as f64);
    }

    fn fill_sprite(&mut self, sprite: &Sprite) {
        let Some(gradient) = self.radial(sprite.center, 0.0, sprite.radius) else {
            return;
        };
        for (offset, color) in sprite.stops() {
            _ = gradient.add_color_stop(offset, &color.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            sprite.center.x as f64,
            sprite.center.y as f64,
            sprite.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }
}

/// Canvas, its painter and the field state driven by the animation loop.
pub struct FireflyLayer {
    canvas: web::HtmlCanvasElement,
    painter: CanvasPainter,
    field: FireflyField,
    pointer: Rc<RefCell<PointerState>>,
}

impl FireflyLayer {
    /// Skipped with a missing anchor when the canvas or its 2D context is
    /// unavailable.
    pub fn locate(
        document: &web::Document,
        anchors: &Anchors,
        params: FieldParams,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Result<Self, WidgetError> {
        let canvas = dom::by_id::<web::HtmlCanvasElement>(document, anchors.canvas_id)?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(WidgetError::MissingAnchor("2d context"))?;
        Ok(Self {
            canvas,
            painter: CanvasPainter { ctx },
            field: FireflyField::from_entropy(params),
            pointer,
        })
    }

    /// Match the backing buffer to the viewport and converge on the density
    /// target.
    pub fn resize(&mut self, window: &web::Window) {
        let (w, h) = dom::viewport_css_size(window);
        let viewport = Viewport::new(w, h, window.device_pixel_ratio());
        let (bw, bh) = viewport.backing_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        _ = self
            .painter
            .ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);
        self.field.resize(viewport);
        let applied = self.field.viewport();
        log::debug!(
            "[fireflies] viewport {}x{} @{} -> {} flies",
            applied.width,
            applied.height,
            applied.dpr,
            self.field.len()
        );
    }

    pub fn frame(&mut self, t: f64) -> Tick {
        let pointer = *self.pointer.borrow();
        self.field.frame(t, &pointer, &mut self.painter)
    }
}

pub fn wire_canvas_resize(window: &web::Window, layer: &Rc<RefCell<FireflyLayer>>) {
    layer.borrow_mut().resize(window);
    let layer = layer.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        if let Some(w) = web::window() {
            layer.borrow_mut().resize(&w);
        }
    });
}

/// Drive the layer from `requestAnimationFrame` until it reports `Tick::Stop`.
pub fn start_loop(layer: Rc<RefCell<FireflyLayer>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |t: f64| {
        if layer.borrow_mut().frame(t) == Tick::Continue {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
