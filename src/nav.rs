use crate::dom;
use crate::widgets::constants::NAV_OPEN_CLASS;
use crate::widgets::nav::{NavEvent, NavMenu, NavView};
use crate::widgets::{Anchors, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile navigation panel: header class plus ARIA state on the toggle.
#[derive(Clone)]
pub struct NavController {
    header: web::Element,
    toggle: web::Element,
    panel: web::Element,
    menu: Rc<RefCell<NavMenu>>,
}

impl NavController {
    pub fn locate(document: &web::Document, anchors: &Anchors) -> Result<Self, WidgetError> {
        let header = dom::query_document::<web::Element>(document, anchors.header_selector)?;
        let toggle = dom::query_document::<web::Element>(document, anchors.nav_toggle_selector)?;
        let panel = dom::by_id::<web::Element>(document, anchors.nav_id)?;
        let open = header.class_list().contains(NAV_OPEN_CLASS);
        let menu = Rc::new(RefCell::new(NavMenu::default()));
        let nav = Self {
            header,
            toggle,
            panel,
            menu,
        };
        nav.reflect(nav.menu.borrow_mut().set_open(open));
        Ok(nav)
    }

    pub fn dispatch(&self, event: NavEvent) {
        let view = self.menu.borrow_mut().apply(event);
        self.reflect(view);
    }

    fn reflect(&self, view: NavView) {
        dom::set_class(&self.header, NAV_OPEN_CLASS, view.open);
        _ = self.toggle.set_attribute("aria-expanded", view.aria_expanded);
        _ = self.toggle.set_attribute("aria-label", view.aria_label);
    }

    /// Toggle click, link clicks inside the panel, and clicks outside the
    /// header. Escape is routed through the global keydown handler.
    pub fn wire(&self, document: &web::Document) {
        let nav = self.clone();
        dom::listen(&self.toggle, "click", move |_: web::Event| {
            nav.dispatch(NavEvent::ToggleClicked);
        });

        let nav = self.clone();
        dom::listen(&self.panel, "click", move |ev: web::Event| {
            let on_link = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if on_link {
                nav.dispatch(NavEvent::LinkClicked);
            }
        });

        let nav = self.clone();
        dom::listen(document, "click", move |ev: web::Event| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            if !nav.header.contains(target.as_ref()) {
                nav.dispatch(NavEvent::ClickedOutside);
            }
        });
    }
}
