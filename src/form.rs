use crate::dom;
use crate::widgets::constants::HINT_ERROR_CLASS;
use crate::widgets::form::{check, handle_submit, FieldValues, FormSurface, Hint, SubmitOutcome};
use crate::widgets::{Anchors, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A named form control that carries a text value.
#[derive(Clone)]
enum FieldControl {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
    Select(web::HtmlSelectElement),
}

impl FieldControl {
    fn locate(form: &web::HtmlFormElement, name: &'static str) -> Result<Self, WidgetError> {
        let el = form
            .query_selector(&format!("[name=\"{name}\"]"))
            .ok()
            .flatten()
            .ok_or(WidgetError::MissingAnchor(name))?;
        let el = match el.dyn_into::<web::HtmlInputElement>() {
            Ok(i) => return Ok(FieldControl::Input(i)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<web::HtmlTextAreaElement>() {
            Ok(t) => return Ok(FieldControl::TextArea(t)),
            Err(el) => el,
        };
        el.dyn_into::<web::HtmlSelectElement>()
            .map(FieldControl::Select)
            .map_err(|_| WidgetError::MissingAnchor(name))
    }

    fn value(&self) -> String {
        match self {
            FieldControl::Input(i) => i.value(),
            FieldControl::TextArea(t) => t.value(),
            FieldControl::Select(s) => s.value(),
        }
    }

    fn target(&self) -> &web::EventTarget {
        match self {
            FieldControl::Input(i) => i.as_ref(),
            FieldControl::TextArea(t) => t.as_ref(),
            FieldControl::Select(s) => s.as_ref(),
        }
    }
}

struct JoinForm {
    form: web::HtmlFormElement,
    submit: web::Element,
    hint: web::Element,
    name: FieldControl,
    email: FieldControl,
    excited: FieldControl,
}

impl JoinForm {
    fn locate(document: &web::Document, anchors: &Anchors) -> Result<Self, WidgetError> {
        let form = dom::by_id::<web::HtmlFormElement>(document, anchors.join_form_id)?;
        let submit = dom::query::<web::Element>(&form, anchors.join_submit_selector)?;
        let hint = dom::by_id::<web::Element>(document, anchors.join_hint_id)?;
        Ok(Self {
            name: FieldControl::locate(&form, "name")?,
            email: FieldControl::locate(&form, "email")?,
            excited: FieldControl::locate(&form, "excited")?,
            form,
            submit,
            hint,
        })
    }
}

impl FormSurface for JoinForm {
    fn values(&self) -> FieldValues {
        FieldValues {
            name: self.name.value(),
            email: self.email.value(),
            excited: self.excited.value(),
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        set_disabled(&self.submit, !enabled);
    }

    fn show_hint(&mut self, hint: Hint) {
        self.hint.set_text_content(Some(hint.text()));
        dom::set_class(&self.hint, HINT_ERROR_CLASS, hint.is_error());
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

fn set_disabled(el: &web::Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if disabled {
        _ = el.set_attribute("disabled", "");
    } else {
        _ = el.remove_attribute("disabled");
    }
}

/// Live validation on input/blur, plus an in-page submit that never
/// navigates.
pub fn setup_join_form(document: &web::Document, anchors: &Anchors) -> Result<(), WidgetError> {
    let join = JoinForm::locate(document, anchors)?;
    let targets = [
        join.name.target().clone(),
        join.email.target().clone(),
        join.excited.target().clone(),
    ];
    let form = join.form.clone();
    let join = Rc::new(RefCell::new(join));

    for target in &targets {
        for event in ["input", "blur"] {
            let join = join.clone();
            dom::listen(target, event, move |_: web::Event| {
                check(&mut *join.borrow_mut());
            });
        }
    }

    let on_submit = join.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if handle_submit(&mut *on_submit.borrow_mut()) == SubmitOutcome::Accepted {
            log::info!("[join] form accepted");
        }
    });

    check(&mut *join.borrow_mut());
    log::info!("[join] form wired");
    Ok(())
}
