use super::constants::{NAV_LABEL_CLOSE, NAV_LABEL_OPEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    LinkClicked,
    EscapePressed,
    ClickedOutside,
}

/// Attributes the header and toggle button should reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
    pub aria_expanded: &'static str,
    pub aria_label: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) -> NavView {
        self.open = open;
        self.view()
    }

    pub fn apply(&mut self, event: NavEvent) -> NavView {
        let open = match event {
            NavEvent::ToggleClicked => !self.open,
            NavEvent::LinkClicked | NavEvent::EscapePressed | NavEvent::ClickedOutside => false,
        };
        self.set_open(open)
    }

    pub fn view(&self) -> NavView {
        NavView {
            open: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
            aria_label: if self.open {
                NAV_LABEL_CLOSE
            } else {
                NAV_LABEL_OPEN
            },
        }
    }
}

#[inline]
pub fn nav_event_for_key(key: &str) -> Option<NavEvent> {
    match key {
        "Escape" => Some(NavEvent::EscapePressed),
        _ => None,
    }
}
