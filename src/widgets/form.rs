use super::constants::{HINT_BAD_EMAIL, HINT_REQUIRED, HINT_WELCOME};

/// Current values of the three join-form controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct JoinFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub excited: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    Required,
    BadEmail,
    Welcome,
}

impl Hint {
    pub fn text(self) -> &'static str {
        match self {
            Hint::Required => HINT_REQUIRED,
            Hint::BadEmail => HINT_BAD_EMAIL,
            Hint::Welcome => HINT_WELCOME,
        }
    }

    /// Whether the hint element carries the error style.
    pub fn is_error(self) -> bool {
        matches!(self, Hint::BadEmail)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub name_ok: bool,
    pub email_ok: bool,
    pub excited_ok: bool,
    pub hint: Hint,
}

impl Validation {
    #[inline]
    pub fn submit_enabled(&self) -> bool {
        self.name_ok && self.email_ok && self.excited_ok
    }
}

/// Browser whitespace: Unicode white space plus the byte-order mark.
#[inline]
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// `local@domain.tld`-ish: one `@`, no whitespace, non-empty local part, and a
/// `.` inside the domain with something on both sides. Surrounding whitespace
/// is ignored.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim_matches(is_blank);
    if value.chars().any(is_blank) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate(fields: &JoinFields<'_>) -> Validation {
    let name_ok = !fields.name.trim_matches(is_blank).is_empty();
    let email_ok = is_valid_email(fields.email);
    let excited_ok = !fields.excited.trim_matches(is_blank).is_empty();
    let hint = if !email_ok && !fields.email.trim_matches(is_blank).is_empty() {
        Hint::BadEmail
    } else {
        Hint::Required
    };
    Validation {
        name_ok,
        email_ok,
        excited_ok,
        hint,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Invalid input; nothing changes.
    Ignored,
    /// The welcome hint was shown, then the form was reset and validated
    /// again, so the generic hint is what remains.
    Accepted,
}

pub fn submit(fields: &JoinFields<'_>) -> SubmitOutcome {
    if validate(fields).submit_enabled() {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Ignored
    }
}

/// Owned snapshot of the control values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub excited: String,
}

impl FieldValues {
    pub fn fields(&self) -> JoinFields<'_> {
        JoinFields {
            name: &self.name,
            email: &self.email,
            excited: &self.excited,
        }
    }
}

/// The page elements the join form drives.
pub trait FormSurface {
    fn values(&self) -> FieldValues;
    fn set_submit_enabled(&mut self, enabled: bool);
    fn show_hint(&mut self, hint: Hint);
    fn reset(&mut self);
}

/// Validate the current values and reflect the result.
pub fn check<S: FormSurface + ?Sized>(surface: &mut S) -> Validation {
    let v = validate(&surface.values().fields());
    surface.set_submit_enabled(v.submit_enabled());
    surface.show_hint(v.hint);
    v
}

pub fn handle_submit<S: FormSurface + ?Sized>(surface: &mut S) -> SubmitOutcome {
    check(surface);
    let outcome = submit(&surface.values().fields());
    if outcome == SubmitOutcome::Accepted {
        surface.show_hint(Hint::Welcome);
        surface.reset();
        check(surface);
    }
    outcome
}
