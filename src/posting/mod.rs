//! Job posting form schema and validation.
//!
//! Four required fields plus an optional description. Violations are
//! surfaced per field with the schema message; nothing here is fatal.

use serde::Deserialize;

pub const TITLE_MIN_CHARS: usize = 3;
pub const COMPANY_MIN_CHARS: usize = 2;
pub const LOCATION_MIN_CHARS: usize = 2;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct JobPostingForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
}

/// Per-field validation messages for a submitted posting form.
/// `None` means the field passed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub company: Option<&'static str>,
    pub location: Option<&'static str>,
    pub salary: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.salary.is_none()
    }
}

// Minimum lengths count characters, not bytes.
fn too_short(value: &str, min_chars: usize) -> bool {
    value.chars().count() < min_chars
}

pub fn validate(form: &JobPostingForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if too_short(&form.title, TITLE_MIN_CHARS) {
        errors.title = Some("Title must be at least 3 characters");
    }
    if too_short(&form.company, COMPANY_MIN_CHARS) {
        errors.company = Some("Company name required");
    }
    if too_short(&form.location, LOCATION_MIN_CHARS) {
        errors.location = Some("Location required");
    }
    if form.salary.is_empty() {
        errors.salary = Some("Salary required");
    }

    errors
}
