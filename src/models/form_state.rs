use serde::Deserialize;

use crate::models::{CreationOutcome, CreationRequest, OsKind};

/// Fields posted by the HTML form. `os` is absent when no radio is checked.
#[derive(Debug, Deserialize, Default)]
pub struct CreationForm {
    pub os: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// One radio input on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsOption {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Request-scoped state of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selected_os: Option<OsKind>,
    /// Raw `os` value as submitted, forwarded even when it names no known image.
    pub raw_os: String,
    pub name: String,
    pub result: Option<CreationOutcome>,
}

impl FormState {
    pub fn from_form(form: CreationForm) -> Self {
        let raw_os = form.os.unwrap_or_default();
        FormState {
            selected_os: raw_os.parse().ok(),
            raw_os,
            name: form.name,
            result: None,
        }
    }

    pub fn to_request(&self) -> CreationRequest {
        CreationRequest {
            os: self.raw_os.clone(),
            name: self.name.clone(),
        }
    }

    /// Stores a result, replacing whatever was there.
    pub fn record(&mut self, outcome: CreationOutcome) {
        self.result = Some(outcome);
    }

    pub fn os_options(&self) -> Vec<OsOption> {
        OsKind::all()
            .into_iter()
            .map(|os| OsOption {
                id: os.id(),
                label: os.label(),
                checked: self.selected_os == Some(os),
            })
            .collect()
    }
}
