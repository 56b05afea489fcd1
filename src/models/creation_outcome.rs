use serde::Serialize;
use serde_json::Value;

use crate::error::ProxyError;

/// Result of one creation attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreationOutcome {
    Created { message: String },
    Failed { error: String },
}

impl CreationOutcome {
    /// Interprets a creation-service body. A non-empty `message` means success;
    /// anything else is a failure carrying `error` (possibly empty).
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return CreationOutcome::Failed {
                error: format!("Unexpected response from creation service: {}", value),
            };
        };
        match obj.get("message").and_then(|v| v.as_str()) {
            Some(message) if !message.is_empty() => CreationOutcome::Created {
                message: message.to_string(),
            },
            _ => CreationOutcome::Failed {
                error: obj
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
            },
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CreationOutcome::Created { .. })
    }

    /// The backend reports `Container <id> started\n`; trailing whitespace is noise.
    pub fn instance_id(&self) -> Option<&str> {
        match self {
            CreationOutcome::Created { message } => Some(message.trim()),
            CreationOutcome::Failed { .. } => None,
        }
    }

    /// Text to embed in the rendered result line.
    pub fn text(&self) -> &str {
        match self {
            CreationOutcome::Created { message } => message.trim(),
            CreationOutcome::Failed { error } => error.trim(),
        }
    }
}

impl From<&ProxyError> for CreationOutcome {
    fn from(e: &ProxyError) -> Self {
        CreationOutcome::Failed { error: e.to_string() }
    }
}
