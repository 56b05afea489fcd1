pub mod app_state;
pub mod creation_outcome;
pub mod creation_request;
pub mod form_state;
pub mod os_kind;

pub use app_state::{build_client, AppState, StateError};
pub use creation_outcome::CreationOutcome;
pub use creation_request::{BuildPayload, CreationRequest};
pub use form_state::{CreationForm, FormState, OsOption};
pub use os_kind::{OsKind, UnknownOs};
