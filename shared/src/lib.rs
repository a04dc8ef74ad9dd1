//! Types shared by the portfolio frontend and backend.
//!
//! Both sides validate contact submissions with the same rules, so the
//! schema lives here rather than being duplicated in the form and the
//! handler.

pub mod contact;
pub mod health;

pub use contact::{
    ContactAccepted, ContactMessage, ContactPayload, ContactRejected, FailureResponse, FieldError,
    FieldErrorCode,
};
pub use health::HealthResponse;
