//! Scroll-triggered reveal animations.
//!
//! `engine` holds the state machine and knows nothing about the DOM,
//! `runtime` drives it from the window's scroll events and animation
//! frames, and `hooks` ties registrations to component lifetimes.

pub mod dom;
pub mod engine;
pub mod hooks;
pub mod runtime;
pub mod style;

pub use engine::{Policy, RevealEngine, RevealHandle, RevealOptions, RevealSurface};
pub use hooks::{use_reveal, use_reveal_batch};
pub use style::{Ease, VisualState};
