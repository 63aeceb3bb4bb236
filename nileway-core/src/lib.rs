//! Nileway behavior core
//!
//! Platform-agnostic logic for the Nileway marketing site: supported
//! languages, form validation, messaging deep links, gallery layout math,
//! scroll thresholds, and the notification lifecycle. No browser or UI
//! dependencies live here; the `nileway-web` crate drives these pieces from
//! the DOM.

pub mod gallery;
pub mod lang;
pub mod links;
pub mod scroll;
pub mod toast;
pub mod validation;

// Re-export commonly used types
pub use gallery::{CardLayout, CardRect, CenteredTransform, Viewport, center_transform};
pub use lang::Lang;
pub use links::{contact_link, greeting_link};
pub use toast::{Severity, ToastPhase};
pub use validation::{ContactMessage, TestimonialEntry, ValidationError};
