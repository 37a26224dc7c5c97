//! # devcat-feedback
//!
//! Turns a feedback draft about one catalog project into an email subject,
//! a plain-text body, and a `mailto:` link the user's mail client can open.
//! Nothing is sent from here.

mod draft;
mod error;
mod message;

pub use draft::FeedbackDraft;
pub use error::FeedbackError;
pub use message::FeedbackMessage;

/// Highest star rating general feedback can carry.
pub const MAX_RATING: u8 = 5;
