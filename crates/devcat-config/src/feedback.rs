//! Feedback recipient configuration.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_EMAIL: &str = "your-email@example.com";

fn default_email() -> String {
    PLACEHOLDER_EMAIL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedbackConfig {
    /// Address the mailto link is addressed to.
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
        }
    }
}

impl FeedbackConfig {
    /// Whether the recipient was changed from the placeholder.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.email.trim().is_empty() && self.email != PLACEHOLDER_EMAIL
    }
}
