use std::fmt::Write as _;

use devcat_core::entities::ProjectRecord;
use devcat_core::responses::FeedbackResponse;

use crate::MAX_RATING;
use crate::draft::FeedbackDraft;
use crate::error::FeedbackError;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// A composed feedback email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub subject: String,
    pub body: String,
}

impl FeedbackMessage {
    /// Validate `draft` and render it as an email about `record`.
    ///
    /// # Errors
    ///
    /// Returns the [`FeedbackError`] from [`FeedbackDraft::validate`].
    pub fn compose(record: &ProjectRecord, draft: &FeedbackDraft) -> Result<Self, FeedbackError> {
        draft.validate()?;

        let label = draft.kind.label();
        let title = draft.title.trim();
        let subject = format!("[{label}] {}: {title}", record.name);

        let mut body = String::new();
        let _ = writeln!(body, "App: {}", record.name);
        let _ = writeln!(body, "App ID: {}", record.id);
        let _ = writeln!(body, "Feedback Type: {label}");
        if let Some(rating) = draft.effective_rating() {
            let _ = writeln!(body, "Rating: {} ({rating}/{MAX_RATING})", stars(rating));
        }
        body.push_str("\n---\n\n");
        let _ = write!(body, "Title: {title}\n\n");
        let _ = writeln!(body, "Description:\n{}", draft.description.trim());

        Ok(Self { subject, body })
    }

    /// `mailto:` link with subject and body percent-encoded.
    ///
    /// # Errors
    ///
    /// [`FeedbackError::MissingRecipient`] if `email` is blank.
    pub fn mailto_url(&self, email: &str) -> Result<String, FeedbackError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(FeedbackError::MissingRecipient);
        }
        Ok(format!(
            "mailto:{email}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        ))
    }

    /// Bundle into the `devcat feedback` response.
    ///
    /// # Errors
    ///
    /// See [`FeedbackMessage::mailto_url`].
    pub fn into_response(
        self,
        record: &ProjectRecord,
        draft: &FeedbackDraft,
        email: &str,
    ) -> Result<FeedbackResponse, FeedbackError> {
        let mailto = self.mailto_url(email)?;
        Ok(FeedbackResponse {
            project_id: record.id.clone(),
            kind: draft.kind,
            subject: self.subject,
            body: self.body,
            mailto,
        })
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    std::iter::repeat_n(FILLED_STAR, filled)
        .chain(std::iter::repeat_n(EMPTY_STAR, empty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_from_left() {
        assert_eq!(stars(1), "★☆☆☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
    }
}
