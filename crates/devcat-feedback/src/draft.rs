use devcat_core::enums::FeedbackKind;

use crate::MAX_RATING;
use crate::error::FeedbackError;

/// User input for one piece of feedback about a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub kind: FeedbackKind,
    pub title: String,
    pub description: String,
    /// Star rating, `1..=MAX_RATING`. Only rendered for general feedback.
    pub rating: Option<u8>,
}

impl FeedbackDraft {
    #[must_use]
    pub fn new(
        kind: FeedbackKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            rating: None,
        }
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Check that title and description carry text and that any rating is in
    /// range.
    ///
    /// # Errors
    ///
    /// [`FeedbackError::MissingField`] for a blank title or description,
    /// [`FeedbackError::RatingOutOfRange`] for a rating of 0 or above
    /// [`MAX_RATING`].
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if self.title.trim().is_empty() {
            return Err(FeedbackError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(FeedbackError::MissingField("description"));
        }
        match self.rating {
            Some(rating) if !(1..=MAX_RATING).contains(&rating) => {
                Err(FeedbackError::RatingOutOfRange(rating))
            }
            _ => Ok(()),
        }
    }

    /// The rating to render, if this kind of feedback carries one.
    #[must_use]
    pub fn effective_rating(&self) -> Option<u8> {
        self.rating.filter(|_| self.kind.accepts_rating())
    }
}
