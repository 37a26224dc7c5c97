use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("feedback {0} must not be empty")]
    MissingField(&'static str),

    #[error("rating must be between 1 and {max}, got {0}", max = crate::MAX_RATING)]
    RatingOutOfRange(u8),

    #[error("feedback recipient address is empty")]
    MissingRecipient,
}
