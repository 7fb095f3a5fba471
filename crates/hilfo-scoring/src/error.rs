//! Error types for the scoring pipeline.

use thiserror::Error;

use hilfo_core::models::subscale::{ScaleId, Subscale};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("'{scale}': expected {expected} responses, got {got}")]
    LengthMismatch {
        scale: ScaleId,
        expected: usize,
        got: usize,
    },

    #[error("no interpretation rule for subscale '{0}'")]
    MissingRule(Subscale),

    #[error("questionnaire '{0}' is not registered")]
    UnknownQuestionnaire(ScaleId),

    #[error("invalid interpretation table: {0}")]
    Table(#[from] serde_json::Error),
}
