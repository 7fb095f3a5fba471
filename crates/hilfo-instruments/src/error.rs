use thiserror::Error;

use hilfo_core::error::CoreError;
use hilfo_core::models::subscale::ScaleId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid item bank: {0}")]
    Bank(#[from] CoreError),

    #[error("questionnaire '{0}' is not registered")]
    UnknownQuestionnaire(ScaleId),

    #[error("questionnaire '{0}' appears twice in the study definition")]
    DuplicateQuestionnaire(ScaleId),

    #[error("duplicate demographic field id '{0}'")]
    DuplicateDemographicId(String),

    #[error("demographic field '{0}' has no answer options")]
    EmptyOptions(String),

    #[error("demographic field '{id}': numeric range {min}..{max} is invalid")]
    NumberRange { id: String, min: u32, max: u32 },

    #[error("adaptive start item '{item_id}' is not in the '{scale}' bank")]
    UnknownStartItem { scale: ScaleId, item_id: String },

    #[error("adaptive config for '{scale}': {message}")]
    InvalidAdaptiveConfig { scale: ScaleId, message: String },
}
