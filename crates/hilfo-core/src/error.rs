use thiserror::Error;

use crate::models::subscale::{ScaleId, Subscale};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("item bank for '{scale}' is empty")]
    EmptyBank { scale: ScaleId },

    #[error("duplicate item id '{item_id}' in the '{scale}' bank")]
    DuplicateItemId { scale: ScaleId, item_id: String },

    #[error("item '{item_id}': response scale [{min}, {max}] is invalid")]
    InvalidRange { item_id: String, min: f64, max: f64 },

    #[error("item '{item_id}': subscale '{subscale}' does not belong to '{scale}'")]
    ForeignSubscale {
        item_id: String,
        subscale: Subscale,
        scale: ScaleId,
    },

    #[error("item '{item_id}': {categories} response categories but {anchors} anchors")]
    AnchorMismatch {
        item_id: String,
        categories: usize,
        anchors: usize,
    },
}
