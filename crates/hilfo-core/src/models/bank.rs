use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::item::Item;
use super::subscale::{ScaleId, Subscale};

/// The fixed, ordered item catalog of one questionnaire.
///
/// Item order defines the expected position of raw responses. `anchors`
/// are the Likert response labels the survey host renders, one per
/// category, shared by all items of the bank.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemBank {
    pub scale: ScaleId,
    pub anchors: Vec<String>,
    pub items: Vec<Item>,
}

impl ItemBank {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The subscales covered by this bank, in first-appearance order.
    pub fn subscales(&self) -> Vec<Subscale> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.subscale) {
                seen.push(item.subscale);
            }
        }
        seen
    }

    /// Check the load-time invariants of the declared bank.
    ///
    /// Called once at process start (and from the test suite); scoring
    /// assumes a validated bank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyBank { scale: self.scale });
        }

        for (idx, item) in self.items.iter().enumerate() {
            if self.items[..idx].iter().any(|other| other.id == item.id) {
                return Err(CoreError::DuplicateItemId {
                    scale: self.scale,
                    item_id: item.id.clone(),
                });
            }
            if item.scale_min >= item.scale_max {
                return Err(CoreError::InvalidRange {
                    item_id: item.id.clone(),
                    min: item.scale_min,
                    max: item.scale_max,
                });
            }
            if item.subscale.scale() != self.scale {
                return Err(CoreError::ForeignSubscale {
                    item_id: item.id.clone(),
                    subscale: item.subscale,
                    scale: self.scale,
                });
            }
            if item.category_count() != self.anchors.len() {
                return Err(CoreError::AnchorMismatch {
                    item_id: item.id.clone(),
                    categories: item.category_count(),
                    anchors: self.anchors.len(),
                });
            }
        }

        Ok(())
    }
}
