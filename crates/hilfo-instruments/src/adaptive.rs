use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hilfo_core::models::bank::ItemBank;

use crate::error::InstrumentError;

/// Session settings for an adaptively administered questionnaire.
///
/// Declarative configuration for the external 2PL engine; ability
/// estimation and information-based item selection happen there, not in
/// this workspace.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdaptiveConfig {
    /// Administer at least this many items before stopping is allowed.
    pub min_items: usize,
    /// Hard cap on administered items.
    pub max_items: usize,
    /// Stop once the standard error of the ability estimate falls below
    /// this value.
    pub se_threshold: f64,
    /// Item ids administered in fixed order before adaptive selection
    /// takes over.
    pub start_items: Vec<String>,
}

impl AdaptiveConfig {
    /// Check this configuration against the bank it administers.
    pub fn validate(&self, bank: &ItemBank) -> Result<(), InstrumentError> {
        if self.min_items == 0 || self.min_items > self.max_items {
            return Err(InstrumentError::InvalidAdaptiveConfig {
                scale: bank.scale,
                message: format!(
                    "item window {}..{} is invalid",
                    self.min_items, self.max_items
                ),
            });
        }
        if self.max_items > bank.len() {
            return Err(InstrumentError::InvalidAdaptiveConfig {
                scale: bank.scale,
                message: format!(
                    "max_items {} exceeds the bank size {}",
                    self.max_items,
                    bank.len()
                ),
            });
        }
        if self.se_threshold <= 0.0 {
            return Err(InstrumentError::InvalidAdaptiveConfig {
                scale: bank.scale,
                message: format!("se_threshold {} must be positive", self.se_threshold),
            });
        }
        if self.start_items.len() > self.max_items {
            return Err(InstrumentError::InvalidAdaptiveConfig {
                scale: bank.scale,
                message: format!(
                    "{} start items exceed max_items {}",
                    self.start_items.len(),
                    self.max_items
                ),
            });
        }
        if let Some(item) = bank.items.iter().find(|item| item.irt.is_none()) {
            return Err(InstrumentError::InvalidAdaptiveConfig {
                scale: bank.scale,
                message: format!("item '{}' has no 2PL parameters", item.id),
            });
        }
        for (idx, item_id) in self.start_items.iter().enumerate() {
            if self.start_items[..idx].contains(item_id) {
                return Err(InstrumentError::InvalidAdaptiveConfig {
                    scale: bank.scale,
                    message: format!("start item '{item_id}' is listed twice"),
                });
            }
            if !bank.items.iter().any(|item| item.id == *item_id) {
                return Err(InstrumentError::UnknownStartItem {
                    scale: bank.scale,
                    item_id: item_id.clone(),
                });
            }
        }
        Ok(())
    }
}
