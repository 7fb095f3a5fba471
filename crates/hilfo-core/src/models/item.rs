use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::subscale::Subscale;

/// A single questionnaire item.
///
/// `prompt` is the German administration wording shown to participants.
/// Raw responses arrive as numeric category codes in
/// `[scale_min, scale_max]`; `reverse_coded` items are transformed to
/// `(scale_min + scale_max) - v` before aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub subscale: Subscale,
    pub reverse_coded: bool,
    pub scale_min: f64,
    pub scale_max: f64,
    /// 2PL parameters for adaptively administered items; `None` for
    /// fixed-order questionnaires.
    pub irt: Option<ItemParameters>,
}

impl Item {
    /// The response category string in the survey host's table format,
    /// e.g. `"1,2,3,4,5"` for a 1–5 item.
    pub fn response_categories(&self) -> String {
        let mut categories = Vec::new();
        let mut v = self.scale_min as i64;
        while v <= self.scale_max as i64 {
            categories.push(v.to_string());
            v += 1;
        }
        categories.join(",")
    }

    /// Number of response categories on this item's scale.
    pub fn category_count(&self) -> usize {
        (self.scale_max - self.scale_min) as usize + 1
    }

    /// Whether `value` is a legal category code for this item. `NaN` is
    /// never legal.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.scale_min && value <= self.scale_max
    }
}

/// Two-parameter-logistic item parameters.
///
/// Data only; theta estimation and item selection run in the external
/// adaptive engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemParameters {
    pub discrimination: f64,
    pub difficulty: f64,
}
