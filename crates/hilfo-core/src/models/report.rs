use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::language::Language;
use super::subscale::{ScaleId, Subscale};

/// Qualitative reading of one subscale score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    /// Threshold rule applied to a defined mean.
    Scored { label: String },
    /// No valid responses; no threshold is applied to a placeholder.
    InsufficientData,
}

/// One subscale entry of a result page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleReport {
    pub subscale: Subscale,
    /// Display name in the report's language.
    pub name: String,
    pub mean: Option<f64>,
    pub n_items: usize,
    pub interpretation: Interpretation,
}

/// Scored questionnaire section of a result page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleReport {
    pub scale: ScaleId,
    pub name: String,
    pub entries: Vec<SubscaleReport>,
}

/// The complete per-participant result structure.
///
/// Created once per finished session and handed to the presentation
/// layer by value; no evaluation state lives outside it. Flat and
/// serializable, charts and result pages are rendered externally.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyReport {
    pub session: Uuid,
    pub language: Language,
    pub completed_at: jiff::Timestamp,
    pub scales: Vec<ScaleReport>,
    pub recommendations: Vec<String>,
}

impl StudyReport {
    /// Serialize for the export boundary (the JS chart layer consumes
    /// this exact shape).
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
