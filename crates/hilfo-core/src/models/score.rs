use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::subscale::{ScaleId, Subscale};

/// Aggregate score of one subscale.
///
/// `mean` is `None` when not a single valid response exists for the
/// subscale; an absent score is reported explicitly, never as `0.0` or
/// a propagated NaN. `n_items` counts the responses actually averaged,
/// `n_missing` the sentinel entries that were excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub subscale: Subscale,
    pub mean: Option<f64>,
    pub n_items: usize,
    pub n_missing: usize,
}

/// A raw response outside its item's declared scale.
///
/// Out-of-range values are excluded from the mean and surfaced as
/// warnings; the evaluation itself proceeds.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ResponseWarning {
    pub item_id: String,
    pub position: usize,
    pub value: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    pub message: String,
}

/// Scoring result of one questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScores {
    pub scale: ScaleId,
    pub scores: BTreeMap<Subscale, SubscaleScore>,
    pub warnings: Vec<ResponseWarning>,
}

/// Scoring results across the questionnaires of one study session.
///
/// Recommendation predicates evaluate against this view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyScores {
    pub scales: Vec<ScaleScores>,
}

impl StudyScores {
    pub fn score(&self, subscale: Subscale) -> Option<&SubscaleScore> {
        self.scales
            .iter()
            .find_map(|scale| scale.scores.get(&subscale))
    }

    /// The subscale mean, if the subscale was scored and defined.
    pub fn mean(&self, subscale: Subscale) -> Option<f64> {
        self.score(subscale).and_then(|score| score.mean)
    }
}
