//! Reverse-coding and per-subscale aggregation.

use std::collections::BTreeMap;

use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::response::is_missing;
use hilfo_core::models::score::{ResponseWarning, ScaleScores, SubscaleScore};
use hilfo_core::models::subscale::Subscale;

use crate::error::ScoringError;

/// Score one completed questionnaire.
///
/// `responses` must align with the bank's item order, one raw value per
/// item; a length mismatch fails before anything is scored. Sentinel
/// entries and values outside the item's scale are excluded from the
/// means; out-of-range values additionally produce a [`ResponseWarning`].
/// A subscale with no remaining valid response gets `mean: None`.
///
/// Pure and deterministic: the same bank and responses always produce
/// the same result.
pub fn score_responses(bank: &ItemBank, responses: &[f64]) -> Result<ScaleScores, ScoringError> {
    if responses.len() != bank.len() {
        return Err(ScoringError::LengthMismatch {
            scale: bank.scale,
            expected: bank.len(),
            got: responses.len(),
        });
    }

    let mut sums: BTreeMap<Subscale, (f64, usize)> = BTreeMap::new();
    let mut missing: BTreeMap<Subscale, usize> = BTreeMap::new();
    let mut warnings = Vec::new();

    for (position, (item, &value)) in bank.items.iter().zip(responses).enumerate() {
        // Every subscale of the bank appears in the result, even when
        // all of its responses turn out invalid.
        sums.entry(item.subscale).or_insert((0.0, 0));
        missing.entry(item.subscale).or_insert(0);

        if is_missing(value) {
            *missing.entry(item.subscale).or_insert(0) += 1;
            continue;
        }
        if !item.contains(value) {
            warnings.push(ResponseWarning {
                item_id: item.id.clone(),
                position,
                value,
                scale_min: item.scale_min,
                scale_max: item.scale_max,
                message: format!(
                    "{}: response {} is outside [{}, {}]",
                    item.id, value, item.scale_min, item.scale_max
                ),
            });
            continue;
        }

        let scored = if item.reverse_coded {
            item.scale_min + item.scale_max - value
        } else {
            value
        };
        let entry = sums.entry(item.subscale).or_insert((0.0, 0));
        entry.0 += scored;
        entry.1 += 1;
    }

    let scores = sums
        .into_iter()
        .map(|(subscale, (sum, n_items))| {
            let mean = (n_items > 0).then(|| sum / n_items as f64);
            let score = SubscaleScore {
                subscale,
                mean,
                n_items,
                n_missing: missing.get(&subscale).copied().unwrap_or(0),
            };
            (subscale, score)
        })
        .collect();

    Ok(ScaleScores {
        scale: bank.scale,
        scores,
        warnings,
    })
}
