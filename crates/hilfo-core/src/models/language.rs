use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display language for result pages.
///
/// Carried through to the presentation layer untouched; the scoring
/// engine itself never branches on it. It selects which label table and
/// recommendation texts a report is assembled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Language {
    De,
    En,
}
