/// The study's missing-value sentinel.
///
/// Skipped questions are recorded as `-77` by the survey host; sentinel
/// entries are excluded from subscale means, never averaged as values.
pub const MISSING_CODE: f64 = -77.0;

/// Whether a raw response is the missing-value sentinel.
pub fn is_missing(value: f64) -> bool {
    value == MISSING_CODE
}
