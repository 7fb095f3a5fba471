//! hilfo-core
//!
//! Pure domain types for the HilFo study: questionnaire and subscale
//! vocabulary, item banks, response conventions, scores, and the study
//! report. No survey-host dependency; this is the shared vocabulary of
//! the HilFo scoring system.

pub mod error;
pub mod models;
