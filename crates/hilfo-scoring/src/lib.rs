//! hilfo-scoring
//!
//! Scoring pipeline for completed HilFo sessions: reverse-coding and
//! per-subscale aggregation, threshold interpretation, recommendation
//! rules, and assembly of the study report handed to the presentation
//! layer.

pub mod error;
pub mod interpret;
pub mod recommend;
pub mod report;
pub mod score;
