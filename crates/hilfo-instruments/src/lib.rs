//! hilfo-instruments
//!
//! HilFo questionnaire definitions. Pure data, no survey-host
//! dependency. Defines the item banks, reverse-coding patterns, response
//! anchors, and adaptive settings for each questionnaire of the study.

pub mod adaptive;
pub mod error;
pub mod instruments;
pub mod study;

use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::subscale::ScaleId;

use adaptive::AdaptiveConfig;

/// Trait implemented by each HilFo questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Which questionnaire this is.
    fn id(&self) -> ScaleId;

    /// Human-readable name (e.g., "BFI-2-S", "PSQ-20").
    fn name(&self) -> &str;

    /// The ordered item bank; item order is response order.
    fn bank(&self) -> &ItemBank;

    /// Adaptive session settings. `None` for fixed-order questionnaires.
    fn adaptive(&self) -> Option<&AdaptiveConfig> {
        None
    }
}

/// Return all registered questionnaires, in administration order.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(instruments::programming_anxiety::ProgrammingAnxiety),
        Box::new(instruments::bfi2::Bfi2),
        Box::new(instruments::psq20::Psq20),
        Box::new(instruments::mws::Mws),
        Box::new(instruments::statistics::Statistics),
    ]
}

/// Look up a questionnaire by id.
pub fn get_questionnaire(id: ScaleId) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
