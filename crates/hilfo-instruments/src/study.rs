//! Study definition: which questionnaires run in which order, plus the
//! demographic page. Validated once at process start.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hilfo_core::models::subscale::ScaleId;

use crate::error::InstrumentError;
use crate::get_questionnaire;

/// An unscored demographic question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicField {
    pub id: String,
    pub prompt: String,
    pub kind: DemographicKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DemographicKind {
    FreeText,
    Number { min: u32, max: u32 },
    SingleChoice { options: Vec<String> },
}

/// One configured study: administration order and demographics.
///
/// Page flow, consent pages, and rendering belong to the survey host;
/// this is the host-facing declaration of what the study contains.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyDefinition {
    pub id: String,
    pub name: String,
    /// Questionnaires in administration order.
    pub questionnaires: Vec<ScaleId>,
    pub demographics: Vec<DemographicField>,
}

impl StudyDefinition {
    /// Check the study against the registered questionnaires.
    ///
    /// Every questionnaire must be registered exactly once, its bank must
    /// satisfy the bank invariants, adaptive configurations must match
    /// their banks, and demographic fields must be well-formed.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (idx, scale) in self.questionnaires.iter().enumerate() {
            if self.questionnaires[..idx].contains(scale) {
                return Err(InstrumentError::DuplicateQuestionnaire(*scale));
            }
            let questionnaire = get_questionnaire(*scale)
                .ok_or(InstrumentError::UnknownQuestionnaire(*scale))?;
            questionnaire.bank().validate()?;
            if let Some(config) = questionnaire.adaptive() {
                config.validate(questionnaire.bank())?;
            }
        }

        for (idx, field) in self.demographics.iter().enumerate() {
            if self.demographics[..idx].iter().any(|f| f.id == field.id) {
                return Err(InstrumentError::DuplicateDemographicId(field.id.clone()));
            }
            match &field.kind {
                DemographicKind::FreeText => {}
                DemographicKind::Number { min, max } => {
                    if min >= max {
                        return Err(InstrumentError::NumberRange {
                            id: field.id.clone(),
                            min: *min,
                            max: *max,
                        });
                    }
                }
                DemographicKind::SingleChoice { options } => {
                    if options.is_empty() {
                        return Err(InstrumentError::EmptyOptions(field.id.clone()));
                    }
                }
            }
        }

        Ok(())
    }

    /// Serialize for the survey host.
    pub fn to_json(&self) -> Result<String, InstrumentError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The HilFo study as fielded: demographics first, then the programming
/// anxiety block ahead of the BFI block, then stress, study skills, and
/// statistics attitudes.
pub fn hilfo() -> StudyDefinition {
    StudyDefinition {
        id: "hilfo_ws2526".to_string(),
        name: "HilFo-Studie".to_string(),
        questionnaires: vec![
            ScaleId::ProgrammingAnxiety,
            ScaleId::Bfi2,
            ScaleId::Psq20,
            ScaleId::Mws,
            ScaleId::Statistics,
        ],
        demographics: vec![
            DemographicField {
                id: "age".to_string(),
                prompt: "Wie alt sind Sie?".to_string(),
                kind: DemographicKind::Number { min: 16, max: 99 },
            },
            DemographicField {
                id: "gender".to_string(),
                prompt: "Welches Geschlecht haben Sie?".to_string(),
                kind: DemographicKind::SingleChoice {
                    options: vec![
                        "weiblich".to_string(),
                        "männlich".to_string(),
                        "divers".to_string(),
                        "keine Angabe".to_string(),
                    ],
                },
            },
            DemographicField {
                id: "degree".to_string(),
                prompt: "In welchem Studiengang sind Sie eingeschrieben?".to_string(),
                kind: DemographicKind::SingleChoice {
                    options: vec![
                        "Psychologie (B.Sc.)".to_string(),
                        "Psychologie (M.Sc.)".to_string(),
                        "anderer Studiengang".to_string(),
                    ],
                },
            },
            DemographicField {
                id: "semester".to_string(),
                prompt: "In welchem Fachsemester studieren Sie?".to_string(),
                kind: DemographicKind::Number { min: 1, max: 30 },
            },
            DemographicField {
                id: "statistics_experience".to_string(),
                prompt: "Haben Sie bereits eine Statistikveranstaltung besucht?".to_string(),
                kind: DemographicKind::SingleChoice {
                    options: vec!["ja".to_string(), "nein".to_string()],
                },
            },
        ],
    }
}
