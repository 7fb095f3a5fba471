//! Threshold interpretation of subscale means.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hilfo_core::models::language::Language;
use hilfo_core::models::report::Interpretation;
use hilfo_core::models::score::{ScaleScores, SubscaleScore};
use hilfo_core::models::subscale::Subscale;

use crate::error::ScoringError;

/// Threshold rule for one subscale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationRule {
    pub threshold: f64,
    pub high_label: String,
    pub low_label: String,
}

impl InterpretationRule {
    /// The label for a defined mean. The boundary counts as high:
    /// `mean >= threshold` selects `high_label`.
    pub fn classify(&self, mean: f64) -> &str {
        if mean >= self.threshold {
            &self.high_label
        } else {
            &self.low_label
        }
    }
}

/// Per-subscale interpretation rules.
///
/// Thresholds and labels are study configuration, not engine logic. The
/// built-in tables cover every HilFo subscale in both report languages;
/// custom tables load from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretationTable {
    rules: BTreeMap<Subscale, InterpretationRule>,
}

impl InterpretationTable {
    pub fn new(rules: BTreeMap<Subscale, InterpretationRule>) -> Self {
        Self { rules }
    }

    /// Load a table from its JSON form, a map from subscale to rule.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rule(&self, subscale: Subscale) -> Option<&InterpretationRule> {
        self.rules.get(&subscale)
    }

    /// Interpret one subscale score.
    ///
    /// An undefined mean yields [`Interpretation::InsufficientData`]; a
    /// subscale without a configured rule is an error, not a silent skip.
    pub fn interpret(&self, score: &SubscaleScore) -> Result<Interpretation, ScoringError> {
        let rule = self
            .rule(score.subscale)
            .ok_or(ScoringError::MissingRule(score.subscale))?;
        Ok(match score.mean {
            Some(mean) => Interpretation::Scored {
                label: rule.classify(mean).to_string(),
            },
            None => Interpretation::InsufficientData,
        })
    }

    /// Interpret every subscale of one scored questionnaire.
    pub fn interpret_scale(
        &self,
        scores: &ScaleScores,
    ) -> Result<BTreeMap<Subscale, Interpretation>, ScoringError> {
        scores
            .scores
            .values()
            .map(|score| Ok((score.subscale, self.interpret(score)?)))
            .collect()
    }

    /// The built-in HilFo rules, covering all sixteen subscales.
    ///
    /// Midpoint thresholds: 3.5 on the 1-5 questionnaires, 2.5 on the
    /// 1-4 PSQ-20.
    pub fn hilfo(language: Language) -> Self {
        let rules = match language {
            Language::De => &HILFO_DE,
            Language::En => &HILFO_EN,
        };
        Self {
            rules: rules
                .iter()
                .map(|(subscale, threshold, high, low)| {
                    let rule = InterpretationRule {
                        threshold: *threshold,
                        high_label: (*high).to_string(),
                        low_label: (*low).to_string(),
                    };
                    (*subscale, rule)
                })
                .collect(),
        }
    }
}

const HILFO_DE: [(Subscale, f64, &str, &str); 16] = [
    (
        Subscale::Extraversion,
        3.5,
        "gesellig und energiegeladen",
        "zurückhaltend und ruhig",
    ),
    (
        Subscale::Agreeableness,
        3.5,
        "mitfühlend und kooperativ",
        "sachlich und durchsetzungsorientiert",
    ),
    (
        Subscale::Conscientiousness,
        3.5,
        "organisiert und zielstrebig",
        "spontan und flexibel",
    ),
    (
        Subscale::NegativeEmotionality,
        3.5,
        "emotional empfindsam",
        "emotional stabil",
    ),
    (
        Subscale::OpenMindedness,
        3.5,
        "neugierig und ideenreich",
        "praktisch und routineorientiert",
    ),
    (Subscale::Worries, 2.5, "häufige Sorgen", "seltene Sorgen"),
    (
        Subscale::Tension,
        2.5,
        "erhöhte Anspannung",
        "geringe Anspannung",
    ),
    (
        Subscale::Joy,
        2.5,
        "viel Freude im Alltag",
        "wenig Freude im Alltag",
    ),
    (
        Subscale::Demands,
        2.5,
        "hohe wahrgenommene Anforderungen",
        "geringe wahrgenommene Anforderungen",
    ),
    (
        Subscale::TimeManagement,
        3.5,
        "strukturierte Zeitplanung",
        "ausbaufähige Zeitplanung",
    ),
    (
        Subscale::LiteratureSearch,
        3.5,
        "sichere Literaturrecherche",
        "unsichere Literaturrecherche",
    ),
    (
        Subscale::AcademicWriting,
        3.5,
        "sicheres wissenschaftliches Schreiben",
        "unsicheres wissenschaftliches Schreiben",
    ),
    (
        Subscale::StatisticsAffect,
        3.5,
        "Freude an Statistik",
        "wenig Freude an Statistik",
    ),
    (
        Subscale::StatisticsValue,
        3.5,
        "hoher wahrgenommener Nutzen",
        "geringer wahrgenommener Nutzen",
    ),
    (
        Subscale::StatisticsSelfEfficacy,
        3.5,
        "hohe Statistik-Selbstwirksamkeit",
        "geringe Statistik-Selbstwirksamkeit",
    ),
    (
        Subscale::ProgrammingAnxiety,
        3.5,
        "erhöhte Programmierangst",
        "geringe Programmierangst",
    ),
];

const HILFO_EN: [(Subscale, f64, &str, &str); 16] = [
    (
        Subscale::Extraversion,
        3.5,
        "sociable and energetic",
        "reserved and quiet",
    ),
    (
        Subscale::Agreeableness,
        3.5,
        "compassionate and cooperative",
        "matter-of-fact and competitive",
    ),
    (
        Subscale::Conscientiousness,
        3.5,
        "organized and purposeful",
        "spontaneous and flexible",
    ),
    (
        Subscale::NegativeEmotionality,
        3.5,
        "emotionally sensitive",
        "emotionally stable",
    ),
    (
        Subscale::OpenMindedness,
        3.5,
        "curious and inventive",
        "practical and routine-oriented",
    ),
    (Subscale::Worries, 2.5, "frequent worries", "infrequent worries"),
    (Subscale::Tension, 2.5, "elevated tension", "low tension"),
    (Subscale::Joy, 2.5, "high everyday joy", "low everyday joy"),
    (
        Subscale::Demands,
        2.5,
        "high perceived demands",
        "low perceived demands",
    ),
    (
        Subscale::TimeManagement,
        3.5,
        "structured time management",
        "room to grow in time management",
    ),
    (
        Subscale::LiteratureSearch,
        3.5,
        "confident literature search",
        "unconfident literature search",
    ),
    (
        Subscale::AcademicWriting,
        3.5,
        "confident academic writing",
        "unconfident academic writing",
    ),
    (
        Subscale::StatisticsAffect,
        3.5,
        "enjoys statistics",
        "little enjoyment of statistics",
    ),
    (
        Subscale::StatisticsValue,
        3.5,
        "high perceived value",
        "low perceived value",
    ),
    (
        Subscale::StatisticsSelfEfficacy,
        3.5,
        "high statistics self-efficacy",
        "low statistics self-efficacy",
    ),
    (
        Subscale::ProgrammingAnxiety,
        3.5,
        "elevated programming anxiety",
        "low programming anxiety",
    ),
];
