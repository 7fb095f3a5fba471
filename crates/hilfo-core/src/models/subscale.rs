use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::language::Language;

/// The questionnaires administered in the HilFo study.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleId {
    /// BFI-2-S personality short form.
    Bfi2,
    /// Perceived Stress Questionnaire, 20-item form.
    Psq20,
    /// MWS study-skills questionnaire.
    Mws,
    /// Attitudes toward statistics.
    Statistics,
    /// Adaptive programming-anxiety scale (2PL item pool).
    ProgrammingAnxiety,
}

impl ScaleId {
    /// Stable identifier, also the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleId::Bfi2 => "bfi2",
            ScaleId::Psq20 => "psq20",
            ScaleId::Mws => "mws",
            ScaleId::Statistics => "statistics",
            ScaleId::ProgrammingAnxiety => "programming_anxiety",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed enumeration of the scored HilFo dimensions.
///
/// Each variant belongs to exactly one questionnaire; bank validation
/// rejects items tagged with a subscale of a different [`ScaleId`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    // BFI-2-S
    Extraversion,
    /// Verträglichkeit.
    Agreeableness,
    /// Gewissenhaftigkeit.
    Conscientiousness,
    /// Negative Emotionalität.
    NegativeEmotionality,
    /// Offenheit.
    OpenMindedness,
    // PSQ-20
    /// Sorgen.
    Worries,
    /// Anspannung.
    Tension,
    /// Freude.
    Joy,
    /// Anforderungen.
    Demands,
    // MWS
    /// Zeitmanagement.
    TimeManagement,
    /// Literaturrecherche.
    LiteratureSearch,
    /// Wissenschaftliches Schreiben.
    AcademicWriting,
    // Einstellungen zur Statistik
    /// Freude an Statistik.
    StatisticsAffect,
    /// Wahrgenommener Nutzen.
    StatisticsValue,
    /// Kompetenzüberzeugung.
    StatisticsSelfEfficacy,
    // Programmierangst
    ProgrammingAnxiety,
}

impl Subscale {
    /// All scored dimensions, grouped by questionnaire.
    pub const ALL: [Subscale; 16] = [
        Subscale::Extraversion,
        Subscale::Agreeableness,
        Subscale::Conscientiousness,
        Subscale::NegativeEmotionality,
        Subscale::OpenMindedness,
        Subscale::Worries,
        Subscale::Tension,
        Subscale::Joy,
        Subscale::Demands,
        Subscale::TimeManagement,
        Subscale::LiteratureSearch,
        Subscale::AcademicWriting,
        Subscale::StatisticsAffect,
        Subscale::StatisticsValue,
        Subscale::StatisticsSelfEfficacy,
        Subscale::ProgrammingAnxiety,
    ];

    /// The questionnaire this subscale belongs to.
    pub fn scale(&self) -> ScaleId {
        match self {
            Subscale::Extraversion
            | Subscale::Agreeableness
            | Subscale::Conscientiousness
            | Subscale::NegativeEmotionality
            | Subscale::OpenMindedness => ScaleId::Bfi2,
            Subscale::Worries | Subscale::Tension | Subscale::Joy | Subscale::Demands => {
                ScaleId::Psq20
            }
            Subscale::TimeManagement
            | Subscale::LiteratureSearch
            | Subscale::AcademicWriting => ScaleId::Mws,
            Subscale::StatisticsAffect
            | Subscale::StatisticsValue
            | Subscale::StatisticsSelfEfficacy => ScaleId::Statistics,
            Subscale::ProgrammingAnxiety => ScaleId::ProgrammingAnxiety,
        }
    }

    /// Stable identifier, also the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subscale::Extraversion => "extraversion",
            Subscale::Agreeableness => "agreeableness",
            Subscale::Conscientiousness => "conscientiousness",
            Subscale::NegativeEmotionality => "negative_emotionality",
            Subscale::OpenMindedness => "open_mindedness",
            Subscale::Worries => "worries",
            Subscale::Tension => "tension",
            Subscale::Joy => "joy",
            Subscale::Demands => "demands",
            Subscale::TimeManagement => "time_management",
            Subscale::LiteratureSearch => "literature_search",
            Subscale::AcademicWriting => "academic_writing",
            Subscale::StatisticsAffect => "statistics_affect",
            Subscale::StatisticsValue => "statistics_value",
            Subscale::StatisticsSelfEfficacy => "statistics_self_efficacy",
            Subscale::ProgrammingAnxiety => "programming_anxiety",
        }
    }

    /// Display name for result pages and charts.
    pub fn name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::De, Subscale::Extraversion) => "Extraversion",
            (Language::De, Subscale::Agreeableness) => "Verträglichkeit",
            (Language::De, Subscale::Conscientiousness) => "Gewissenhaftigkeit",
            (Language::De, Subscale::NegativeEmotionality) => "Negative Emotionalität",
            (Language::De, Subscale::OpenMindedness) => "Offenheit",
            (Language::De, Subscale::Worries) => "Sorgen",
            (Language::De, Subscale::Tension) => "Anspannung",
            (Language::De, Subscale::Joy) => "Freude",
            (Language::De, Subscale::Demands) => "Anforderungen",
            (Language::De, Subscale::TimeManagement) => "Zeitmanagement",
            (Language::De, Subscale::LiteratureSearch) => "Literaturrecherche",
            (Language::De, Subscale::AcademicWriting) => "Wissenschaftliches Schreiben",
            (Language::De, Subscale::StatisticsAffect) => "Freude an Statistik",
            (Language::De, Subscale::StatisticsValue) => "Nutzen von Statistik",
            (Language::De, Subscale::StatisticsSelfEfficacy) => "Statistik-Selbstwirksamkeit",
            (Language::De, Subscale::ProgrammingAnxiety) => "Programmierangst",
            (Language::En, Subscale::Extraversion) => "Extraversion",
            (Language::En, Subscale::Agreeableness) => "Agreeableness",
            (Language::En, Subscale::Conscientiousness) => "Conscientiousness",
            (Language::En, Subscale::NegativeEmotionality) => "Negative Emotionality",
            (Language::En, Subscale::OpenMindedness) => "Open-Mindedness",
            (Language::En, Subscale::Worries) => "Worries",
            (Language::En, Subscale::Tension) => "Tension",
            (Language::En, Subscale::Joy) => "Joy",
            (Language::En, Subscale::Demands) => "Demands",
            (Language::En, Subscale::TimeManagement) => "Time Management",
            (Language::En, Subscale::LiteratureSearch) => "Literature Search",
            (Language::En, Subscale::AcademicWriting) => "Academic Writing",
            (Language::En, Subscale::StatisticsAffect) => "Enjoyment of Statistics",
            (Language::En, Subscale::StatisticsValue) => "Value of Statistics",
            (Language::En, Subscale::StatisticsSelfEfficacy) => "Statistics Self-Efficacy",
            (Language::En, Subscale::ProgrammingAnxiety) => "Programming Anxiety",
        }
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
