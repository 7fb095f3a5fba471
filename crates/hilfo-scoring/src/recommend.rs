//! Recommendation rules evaluated over a session's scores.

use hilfo_core::models::language::Language;
use hilfo_core::models::score::StudyScores;
use hilfo_core::models::subscale::Subscale;

/// One entry of the ordered recommendation list.
///
/// Rules are independent of each other: every rule whose predicate
/// matches contributes its text, in list order. A rule whose subscale
/// was never scored simply does not fire.
pub struct RecommendationRule {
    pub text: String,
    predicate: Box<dyn Fn(&StudyScores) -> bool + Send + Sync>,
}

impl RecommendationRule {
    pub fn new(
        text: impl Into<String>,
        predicate: impl Fn(&StudyScores) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn applies(&self, scores: &StudyScores) -> bool {
        (self.predicate)(scores)
    }
}

/// Evaluate `rules` in order and collect the texts of all that match.
pub fn evaluate_rules(rules: &[RecommendationRule], scores: &StudyScores) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.applies(scores))
        .map(|rule| rule.text.clone())
        .collect()
}

/// The HilFo result-page rules.
///
/// Thresholds refer to scored means, reverse-coding already applied.
/// The stress rule reads the 1-4 PSQ-20 subscales, the others the 1-5
/// questionnaires.
pub fn hilfo_rules(language: Language) -> Vec<RecommendationRule> {
    let texts: [&str; 5] = match language {
        Language::De => [
            "Ihre Angaben deuten auf ein erhöhtes Stresserleben hin. Die psychosoziale \
             Beratung des Studierendenwerks unterstützt Sie vertraulich und kostenfrei.",
            "Ihre Programmierangst ist erhöht. Das begleitete R-Tutorium bietet einen \
             geschützten Rahmen, um Schritt für Schritt praktische Sicherheit aufzubauen.",
            "Ihr Zeitmanagement zeigt Entwicklungspotenzial. Der Workshop zur \
             Studienorganisation der Zentralen Studienberatung vermittelt konkrete Techniken.",
            "Ihre Statistik-Selbstwirksamkeit ist niedrig. Besuchen Sie das \
             Statistik-Tutorium; regelmäßiges Üben in kleinen Gruppen hilft am meisten.",
            "Sie berichten viel Freude im Alltag. Das ist eine wichtige Ressource, gerade \
             in arbeitsreichen Semesterphasen.",
        ],
        Language::En => [
            "Your answers point to elevated stress. The student services' psychosocial \
             counselling team supports you confidentially and free of charge.",
            "Your programming anxiety is elevated. The guided R tutorial offers a \
             low-pressure setting to build hands-on confidence step by step.",
            "Your time management shows room to grow. The study-organisation workshop of \
             the central student advisory service teaches concrete techniques.",
            "Your statistics self-efficacy is low. Consider the statistics tutorial; \
             regular practice in small groups helps most.",
            "You report high everyday joy. That is an important resource, especially \
             during demanding phases of the semester.",
        ],
    };
    let [stress, programming, time, statistics, joy] = texts.map(String::from);

    vec![
        RecommendationRule::new(stress, |scores| {
            scores.mean(Subscale::Worries).is_some_and(|m| m >= 3.0)
                || scores.mean(Subscale::Tension).is_some_and(|m| m >= 3.0)
        }),
        RecommendationRule::new(programming, |scores| {
            scores
                .mean(Subscale::ProgrammingAnxiety)
                .is_some_and(|m| m >= 3.5)
        }),
        RecommendationRule::new(time, |scores| {
            scores
                .mean(Subscale::TimeManagement)
                .is_some_and(|m| m < 2.5)
        }),
        RecommendationRule::new(statistics, |scores| {
            scores
                .mean(Subscale::StatisticsSelfEfficacy)
                .is_some_and(|m| m < 2.5)
        }),
        RecommendationRule::new(joy, |scores| {
            scores.mean(Subscale::Joy).is_some_and(|m| m >= 3.0)
        }),
    ]
}
