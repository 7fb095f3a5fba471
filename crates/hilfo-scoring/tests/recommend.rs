use std::collections::BTreeMap;

use hilfo_core::models::language::Language;
use hilfo_core::models::score::{ScaleScores, StudyScores, SubscaleScore};
use hilfo_core::models::subscale::Subscale;
use hilfo_scoring::recommend::{evaluate_rules, hilfo_rules, RecommendationRule};

fn scores_with(means: &[(Subscale, f64)]) -> StudyScores {
    let mut study = StudyScores::default();
    for &(subscale, mean) in means {
        let mut scores = BTreeMap::new();
        scores.insert(
            subscale,
            SubscaleScore {
                subscale,
                mean: Some(mean),
                n_items: 4,
                n_missing: 0,
            },
        );
        study.scales.push(ScaleScores {
            scale: subscale.scale(),
            scores,
            warnings: Vec::new(),
        });
    }
    study
}

#[test]
fn all_matching_rules_fire_in_list_order() {
    let rules = hilfo_rules(Language::De);
    let scores = scores_with(&[
        (Subscale::Tension, 3.5),
        (Subscale::ProgrammingAnxiety, 4.0),
        (Subscale::Joy, 3.5),
    ]);
    let texts = evaluate_rules(&rules, &scores);
    assert_eq!(texts.len(), 3);
    assert!(texts[0].contains("Stresserleben"));
    assert!(texts[1].contains("Programmierangst"));
    assert!(texts[2].contains("Freude"));
}

#[test]
fn rules_fire_independently_of_each_other() {
    let rules = hilfo_rules(Language::De);
    let texts = evaluate_rules(&rules, &scores_with(&[(Subscale::TimeManagement, 2.0)]));
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Zeitmanagement"));
}

#[test]
fn unscored_subscales_trigger_nothing() {
    let rules = hilfo_rules(Language::En);
    assert!(evaluate_rules(&rules, &StudyScores::default()).is_empty());
}

#[test]
fn stress_rule_reads_either_psq_subscale() {
    let rules = hilfo_rules(Language::En);
    for subscale in [Subscale::Worries, Subscale::Tension] {
        let texts = evaluate_rules(&rules, &scores_with(&[(subscale, 3.0)]));
        assert_eq!(texts.len(), 1, "{subscale}");
        assert!(texts[0].contains("stress"), "{subscale}");
    }
}

#[test]
fn high_thresholds_are_inclusive_low_thresholds_exclusive() {
    let rules = hilfo_rules(Language::En);
    // Exactly 3.5 fires the programming rule.
    let fired = evaluate_rules(
        &rules,
        &scores_with(&[(Subscale::ProgrammingAnxiety, 3.5)]),
    );
    assert_eq!(fired.len(), 1);
    // Exactly 2.5 is not "below 2.5" and fires nothing.
    let quiet = evaluate_rules(&rules, &scores_with(&[(Subscale::TimeManagement, 2.5)]));
    assert!(quiet.is_empty());
}

#[test]
fn custom_rule_lists_keep_their_order() {
    let rules = vec![
        RecommendationRule::new("zuerst", |scores: &StudyScores| {
            scores.mean(Subscale::Joy).is_some()
        }),
        RecommendationRule::new("danach", |scores: &StudyScores| {
            scores.mean(Subscale::Joy).is_some()
        }),
    ];
    let texts = evaluate_rules(&rules, &scores_with(&[(Subscale::Joy, 3.0)]));
    assert_eq!(texts, vec!["zuerst".to_string(), "danach".to_string()]);
}

#[test]
fn rule_texts_follow_the_language() {
    let scores = scores_with(&[(Subscale::StatisticsSelfEfficacy, 1.5)]);
    let german = evaluate_rules(&hilfo_rules(Language::De), &scores);
    assert_eq!(german.len(), 1);
    assert!(german[0].contains("Statistik-Tutorium"));

    let english = evaluate_rules(&hilfo_rules(Language::En), &scores);
    assert_eq!(english.len(), 1);
    assert!(english[0].contains("statistics tutorial"));
}
