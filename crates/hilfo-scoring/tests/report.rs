use std::collections::BTreeMap;

use uuid::Uuid;

use hilfo_core::models::language::Language;
use hilfo_core::models::report::Interpretation;
use hilfo_core::models::response::MISSING_CODE;
use hilfo_core::models::subscale::{ScaleId, Subscale};
use hilfo_instruments::{get_questionnaire, study};
use hilfo_scoring::error::ScoringError;
use hilfo_scoring::interpret::InterpretationTable;
use hilfo_scoring::report::{assemble_report, evaluate_scale, evaluate_study};
use hilfo_scoring::score::score_responses;

fn uniform(scale: ScaleId, value: f64) -> Vec<f64> {
    let questionnaire = get_questionnaire(scale).expect("registered");
    vec![value; questionnaire.bank().len()]
}

fn full_responses(value: f64) -> BTreeMap<ScaleId, Vec<f64>> {
    study::hilfo()
        .questionnaires
        .iter()
        .map(|scale| (*scale, uniform(*scale, value)))
        .collect()
}

#[test]
fn full_session_produces_a_complete_report() {
    let study = study::hilfo();
    let session = Uuid::new_v4();
    let report = evaluate_study(&study, session, &full_responses(3.0), Language::De)
        .expect("aligned vectors");

    assert_eq!(report.session, session);
    assert_eq!(report.language, Language::De);
    assert_eq!(report.scales.len(), 5);
    let subscale_count: usize = report.scales.iter().map(|s| s.entries.len()).sum();
    assert_eq!(subscale_count, 16);
    for scale in &report.scales {
        for entry in &scale.entries {
            assert!(entry.mean.is_some(), "{}", entry.subscale);
            assert!(
                matches!(entry.interpretation, Interpretation::Scored { .. }),
                "{}",
                entry.subscale
            );
        }
    }
}

#[test]
fn report_order_follows_administration_order() {
    let study = study::hilfo();
    let report = evaluate_study(&study, Uuid::new_v4(), &full_responses(2.0), Language::De)
        .expect("aligned vectors");
    let order: Vec<ScaleId> = report.scales.iter().map(|s| s.scale).collect();
    assert_eq!(order, study.questionnaires);
}

#[test]
fn dropout_omits_unanswered_questionnaires() {
    let study = study::hilfo();
    let mut responses = BTreeMap::new();
    responses.insert(
        ScaleId::ProgrammingAnxiety,
        uniform(ScaleId::ProgrammingAnxiety, 2.0),
    );
    responses.insert(ScaleId::Bfi2, uniform(ScaleId::Bfi2, 4.0));
    let report = evaluate_study(&study, Uuid::new_v4(), &responses, Language::De)
        .expect("aligned vectors");

    assert_eq!(report.scales.len(), 2);
    assert!(report.scales.iter().all(|s| s.scale != ScaleId::Psq20));
    assert!(report.scales.iter().all(|s| s.scale != ScaleId::Mws));
}

#[test]
fn wrong_length_vector_fails_the_whole_evaluation() {
    let study = study::hilfo();
    let mut responses = BTreeMap::new();
    responses.insert(ScaleId::Bfi2, vec![3.0; 7]);
    let err = evaluate_study(&study, Uuid::new_v4(), &responses, Language::De)
        .expect_err("short vector");
    assert!(matches!(
        err,
        ScoringError::LengthMismatch {
            scale: ScaleId::Bfi2,
            expected: 30,
            got: 7
        }
    ));
}

#[test]
fn skipped_subscale_is_reported_not_dropped() {
    let study = study::hilfo();
    let questionnaire = get_questionnaire(ScaleId::Psq20).expect("registered");
    let responses: Vec<f64> = questionnaire
        .bank()
        .items
        .iter()
        .map(|item| {
            if item.subscale == Subscale::Joy {
                MISSING_CODE
            } else {
                2.0
            }
        })
        .collect();
    let mut map = BTreeMap::new();
    map.insert(ScaleId::Psq20, responses);

    let report =
        evaluate_study(&study, Uuid::new_v4(), &map, Language::En).expect("aligned vector");
    let psq = report
        .scales
        .iter()
        .find(|s| s.scale == ScaleId::Psq20)
        .expect("scored");
    let joy = psq
        .entries
        .iter()
        .find(|e| e.subscale == Subscale::Joy)
        .expect("present in the report");
    assert_eq!(joy.mean, None);
    assert_eq!(joy.n_items, 0);
    assert_eq!(joy.interpretation, Interpretation::InsufficientData);
}

#[test]
fn recommendations_reflect_scored_thresholds() {
    let study = study::hilfo();
    let mut stressed = BTreeMap::new();
    stressed.insert(ScaleId::Psq20, uniform(ScaleId::Psq20, 4.0));
    let report = evaluate_study(&study, Uuid::new_v4(), &stressed, Language::De)
        .expect("aligned vector");
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("Stresserleben")));

    let mut calm = BTreeMap::new();
    calm.insert(ScaleId::Psq20, uniform(ScaleId::Psq20, 1.0));
    let calm_report =
        evaluate_study(&study, Uuid::new_v4(), &calm, Language::De).expect("aligned vector");
    assert!(calm_report.recommendations.is_empty());
}

#[test]
fn recommendations_follow_the_report_language() {
    let study = study::hilfo();
    let mut responses = BTreeMap::new();
    responses.insert(
        ScaleId::ProgrammingAnxiety,
        uniform(ScaleId::ProgrammingAnxiety, 5.0),
    );
    let report = evaluate_study(&study, Uuid::new_v4(), &responses, Language::En)
        .expect("aligned vector");
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("programming anxiety")));
}

#[test]
fn assembly_resolves_display_names() {
    let questionnaire = get_questionnaire(ScaleId::Mws).expect("registered");
    let scores =
        score_responses(questionnaire.bank(), &uniform(ScaleId::Mws, 4.0)).expect("aligned");
    let table = InterpretationTable::hilfo(Language::De);
    let evaluation =
        evaluate_scale(questionnaire.name(), &scores, &table).expect("rules cover the bank");
    let report = assemble_report(Uuid::new_v4(), Language::De, vec![evaluation], Vec::new());

    assert_eq!(report.scales.len(), 1);
    assert_eq!(report.scales[0].name, "MWS Studierkompetenzen");
    assert!(report.scales[0]
        .entries
        .iter()
        .any(|e| e.name == "Zeitmanagement"));
    assert!(report.recommendations.is_empty());
}

#[test]
fn report_serializes_for_the_result_page() {
    let study = study::hilfo();
    let report = evaluate_study(&study, Uuid::new_v4(), &full_responses(3.0), Language::De)
        .expect("aligned vectors");
    let json = report.to_json().expect("report should serialize");
    assert!(json.contains("\"session\""));
    assert!(json.contains("\"completed_at\""));
    assert!(json.contains("\"scales\""));
    assert!(json.contains("\"recommendations\""));
}
