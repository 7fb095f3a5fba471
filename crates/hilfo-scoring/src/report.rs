//! Report assembly for completed sessions.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use hilfo_core::models::language::Language;
use hilfo_core::models::report::{Interpretation, ScaleReport, StudyReport, SubscaleReport};
use hilfo_core::models::score::{ScaleScores, StudyScores, SubscaleScore};
use hilfo_core::models::subscale::ScaleId;
use hilfo_instruments::get_questionnaire;
use hilfo_instruments::study::StudyDefinition;

use crate::error::ScoringError;
use crate::interpret::InterpretationTable;
use crate::recommend;
use crate::score::score_responses;

/// Scores and interpretations of one questionnaire, ready for assembly.
///
/// Each entry pairs a subscale score with its interpretation, so the two
/// cannot drift apart between interpretation and assembly.
pub struct ScaleEvaluation {
    pub scale: ScaleId,
    pub name: String,
    pub entries: Vec<(SubscaleScore, Interpretation)>,
}

/// Interpret every subscale of one scored questionnaire.
pub fn evaluate_scale(
    name: &str,
    scores: &ScaleScores,
    table: &InterpretationTable,
) -> Result<ScaleEvaluation, ScoringError> {
    let entries = scores
        .scores
        .values()
        .map(|score| Ok((score.clone(), table.interpret(score)?)))
        .collect::<Result<_, ScoringError>>()?;
    Ok(ScaleEvaluation {
        scale: scores.scale,
        name: name.to_string(),
        entries,
    })
}

/// Combine evaluated questionnaires into the immutable study report.
///
/// Pure aggregation: nothing is scored or interpreted here. Subscale
/// display names are resolved for the report's language and the
/// completion instant is stamped.
pub fn assemble_report(
    session: Uuid,
    language: Language,
    evaluations: Vec<ScaleEvaluation>,
    recommendations: Vec<String>,
) -> StudyReport {
    let scales = evaluations
        .into_iter()
        .map(|evaluation| ScaleReport {
            scale: evaluation.scale,
            name: evaluation.name,
            entries: evaluation
                .entries
                .into_iter()
                .map(|(score, interpretation)| SubscaleReport {
                    subscale: score.subscale,
                    name: score.subscale.name(language).to_string(),
                    mean: score.mean,
                    n_items: score.n_items,
                    interpretation,
                })
                .collect(),
        })
        .collect();

    StudyReport {
        session,
        language,
        completed_at: jiff::Timestamp::now(),
        scales,
        recommendations,
    }
}

/// Score, interpret, and assemble a full study session.
///
/// `responses` maps each answered questionnaire to its raw response
/// vector. Questionnaires without an entry (participant drop-out) are
/// omitted from the report and never see a placeholder score; a recorded
/// vector of the wrong length still fails fast.
pub fn evaluate_study(
    study: &StudyDefinition,
    session: Uuid,
    responses: &BTreeMap<ScaleId, Vec<f64>>,
    language: Language,
) -> Result<StudyReport, ScoringError> {
    let table = InterpretationTable::hilfo(language);
    let mut evaluations = Vec::new();
    let mut study_scores = StudyScores::default();

    for scale in &study.questionnaires {
        let Some(values) = responses.get(scale) else {
            debug!(scale = %scale, "no responses recorded, skipping");
            continue;
        };
        let questionnaire =
            get_questionnaire(*scale).ok_or(ScoringError::UnknownQuestionnaire(*scale))?;
        let scores = score_responses(questionnaire.bank(), values)?;
        for warning in &scores.warnings {
            warn!(
                scale = %scale,
                item = %warning.item_id,
                value = warning.value,
                "response outside declared scale"
            );
        }
        debug!(
            scale = %scale,
            subscales = scores.scores.len(),
            warnings = scores.warnings.len(),
            "questionnaire scored"
        );
        evaluations.push(evaluate_scale(questionnaire.name(), &scores, &table)?);
        study_scores.scales.push(scores);
    }

    let rules = recommend::hilfo_rules(language);
    let recommendations = recommend::evaluate_rules(&rules, &study_scores);
    let report = assemble_report(session, language, evaluations, recommendations);
    info!(
        session = %session,
        scales = report.scales.len(),
        recommendations = report.recommendations.len(),
        "study report assembled"
    );
    Ok(report)
}
