use hilfo_core::models::subscale::ScaleId;
use hilfo_instruments::adaptive::AdaptiveConfig;
use hilfo_instruments::error::InstrumentError;
use hilfo_instruments::get_questionnaire;

fn config() -> AdaptiveConfig {
    AdaptiveConfig {
        min_items: 4,
        max_items: 8,
        se_threshold: 0.4,
        start_items: vec!["pa_01".to_string(), "pa_06".to_string()],
    }
}

#[test]
fn shipped_configuration_is_valid() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let shipped = questionnaire.adaptive().expect("adaptive questionnaire");
    assert!(shipped.validate(questionnaire.bank()).is_ok());
    assert_eq!(shipped.min_items, 4);
    assert_eq!(shipped.max_items, 8);
    assert_eq!(shipped.start_items.len(), 2);
}

#[test]
fn every_pool_item_has_positive_discrimination() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    for item in &questionnaire.bank().items {
        let params = item
            .irt
            .unwrap_or_else(|| panic!("{} lacks 2PL parameters", item.id));
        assert!(params.discrimination > 0.0, "{}", item.id);
    }
}

#[test]
fn zero_min_items_is_rejected() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.min_items = 0;
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}

#[test]
fn inverted_item_window_is_rejected() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.min_items = 9;
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}

#[test]
fn max_items_cannot_exceed_the_pool() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.max_items = 11;
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}

#[test]
fn non_positive_se_threshold_is_rejected() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.se_threshold = 0.0;
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}

#[test]
fn repeated_start_item_is_rejected() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.start_items = vec!["pa_01".to_string(), "pa_01".to_string()];
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}

#[test]
fn unknown_start_item_is_rejected() {
    let questionnaire = get_questionnaire(ScaleId::ProgrammingAnxiety).expect("registered");
    let mut bad = config();
    bad.start_items.push("pa_99".to_string());
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::UnknownStartItem { item_id, .. }) if item_id == "pa_99"
    ));
}

#[test]
fn fixed_bank_cannot_be_administered_adaptively() {
    // The MWS bank carries no 2PL parameters.
    let questionnaire = get_questionnaire(ScaleId::Mws).expect("registered");
    let bad = AdaptiveConfig {
        min_items: 2,
        max_items: 6,
        se_threshold: 0.4,
        start_items: Vec::new(),
    };
    assert!(matches!(
        bad.validate(questionnaire.bank()),
        Err(InstrumentError::InvalidAdaptiveConfig { .. })
    ));
}
