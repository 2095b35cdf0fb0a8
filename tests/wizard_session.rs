use aps_calc::catalog::{self, Domain, CRITERIA};
use aps_calc::scoring::{compute_scores, validate_criteria};
use aps_calc::wizard::{FieldKey, Page, Wizard};

fn key(name: &str) -> FieldKey {
    FieldKey::parse(name).unwrap()
}

#[test]
fn full_session_reaches_classification() {
    let mut wizard = Wizard::new();

    // Refused until one clinical and one laboratory entry box is ticked
    assert_eq!(wizard.on_next(), Page::EntryGate);
    wizard.on_field_changed(key("entry_clinical_0"), true);
    assert_eq!(wizard.on_next(), Page::EntryGate);
    wizard.on_field_changed(key("entry_lab_0"), true);

    assert_eq!(wizard.on_next(), Page::Criteria(Domain::VenousThromboembolism));
    wizard.on_field_changed(key("vte_high_risk"), true);
    wizard.on_field_changed(key("vte_low_risk"), true);

    assert_eq!(wizard.on_next(), Page::Criteria(Domain::ArterialThromboembolism));
    wizard.on_field_changed(key("ate_low_risk"), true);

    for _ in 0..4 {
        wizard.on_next();
    }
    assert_eq!(wizard.page(), Page::Criteria(Domain::LupusAnticoagulant));
    wizard.on_field_changed(key("persistent_lac"), true);

    assert_eq!(wizard.on_next(), Page::Criteria(Domain::AplSerology));
    wizard.on_field_changed(key("high_pos_igg_and"), true);
    wizard.on_field_changed(key("mod_pos_igg"), true);

    assert_eq!(wizard.on_next(), Page::Result);
    assert_eq!(wizard.page_index(), 9);

    let result = wizard.result().unwrap();
    let scores: Vec<u32> = result.domains.iter().map(|d| d.score).collect();
    assert_eq!(scores, vec![3, 4, 0, 0, 0, 0, 5, 7]);
    assert_eq!(result.total_clinical, 7);
    assert_eq!(result.total_lab, 12);
    assert!(result.classified);

    // Next on the result page does nothing
    assert_eq!(wizard.on_next(), Page::Result);
}

#[test]
fn values_survive_back_and_forth() {
    let mut wizard = Wizard::new();
    wizard.on_field_changed(key("entry_clinical_2"), true);
    wizard.on_field_changed(key("entry_lab_1"), true);
    wizard.on_next();
    wizard.on_field_changed(key("vte_low_risk"), true);

    wizard.on_back();
    assert_eq!(wizard.page(), Page::EntryGate);
    assert!(wizard.is_checked(key("entry_clinical_2")));

    wizard.on_next();
    assert!(wizard.is_checked(key("vte_low_risk")));
}

#[test]
fn navigation_is_clamped_at_both_ends() {
    let mut wizard = Wizard::new();
    wizard.on_field_changed(key("entry_clinical_0"), true);
    wizard.on_field_changed(key("entry_lab_2"), true);

    for _ in 0..20 {
        wizard.on_next();
    }
    assert_eq!(wizard.page_index(), 9);

    for _ in 0..20 {
        wizard.on_back();
    }
    assert_eq!(wizard.page_index(), 0);
    assert!(wizard.result().is_none());
}

#[test]
fn unclassified_when_lab_total_too_low() {
    let mut wizard = Wizard::new();
    wizard.on_field_changed(key("entry_clinical_0"), true);
    wizard.on_field_changed(key("entry_lab_0"), true);
    wizard.on_field_changed(key("vte_low_risk"), true);
    wizard.on_field_changed(key("single_lac"), true);
    while wizard.page() != Page::Result {
        wizard.on_next();
    }

    let result = wizard.result().unwrap();
    assert_eq!(result.total_clinical, 3);
    assert_eq!(result.total_lab, 1);
    assert!(!result.classified);
}

#[test]
fn direct_scoring_matches_catalog() {
    assert!(validate_criteria(CRITERIA).is_ok());
    assert!(catalog::lookup("livedo_racemosa").is_ok());
    assert!(catalog::lookup("made_up").is_err());

    let result = compute_scores(["livedo_racemosa", "made_up", "mod_high_igm"]);
    assert_eq!(result.score(Domain::Microvascular), 2);
    assert_eq!(result.score(Domain::AplSerology), 1);
    assert_eq!(result.total_clinical, 2);
    assert_eq!(result.total_lab, 1);
}

#[test]
fn score_result_json_shape() {
    let result = compute_scores(["ate_high_risk", "ate_low_risk"]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_clinical"], 4);
    assert_eq!(json["classified"], false);
    assert_eq!(json["domains"][1]["domain"], 2);
    assert_eq!(json["domains"][1]["credited"], "ate_low_risk");
    assert!(json["domains"][0]["credited"].is_null());
}
