use super::domain::Domain;
use serde::Serialize;

/// A single checkable clinical or laboratory finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub key: &'static str,
    pub domain: Domain,
    pub descriptor: &'static str,
    pub points: u32,
}

const fn criterion(
    key: &'static str,
    domain: Domain,
    descriptor: &'static str,
    points: u32,
) -> Criterion {
    Criterion {
        key,
        domain,
        descriptor,
        points,
    }
}

/// The additive criteria, in declaration order.
pub static CRITERIA: &[Criterion] = &[
    criterion(
        "16_week_fetal_death",
        Domain::Obstetric,
        "Fetal death (16w – 33w 6d) in the absence of pre-eclampsia (PEC) with severe features or placental insufficiency with severe features",
        1,
    ),
    criterion(
        "3_consecutive_losses",
        Domain::Obstetric,
        "3 or more consecutive pre-fetal (<10w) and/or early fetal (10w – 15w 6d) deaths",
        1,
    ),
    criterion(
        "adrenal_hemorrhage_path",
        Domain::Microvascular,
        "Adrenal hemorrhage (imaging or pathology)",
        5,
    ),
    criterion(
        "apl_nephropathy_exam",
        Domain::Microvascular,
        "Acute/chronic aPL-nephropathy (exam or lab)",
        2,
    ),
    criterion(
        "apl_nephropathy_path",
        Domain::Microvascular,
        "Acute/chronic aPL-nephropathy (pathology)",
        5,
    ),
    criterion(
        "ate_high_risk",
        Domain::ArterialThromboembolism,
        "ATE with a high risk CVD profile",
        2,
    ),
    criterion(
        "ate_low_risk",
        Domain::ArterialThromboembolism,
        "ATE without a high risk CVD profile",
        4,
    ),
    criterion(
        "high_pos_igg_and",
        Domain::AplSerology,
        "High positive IgG (aCL AND aβ2GPI)",
        7,
    ),
    criterion(
        "high_pos_igg_or",
        Domain::AplSerology,
        "High positive IgG (aCL OR aβ2GPI)",
        5,
    ),
    criterion(
        "livedo_racemosa",
        Domain::Microvascular,
        "Livedo racemosa (exam)",
        2,
    ),
    criterion(
        "livedo_vasculopathy_exam",
        Domain::Microvascular,
        "Livedoid vasculopathy lesions (exam)",
        2,
    ),
    criterion(
        "livedo_vasculopathy_path",
        Domain::Microvascular,
        "Livedoid vasculopathy (pathology)",
        5,
    ),
    criterion(
        "mod_high_igm",
        Domain::AplSerology,
        "Moderate or high positive IgM (aCL and/or aβ2GPI)",
        1,
    ),
    criterion(
        "mod_pos_igg",
        Domain::AplSerology,
        "Moderate positive IgG (aCL and/or aβ2GPI)",
        4,
    ),
    criterion(
        "myocardial_path",
        Domain::Microvascular,
        "Myocardial disease (imaging or pathology)",
        5,
    ),
    criterion(
        "persistent_lac",
        Domain::LupusAnticoagulant,
        "Positive LAC (persistent)",
        5,
    ),
    criterion(
        "pre_eclampsia_and_pi",
        Domain::Obstetric,
        "Pre-eclampsia with severe features (<34w) AND placental insufficiency with severe features (<34w) with/without fetal death",
        4,
    ),
    criterion(
        "pre_eclampsia_or_pi",
        Domain::Obstetric,
        "Pre-eclampsia with severe features (<34w) OR placental insufficiency with severe features (<34w) with/without fetal death",
        3,
    ),
    criterion(
        "pulm_hemorrhage_path",
        Domain::Microvascular,
        "Pulmonary hemorrhage (BAL or pathology)",
        5,
    ),
    criterion(
        "pulm_hemorrhage_symptoms",
        Domain::Microvascular,
        "Pulmonary hemorrhage (symptoms and imaging)",
        2,
    ),
    criterion(
        "single_lac",
        Domain::LupusAnticoagulant,
        "Positive LAC (single – one time)",
        1,
    ),
    criterion(
        "thrombocytopenia",
        Domain::Hematology,
        "Thrombocytopenia (lowest 20-130 x10^9/L)",
        2,
    ),
    criterion(
        "valve_thickening",
        Domain::CardiacValve,
        "Thickening",
        2,
    ),
    criterion(
        "valve_vegetation",
        Domain::CardiacValve,
        "Vegetation",
        4,
    ),
    criterion(
        "vte_high_risk",
        Domain::VenousThromboembolism,
        "VTE with a high risk profile",
        1,
    ),
    criterion(
        "vte_low_risk",
        Domain::VenousThromboembolism,
        "VTE without a high risk profile",
        3,
    ),
];
