//! Entry criteria. These gate access to the additive criteria and never
//! contribute points.

pub static ENTRY_CLINICAL_CRITERIA: [&str; 6] = [
    "Venous thromboembolism",
    "Arterial thromboembolism",
    "Microvascular (e.g. livedo racemosa, pulmonary hemorrhage, aPL nephropathy, adrenal hemorrhage...)",
    "Obstetric morbidity (e.g. 3 or more consecutive early fetal losses...)",
    "Cardiac valve thickening or vegetation",
    "Thrombocytopenia",
];

pub static ENTRY_LAB_CRITERIA: [&str; 3] = [
    "Lupus anticoagulant",
    "Anti-cardiolipin (IgG or IgM) at moderate-high titre",
    "Anti-β2-glycoprotein I (IgG or IgM) at moderate-high titre",
];
