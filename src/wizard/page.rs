use crate::catalog::{self, Domain, ENTRY_CLINICAL_CRITERIA, ENTRY_LAB_CRITERIA};

use super::store::FieldKey;

/// A wizard page. Pages are visited strictly in `Page::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    EntryGate,
    Criteria(Domain),
    Result,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::EntryGate,
        Page::Criteria(Domain::VenousThromboembolism),
        Page::Criteria(Domain::ArterialThromboembolism),
        Page::Criteria(Domain::Microvascular),
        Page::Criteria(Domain::Obstetric),
        Page::Criteria(Domain::CardiacValve),
        Page::Criteria(Domain::Hematology),
        Page::Criteria(Domain::LupusAnticoagulant),
        Page::Criteria(Domain::AplSerology),
        Page::Result,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Page::EntryGate => 0,
            Page::Criteria(domain) => domain.index() + 1,
            Page::Result => Self::COUNT - 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    /// True for the final criteria page (D8), whose forward action computes the result
    pub fn is_last_criteria_page(self) -> bool {
        self == Page::Criteria(Domain::AplSerology)
    }

    /// Label of the forward action; `None` where there is no way forward
    pub fn forward_label(self) -> Option<&'static str> {
        match self {
            Page::EntryGate => Some("Apply additive criteria"),
            Page::Result => None,
            page if page.is_last_criteria_page() => Some("Calculate score"),
            Page::Criteria(_) => Some("Next"),
        }
    }

    /// Short name for tab strips
    pub fn tab_label(self) -> String {
        match self {
            Page::EntryGate => "Entry".to_string(),
            Page::Criteria(domain) => domain.to_string(),
            Page::Result => "Score".to_string(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::EntryGate => "Entry criteria",
            Page::Criteria(domain) if domain.is_clinical() => "Additive clinical criteria",
            Page::Criteria(_) => "Additive laboratory criteria",
            Page::Result => "Total score",
        }
    }

    pub fn view(self) -> PageView {
        match self {
            Page::EntryGate => entry_view(),
            Page::Criteria(domain) => criteria_view(domain),
            Page::Result => PageView {
                page: self,
                heading: "Classified as APS for research purposes if there are at least 3 points \
                          from clinical domains AND at least 3 points from laboratory domains",
                toggles: Vec::new(),
                notes: Vec::new(),
                caption: Some("Copy and paste into your EMR"),
            },
        }
    }
}

/// A checkbox shown on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub key: FieldKey,
    pub descriptor: &'static str,
    pub points: Option<u32>,
    /// Column or section the toggle is grouped under
    pub group: Option<&'static str>,
    /// Clarifying text shown under the descriptor
    pub hint: Option<&'static str>,
}

/// Explanatory text block. Opaque to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Everything a renderer needs to draw one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: Page,
    pub heading: &'static str,
    pub toggles: Vec<Toggle>,
    pub notes: Vec<Note>,
    pub caption: Option<&'static str>,
}

fn entry_view() -> PageView {
    let clinical = ENTRY_CLINICAL_CRITERIA
        .iter()
        .enumerate()
        .map(|(i, &descriptor)| Toggle {
            key: FieldKey::EntryClinical(i),
            descriptor,
            points: None,
            group: Some("Clinical"),
            hint: None,
        });
    let lab = ENTRY_LAB_CRITERIA
        .iter()
        .enumerate()
        .map(|(i, &descriptor)| Toggle {
            key: FieldKey::EntryLab(i),
            descriptor,
            points: None,
            group: Some("Laboratory"),
            hint: None,
        });

    PageView {
        page: Page::EntryGate,
        heading: "At least one clinical criterion AND a positive aPL test within three years \
                  of the clinical criterion",
        toggles: clinical.chain(lab).collect(),
        notes: Vec::new(),
        caption: Some(
            "Refer to full text or subsequent pages for more details. Moderate positive aPL \
             test = 40-79 units, high positive aPL test ≥ 80 units.",
        ),
    }
}

fn criteria_view(domain: Domain) -> PageView {
    let toggles = catalog::by_domain(domain)
        .into_iter()
        .map(|criterion| Toggle {
            key: FieldKey::criterion(criterion),
            descriptor: criterion.descriptor,
            points: Some(criterion.points),
            group: group_for(domain, criterion.points),
            hint: hint_for(criterion.key),
        })
        .collect();

    PageView {
        page: Page::Criteria(domain),
        heading: domain.heading(),
        toggles,
        notes: notes_for(domain),
        caption: caption_for(domain),
    }
}

fn group_for(domain: Domain, points: u32) -> Option<&'static str> {
    match (domain, points) {
        (Domain::Microvascular, 2) => Some("Suspected"),
        (Domain::Microvascular, _) => Some("Established"),
        _ => None,
    }
}

fn hint_for(key: &str) -> Option<&'static str> {
    match key {
        "vte_high_risk" => Some(
            "One or more major risk factors or two or more minor risk factors at the time of the event",
        ),
        "ate_high_risk" => Some(
            "One or more high CVD risk factors or 3 or more moderate CVD risk factors",
        ),
        _ => None,
    }
}

fn caption_for(domain: Domain) -> Option<&'static str> {
    match domain {
        Domain::Microvascular => Some(
            "Suspected (one or more of the following): 2 points. \
             Established (one or more of the following): 5 points.",
        ),
        Domain::LupusAnticoagulant => Some("Refer to full text for accepted laboratory procedures."),
        Domain::AplSerology => Some(
            "Moderate positive aPL test = 40-79 units, high positive aPL test ≥ 80 units. \
             Refer to full text for accepted laboratory procedures.",
        ),
        _ => None,
    }
}

const VTE_MAJOR_RISK_FACTORS: &[&str] = &[
    "Active malignancy with no or noncurative treatment received, ongoing curative treatment including hormonal therapy, or recurrence progression despite curative treatment at the time of the event",
    "Hospital admission confined to bed (only bathroom privileges) with an acute illness for at least 3 days within 3 months prior to the event. Major trauma with fractures or spinal cord injury within 1 month prior to the event",
    "Surgery with general/spinal/epidural anesthesia for >30 minutes within 3 months prior to the event",
];

const VTE_MINOR_RISK_FACTORS: &[&str] = &[
    "Active systemic autoimmune disease or active inflammatory bowel disease using disease activity measures guided by current recommendations",
    "Acute/active severe infection according to guidelines, e.g., sepsis, pneumonia, SARS-CoV-2",
    "Central venous catheter in the same vascular bed",
    "Hormone replacement therapy, estrogen containing oral contraceptives, or ongoing in vitro fertilization treatment",
    "Long distance travel (≥8 hours)",
    "Obesity (body mass index [BMI] ≥30 kg/m2)",
    "Pregnancy or postpartum period within 6 weeks after delivery",
    "Prolonged immobilization not counted above, e.g., leg injury associated with reduced mobility, or confined to bed out of hospital for at least 3 days",
    "Surgery with general/spinal/epidural anesthesia for <30 minutes within 3 months prior to the event",
];

const CVD_HIGH_RISK_FACTORS: &[&str] = &[
    "Arterial hypertension with systolic blood pressure (BP) ≥180 mm Hg or diastolic BP ≥110 mm Hg",
    "Chronic kidney disease with estimated glomerular filtration rate ≤60 ml/minute for more than 3 months",
    "Diabetes mellitus with organ damage or long disease duration (type 1 for ≥20 years; type 2 for ≥10 years)",
    "Hyperlipidemia (severe) with total cholesterol ≥310 mg/dl (8 mmoles/liter) or LDL-cholesterol >190 mg/dl (4.9 mmoles/liter)",
];

const CVD_MODERATE_RISK_FACTORS: &[&str] = &[
    "Arterial hypertension on treatment, or with persistent systolic BP ≥140 mm Hg or diastolic BP ≥90 mm Hg",
    "Current tobacco smoking",
    "Diabetes mellitus with no organ damage and short disease duration (type 1 <20 years; type 2 <10 years)",
    "Hyperlipidemia (moderate) on treatment, or with total cholesterol above normal range and <310 mg/dl (8 mmoles/liter), or LDL-cholesterol above normal range and <190 mg/dl (4.9 mmoles/liter)",
    "Obesity (BMI ≥30 kg/m2)",
];

fn notes_for(domain: Domain) -> Vec<Note> {
    match domain {
        Domain::VenousThromboembolism => vec![
            Note {
                title: "Major risk factors",
                lines: VTE_MAJOR_RISK_FACTORS,
            },
            Note {
                title: "Minor risk factors",
                lines: VTE_MINOR_RISK_FACTORS,
            },
        ],
        Domain::ArterialThromboembolism => vec![
            Note {
                title: "High CVD risk factors",
                lines: CVD_HIGH_RISK_FACTORS,
            },
            Note {
                title: "Moderate CVD risk factors",
                lines: CVD_MODERATE_RISK_FACTORS,
            },
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_index(i), Some(*page));
        }
        assert_eq!(Page::from_index(10), None);
    }

    #[test]
    fn test_forward_labels() {
        assert_eq!(Page::EntryGate.forward_label(), Some("Apply additive criteria"));
        assert_eq!(
            Page::Criteria(Domain::Hematology).forward_label(),
            Some("Next")
        );
        assert_eq!(
            Page::Criteria(Domain::AplSerology).forward_label(),
            Some("Calculate score")
        );
        assert_eq!(Page::Result.forward_label(), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Criteria(Domain::CardiacValve).title(), "Additive clinical criteria");
        assert_eq!(
            Page::Criteria(Domain::LupusAnticoagulant).title(),
            "Additive laboratory criteria"
        );
    }

    #[test]
    fn test_entry_view_lists_all_entry_fields() {
        let view = Page::EntryGate.view();
        assert_eq!(view.toggles.len(), 9);
        assert_eq!(view.toggles[0].key, FieldKey::EntryClinical(0));
        assert_eq!(view.toggles[6].key, FieldKey::EntryLab(0));
        assert!(view.toggles.iter().all(|t| t.points.is_none()));
    }

    #[test]
    fn test_criteria_view_covers_catalog() {
        let total: usize = Page::ALL
            .iter()
            .filter(|p| matches!(p, Page::Criteria(_)))
            .map(|p| p.view().toggles.len())
            .sum();
        assert_eq!(total, catalog::CRITERIA.len());
    }

    #[test]
    fn test_microvascular_groups() {
        let view = Page::Criteria(Domain::Microvascular).view();
        let groups: Vec<_> = view.toggles.iter().map(|t| t.group.unwrap()).collect();
        assert_eq!(&groups[..4], &["Suspected"; 4]);
        assert_eq!(&groups[4..], &["Established"; 5]);
    }

    #[test]
    fn test_vte_page_has_risk_factor_notes() {
        let view = Page::Criteria(Domain::VenousThromboembolism).view();
        assert_eq!(view.notes.len(), 2);
        assert_eq!(view.notes[1].lines.len(), 9);
        assert!(view.toggles[0].hint.is_some());
    }

    #[test]
    fn test_result_view_has_no_toggles() {
        assert!(Page::Result.view().toggles.is_empty());
    }
}
