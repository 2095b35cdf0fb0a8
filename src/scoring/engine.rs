use serde::Serialize;

use crate::catalog::{self, Criterion, Domain};
use crate::error::CatalogError;

/// Minimum summed clinical score for classification
pub const CLINICAL_THRESHOLD: u32 = 3;

/// Minimum summed laboratory score for classification
pub const LAB_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: u32,
    /// Key of the criterion that was credited, if any was checked
    pub credited: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// One entry per domain, D1 first
    pub domains: [DomainScore; 8],
    pub total_clinical: u32,
    pub total_lab: u32,
    pub classified: bool,
}

impl ScoreResult {
    /// Score of a single domain. Domains with nothing checked score 0.
    pub fn score(&self, domain: Domain) -> u32 {
        self.domains[domain.index()].score
    }

    pub fn clinical_threshold_met(&self) -> bool {
        self.total_clinical >= CLINICAL_THRESHOLD
    }

    pub fn lab_threshold_met(&self) -> bool {
        self.total_lab >= LAB_THRESHOLD
    }
}

/// Score a set of checked criterion keys.
///
/// Only the highest-weighted checked criterion counts in each domain. Keys
/// that are not in the catalog are ignored; see [`unknown_keys`] to report
/// them.
pub fn compute_scores<I, S>(checked_keys: I) -> ScoreResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: [Option<&'static Criterion>; 8] = [None; 8];

    for key in checked_keys {
        let key = key.as_ref();
        let Ok(criterion) = catalog::lookup(key) else {
            continue;
        };

        let slot = &mut best[criterion.domain.index()];
        let replaces = match slot {
            None => true,
            // Equal points: smallest key wins so the result never depends on
            // the order the keys were supplied in
            Some(current) => {
                criterion.points > current.points
                    || (criterion.points == current.points && criterion.key < current.key)
            }
        };
        if replaces {
            *slot = Some(criterion);
        }
    }

    let domains = Domain::ALL.map(|domain| {
        let credited = best[domain.index()];
        DomainScore {
            domain,
            score: credited.map_or(0, |c| c.points),
            credited: credited.map(|c| c.key),
        }
    });

    let total_clinical = domains
        .iter()
        .filter(|d| d.domain.is_clinical())
        .map(|d| d.score)
        .sum();
    let total_lab = domains
        .iter()
        .filter(|d| d.domain.is_laboratory())
        .map(|d| d.score)
        .sum();

    ScoreResult {
        domains,
        total_clinical,
        total_lab,
        classified: total_clinical >= CLINICAL_THRESHOLD && total_lab >= LAB_THRESHOLD,
    }
}

/// Keys that are not in the catalog, in input order
pub fn unknown_keys<S: AsRef<str>>(keys: &[S]) -> Vec<&str> {
    keys.iter()
        .map(|key| key.as_ref())
        .filter(|key| catalog::lookup(key).is_err())
        .collect()
}

/// Score keys supplied by a user. With `strict`, the first key missing from
/// the catalog is an error; otherwise unknown keys are ignored.
pub fn score_keys<S: AsRef<str>>(keys: &[S], strict: bool) -> Result<ScoreResult, CatalogError> {
    if strict {
        for key in keys {
            catalog::lookup(key.as_ref())?;
        }
    }
    Ok(compute_scores(keys))
}

/// True when at least one clinical and at least one laboratory entry
/// criterion is met.
pub fn meets_entry_gate(clinical_flags: &[bool], lab_flags: &[bool]) -> bool {
    clinical_flags.iter().any(|&f| f) && lab_flags.iter().any(|&f| f)
}
