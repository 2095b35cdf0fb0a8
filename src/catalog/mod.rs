//! Static catalog of the 2023 ACR/EULAR APS classification criteria.
//!
//! Read-only after startup. Keys are generated together with the wizard
//! pages, so a failed lookup indicates a programming error or bad CLI input.

mod criteria;
mod domain;
mod entry;

pub use criteria::{Criterion, CRITERIA};
pub use domain::Domain;
pub use entry::{ENTRY_CLINICAL_CRITERIA, ENTRY_LAB_CRITERIA};

use crate::error::CatalogError;

/// Look up a criterion by key
pub fn lookup(key: &str) -> Result<&'static Criterion, CatalogError> {
    CRITERIA
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| CatalogError::NotFound(key.to_string()))
}

/// Criteria of one domain, lowest point value first.
///
/// The sort is stable, so criteria sharing a point value keep their
/// declaration order.
pub fn by_domain(domain: Domain) -> Vec<&'static Criterion> {
    let mut criteria: Vec<_> = CRITERIA.iter().filter(|c| c.domain == domain).collect();
    criteria.sort_by_key(|c| c.points);
    criteria
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_key() {
        let criterion = lookup("persistent_lac").unwrap();
        assert_eq!(criterion.domain, Domain::LupusAnticoagulant);
        assert_eq!(criterion.points, 5);
    }

    #[test]
    fn test_lookup_unknown_key() {
        let err = lookup("nonexistent_key").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("nonexistent_key".to_string()));
        assert_eq!(err.to_string(), "unknown criterion: nonexistent_key");
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(CRITERIA.len(), 26);
    }

    #[test]
    fn test_every_domain_has_criteria() {
        for domain in Domain::ALL {
            assert!(!by_domain(domain).is_empty(), "{} has no criteria", domain);
        }
    }

    #[test]
    fn test_by_domain_ascending_points() {
        let keys: Vec<_> = by_domain(Domain::AplSerology).iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["mod_high_igm", "mod_pos_igg", "high_pos_igg_or", "high_pos_igg_and"]
        );

        let keys: Vec<_> = by_domain(Domain::Obstetric).iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "16_week_fetal_death",
                "3_consecutive_losses",
                "pre_eclampsia_or_pi",
                "pre_eclampsia_and_pi"
            ]
        );
    }

    #[test]
    fn test_by_domain_groups_microvascular() {
        let points: Vec<_> = by_domain(Domain::Microvascular).iter().map(|c| c.points).collect();
        assert_eq!(points, vec![2, 2, 2, 2, 5, 5, 5, 5, 5]);
    }

    #[test]
    fn test_by_domain_lac() {
        let keys: Vec<_> = by_domain(Domain::LupusAnticoagulant).iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["single_lac", "persistent_lac"]);
    }
}
