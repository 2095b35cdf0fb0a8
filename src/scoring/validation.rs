use std::collections::HashSet;

use crate::catalog::{Criterion, Domain};

/// Validate the criteria catalog at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_criteria(criteria: &[Criterion]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, criterion) in criteria.iter().enumerate() {
        if criterion.key.trim().is_empty() {
            errors.push(format!("criteria[{}].key: must not be empty", i));
        } else if !seen.insert(criterion.key) {
            errors.push(format!("criteria[{}].key: duplicate key '{}'", i, criterion.key));
        }

        if criterion.points == 0 {
            errors.push(format!(
                "criteria[{}].points: '{}' must be worth at least 1 point",
                i, criterion.key
            ));
        }

        if criterion.descriptor.trim().is_empty() {
            errors.push(format!(
                "criteria[{}].descriptor: '{}' has no descriptor",
                i, criterion.key
            ));
        }
    }

    // Every domain needs at least one criterion or its page would be empty
    for domain in Domain::ALL {
        if !criteria.iter().any(|c| c.domain == domain) {
            errors.push(format!("{}: no criteria defined", domain));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
