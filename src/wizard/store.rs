use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::catalog::{self, Criterion, ENTRY_CLINICAL_CRITERIA, ENTRY_LAB_CRITERIA};
use crate::error::CatalogError;

const ENTRY_CLINICAL_PREFIX: &str = "entry_clinical_";
const ENTRY_LAB_PREFIX: &str = "entry_lab_";

/// Field for one catalog criterion. Only obtainable through
/// [`FieldKey::parse`] or a catalog entry, never from a bare string.
#[derive(Debug, Clone, Copy)]
pub struct CriterionField(&'static Criterion);

impl CriterionField {
    pub fn key(self) -> &'static str {
        self.0.key
    }

    pub fn criterion(self) -> &'static Criterion {
        self.0
    }
}

impl PartialEq for CriterionField {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CriterionField {}

impl Hash for CriterionField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for CriterionField {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CriterionField {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

/// Key of a boolean field the wizard can display and persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    EntryClinical(usize),
    EntryLab(usize),
    Criterion(CriterionField),
}

impl FieldKey {
    /// Field for a catalog entry
    pub(crate) fn criterion(criterion: &'static Criterion) -> Self {
        FieldKey::Criterion(CriterionField(criterion))
    }

    /// Parse and validate a string field key
    pub fn parse(key: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidFieldKey(key.to_string());

        if let Some(index) = key.strip_prefix(ENTRY_CLINICAL_PREFIX) {
            let i: usize = index.parse().map_err(|_| invalid())?;
            return if i < ENTRY_CLINICAL_CRITERIA.len() {
                Ok(FieldKey::EntryClinical(i))
            } else {
                Err(invalid())
            };
        }

        if let Some(index) = key.strip_prefix(ENTRY_LAB_PREFIX) {
            let i: usize = index.parse().map_err(|_| invalid())?;
            return if i < ENTRY_LAB_CRITERIA.len() {
                Ok(FieldKey::EntryLab(i))
            } else {
                Err(invalid())
            };
        }

        catalog::lookup(key).map(FieldKey::criterion)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::EntryClinical(i) => write!(f, "{}{}", ENTRY_CLINICAL_PREFIX, i),
            FieldKey::EntryLab(i) => write!(f, "{}{}", ENTRY_LAB_PREFIX, i),
            FieldKey::Criterion(field) => f.write_str(field.key()),
        }
    }
}

/// Checked state of every field touched during one session.
/// Fields never written read as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStore {
    values: HashMap<FieldKey, bool>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> bool {
        self.values.get(&key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: FieldKey, value: bool) {
        self.values.insert(key, value);
    }

    /// Criterion keys currently checked, sorted
    pub fn checked_criteria(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .values
            .iter()
            .filter_map(|(key, &checked)| match key {
                FieldKey::Criterion(field) if checked => Some(field.key()),
                _ => None,
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn entry_clinical_flags(&self) -> Vec<bool> {
        (0..ENTRY_CLINICAL_CRITERIA.len())
            .map(|i| self.get(FieldKey::EntryClinical(i)))
            .collect()
    }

    pub fn entry_lab_flags(&self) -> Vec<bool> {
        (0..ENTRY_LAB_CRITERIA.len())
            .map(|i| self.get(FieldKey::EntryLab(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(key: &str) -> FieldKey {
        FieldKey::parse(key).unwrap()
    }

    #[test]
    fn test_parse_entry_keys() {
        assert_eq!(FieldKey::parse("entry_clinical_0"), Ok(FieldKey::EntryClinical(0)));
        assert_eq!(FieldKey::parse("entry_clinical_5"), Ok(FieldKey::EntryClinical(5)));
        assert_eq!(FieldKey::parse("entry_lab_2"), Ok(FieldKey::EntryLab(2)));
    }

    #[test]
    fn test_parse_entry_key_out_of_range() {
        assert_eq!(
            FieldKey::parse("entry_clinical_6"),
            Err(CatalogError::InvalidFieldKey("entry_clinical_6".to_string()))
        );
        assert!(FieldKey::parse("entry_lab_3").is_err());
        assert!(FieldKey::parse("entry_lab_x").is_err());
    }

    #[test]
    fn test_parse_criterion_key() {
        match FieldKey::parse("single_lac") {
            Ok(FieldKey::Criterion(field)) => {
                assert_eq!(field.key(), "single_lac");
                assert_eq!(field.criterion().points, 1);
            }
            other => panic!("expected a criterion field, got {:?}", other),
        }
        assert_eq!(
            FieldKey::parse("bogus"),
            Err(CatalogError::NotFound("bogus".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for key in [
            FieldKey::EntryClinical(3),
            FieldKey::EntryLab(1),
            criterion("valve_vegetation"),
        ] {
            assert_eq!(FieldKey::parse(&key.to_string()), Ok(key));
        }
    }

    #[test]
    fn test_unset_field_reads_false() {
        let store = FieldStore::new();
        assert!(!store.get(criterion("vte_low_risk")));
        assert!(store.checked_criteria().is_empty());
    }

    #[test]
    fn test_set_and_uncheck() {
        let mut store = FieldStore::new();
        store.set(criterion("vte_low_risk"), true);
        store.set(criterion("ate_low_risk"), true);
        store.set(FieldKey::EntryLab(0), true);
        assert_eq!(store.checked_criteria(), vec!["ate_low_risk", "vte_low_risk"]);

        store.set(criterion("ate_low_risk"), false);
        assert_eq!(store.checked_criteria(), vec!["vte_low_risk"]);
        assert!(!store.get(criterion("ate_low_risk")));
    }

    #[test]
    fn test_criterion_fields_compare_by_key() {
        let by_parse = criterion("thrombocytopenia");
        let by_entry = FieldKey::criterion(catalog::lookup("thrombocytopenia").unwrap());
        assert_eq!(by_parse, by_entry);
        assert!(criterion("ate_low_risk") < criterion("vte_low_risk"));

        let mut store = FieldStore::new();
        store.set(by_parse, true);
        assert!(store.get(by_entry));
    }

    #[test]
    fn test_checked_criteria_only_returns_catalog_keys() {
        let mut store = FieldStore::new();
        store.set(criterion("livedo_racemosa"), true);
        assert!(FieldKey::parse("bogus").is_err());
        for key in store.checked_criteria() {
            assert!(catalog::lookup(key).is_ok());
        }
        assert_eq!(store.checked_criteria(), vec!["livedo_racemosa"]);
    }

    #[test]
    fn test_entry_flags() {
        let mut store = FieldStore::new();
        store.set(FieldKey::EntryClinical(2), true);
        assert_eq!(
            store.entry_clinical_flags(),
            vec![false, false, true, false, false, false]
        );
        assert_eq!(store.entry_lab_flags(), vec![false, false, false]);
    }
}
