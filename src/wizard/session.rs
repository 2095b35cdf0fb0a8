use tracing::debug;

use crate::scoring::{self, ScoreResult};

use super::page::{Page, PageView};
use super::store::{FieldKey, FieldStore};

/// One interactive scoring session: the current page plus every field value
/// the user has set.
///
/// All interaction goes through `on_field_changed`, `on_next` and `on_back`,
/// so a session can be driven without any UI.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    index: usize,
    fields: FieldStore,
    result: Option<ScoreResult>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        Page::ALL[self.index]
    }

    pub fn page_index(&self) -> usize {
        self.index
    }

    pub fn view(&self) -> PageView {
        self.page().view()
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn is_checked(&self, key: FieldKey) -> bool {
        self.fields.get(key)
    }

    /// Result computed when the result page was last entered.
    /// `None` anywhere but the result page.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn entry_gate_met(&self) -> bool {
        scoring::meets_entry_gate(
            &self.fields.entry_clinical_flags(),
            &self.fields.entry_lab_flags(),
        )
    }

    /// Whether `on_next` would move from the current page
    pub fn can_advance(&self) -> bool {
        match self.page() {
            Page::EntryGate => self.entry_gate_met(),
            Page::Result => false,
            Page::Criteria(_) => true,
        }
    }

    /// Persist a field value. Takes effect before any later navigation.
    pub fn on_field_changed(&mut self, key: FieldKey, value: bool) -> Page {
        debug!(field = %key, value, "field changed");
        self.fields.set(key, value);
        self.page()
    }

    /// Flip a field and return its new value
    pub fn toggle(&mut self, key: FieldKey) -> bool {
        let value = !self.fields.get(key);
        self.on_field_changed(key, value);
        value
    }

    /// Advance one page. A no-op on the entry page until the entry gate is
    /// met, and always a no-op on the result page.
    pub fn on_next(&mut self) -> Page {
        if !self.can_advance() {
            debug!(page = self.index, "next refused");
            return self.page();
        }

        self.index += 1;
        debug!(page = self.index, "advanced");

        if self.page() == Page::Result {
            let result = scoring::compute_scores(self.fields.checked_criteria());
            debug!(
                total_clinical = result.total_clinical,
                total_lab = result.total_lab,
                classified = result.classified,
                "computed score"
            );
            self.result = Some(result);
        }
        self.page()
    }

    /// Go back one page, stopping at the first page
    pub fn on_back(&mut self) -> Page {
        if self.index > 0 {
            self.index -= 1;
            self.result = None;
            debug!(page = self.index, "went back");
        }
        self.page()
    }

    /// Discard all field values and return to the first page
    pub fn reset(&mut self) -> Page {
        *self = Self::new();
        debug!("session reset");
        self.page()
    }
}
