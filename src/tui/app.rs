use crate::config::Config;
use crate::scoring::ScoreResult;
use crate::tui::theme::ThemeColors;
use crate::wizard::{FieldKey, Page, PageView, Wizard};
use anyhow::Context;
use std::time::Instant;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashKind {
    Success,
    Error,
}

pub struct App {
    pub wizard: Wizard,
    /// View of the current page, rebuilt on navigation
    pub view: PageView,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    /// Furthest page reached this session, for the tab strip
    pub furthest_page: usize,
    /// Most recent result, kept after leaving the result page for the exit report
    pub last_result: Option<ScoreResult>,
    pub should_quit: bool,
    pub config: Config,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(config: Config, theme: ThemeColors) -> Self {
        let wizard = Wizard::new();
        let view = wizard.view();
        let mut app = Self {
            wizard,
            view,
            table_state: ratatui::widgets::TableState::default(),
            input_mode: InputMode::Normal,
            flash_message: None,
            furthest_page: 0,
            last_result: None,
            should_quit: false,
            config,
            theme,
        };
        app.reset_selection();
        app
    }

    pub fn page(&self) -> Page {
        self.wizard.page()
    }

    pub fn next_row(&mut self) {
        let len = self.view.toggles.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.view.toggles.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_key(&self) -> Option<FieldKey> {
        self.table_state
            .selected()
            .and_then(|i| self.view.toggles.get(i))
            .map(|t| t.key)
    }

    /// Flip the checkbox under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.wizard.toggle(key);
        }
    }

    /// Forward action for the current page
    pub fn next_page(&mut self) {
        let before = self.wizard.page();
        if before == Page::Result {
            return;
        }
        if !self.wizard.can_advance() {
            self.show_flash(
                "Select at least one clinical and one laboratory criterion to continue".to_string(),
                FlashKind::Error,
            );
            return;
        }

        let after = self.wizard.on_next();
        if after == Page::Result {
            self.last_result = self.wizard.result().cloned();
        }
        self.on_page_changed(before, after);
    }

    pub fn previous_page(&mut self) {
        let before = self.wizard.page();
        let after = self.wizard.on_back();
        self.on_page_changed(before, after);
    }

    /// Start a fresh session
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.view = self.wizard.view();
        self.furthest_page = 0;
        self.last_result = None;
        self.reset_selection();
        self.show_flash("Started a new assessment".to_string(), FlashKind::Success);
    }

    fn on_page_changed(&mut self, before: Page, after: Page) {
        if before == after {
            return;
        }
        self.view = self.wizard.view();
        self.furthest_page = self.furthest_page.max(after.index());
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        if self.view.toggles.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// Open the criteria full text in the browser
    pub fn open_reference(&mut self) {
        let url = self.config.reference_url.clone();
        match webbrowser::open(&url)
            .with_context(|| format!("Failed to open browser for URL: {}", url))
        {
            Ok(()) => self.show_flash(format!("Opened: {}", url), FlashKind::Success),
            Err(e) => self.show_flash(format!("{:#}", e), FlashKind::Error),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Dismiss help overlay
    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Domain;

    fn app() -> App {
        App::new(Config::default(), ThemeColors::dark())
    }

    fn check_row(app: &mut App, row: usize) {
        app.table_state.select(Some(row));
        app.toggle_selected();
    }

    #[test]
    fn test_starts_on_entry_page() {
        let app = app();
        assert_eq!(app.page(), Page::EntryGate);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.view.toggles.len(), 9);
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut app = app();
        app.previous_row();
        assert_eq!(app.table_state.selected(), Some(8));
        app.next_row();
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_gate_refusal_flashes_error() {
        let mut app = app();
        check_row(&mut app, 0);
        app.next_page();
        assert_eq!(app.page(), Page::EntryGate);
        let (_, kind, _) = app.flash_message.as_ref().unwrap();
        assert_eq!(*kind, FlashKind::Error);
    }

    #[test]
    fn test_walkthrough_to_result() {
        let mut app = app();
        check_row(&mut app, 0); // venous thromboembolism
        check_row(&mut app, 6); // lupus anticoagulant
        app.next_page();
        assert_eq!(app.page(), Page::Criteria(Domain::VenousThromboembolism));
        assert_eq!(app.table_state.selected(), Some(0));

        check_row(&mut app, 1); // vte_low_risk
        assert!(app.wizard.is_checked(FieldKey::parse("vte_low_risk").unwrap()));

        for _ in 0..6 {
            app.next_page();
        }
        assert_eq!(app.page(), Page::Criteria(Domain::LupusAnticoagulant));
        check_row(&mut app, 1); // persistent_lac
        app.next_page();
        app.next_page();

        assert_eq!(app.page(), Page::Result);
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.furthest_page, 9);
        let result = app.last_result.as_ref().unwrap();
        assert_eq!(result.total_clinical, 3);
        assert_eq!(result.total_lab, 5);
        assert!(result.classified);

        // Leaving the result page keeps the report for exit
        app.previous_page();
        assert!(app.last_result.is_some());
        assert_eq!(app.furthest_page, 9);
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut app = app();
        app.table_state.select(None);
        app.toggle_selected();
        assert!(app.wizard.fields().checked_criteria().is_empty());
        assert!(!app.wizard.is_checked(FieldKey::EntryClinical(0)));
    }

    #[test]
    fn test_reset_clears_session() {
        let mut app = app();
        check_row(&mut app, 0);
        check_row(&mut app, 6);
        app.next_page();
        app.reset();
        assert_eq!(app.page(), Page::EntryGate);
        assert_eq!(app.furthest_page, 0);
        assert!(!app.wizard.is_checked(FieldKey::EntryClinical(0)));
    }

    #[test]
    fn test_help_mode() {
        let mut app = app();
        app.show_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.dismiss_help();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
