pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use tracing::info;

use crate::scoring::ScoreResult;

/// Run the wizard until the user quits. Returns the last computed result,
/// if the user reached the result page at least once.
pub async fn run_tui(mut app: App) -> anyhow::Result<Option<ScoreResult>> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e);
        }

        handle_event(&mut app, events.next().await);

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    outcome?;
    info!(
        "session ended on page {} ({})",
        app.wizard.page_index(),
        app.page().title()
    );
    Ok(app.last_result)
}

fn handle_event(app: &mut App, event: Option<Event>) {
    match event {
        Some(Event::Key(key)) => handle_key_event(app, key),
        Some(Event::Resize) => {}
        Some(Event::Tick) => app.update_flash(),
        // No more input can arrive
        None => app.should_quit = true,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Row navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

            // Check / uncheck
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => app.toggle_selected(),

            // Page navigation
            KeyCode::Char('n') | KeyCode::Right => app.next_page(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::Backspace => app.previous_page(),

            // Criteria full text
            KeyCode::Char('f') => app.open_reference(),

            // New assessment
            KeyCode::Char('r') => app.reset(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
