use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal size changed; the next loop iteration redraws
    Resize,
    Tick,
}

/// Map a raw terminal event to an app event. Only key presses are kept
/// (Windows also reports releases).
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut terminal_events = crossterm::event::EventStream::new();
            let mut ticks = tokio::time::interval(Duration::from_millis(tick_rate_ms));

            loop {
                let event = tokio::select! {
                    raw = terminal_events.next() => match raw {
                        Some(Ok(raw)) => translate(raw),
                        Some(Err(_)) => None,
                        // Input closed
                        None => break,
                    },
                    _ = ticks.tick() => Some(Event::Tick),
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        EventHandler { rx }
    }

    /// Next event, or `None` once the terminal input has closed
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
