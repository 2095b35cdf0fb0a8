use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};

use crate::catalog::Domain;
use crate::output::{classification_line, format_points, threshold_checks};
use crate::scoring::ScoreResult;
use crate::tui::app::{App, FlashKind, InputMode};
use crate::tui::theme::ThemeColors;
use crate::wizard::{Page, Toggle};

const CHECKBOX_WIDTH: u16 = 3;
const GROUP_WIDTH: u16 = 12;
const POINTS_WIDTH: u16 = 9;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 50 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Heading(3) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Page tabs
        Constraint::Length(3), // Page heading
        Constraint::Fill(1),   // Criteria or result
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    render_heading(frame, chunks[2], app);

    match app.page() {
        Page::Result => render_result(frame, chunks[3], app),
        _ => render_criteria(frame, chunks[3], app),
    }

    render_status_bar(frame, chunks[4], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, &app.theme);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let left = "APS Classification Criteria";
    let right = format!(
        "Page {}/{}",
        app.wizard.page_index() + 1,
        Page::COUNT
    );
    let padding_len = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| {
            let style = if page.index() <= app.furthest_page {
                theme.tab_visited_style
            } else {
                theme.tab_inactive_style
            };
            Line::styled(page.tab_label(), style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.wizard.page_index())
        .highlight_style(theme.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::styled(app.page().title(), theme.heading),
        Line::styled(app.view.heading, Style::default().fg(theme.title_color)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_criteria(frame: &mut Frame, area: Rect, app: &mut App) {
    let panel_height = if !app.view.notes.is_empty() {
        area.height * 2 / 5
    } else if app.view.caption.is_some() {
        4
    } else {
        0
    };

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(panel_height)]).split(area);

    render_toggle_table(frame, chunks[0], app);
    if panel_height > 0 {
        render_notes(frame, chunks[1], app);
    }
}

fn render_toggle_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let has_groups = app.view.toggles.iter().any(|t| t.group.is_some());
    let group_width = if has_groups { GROUP_WIDTH } else { 0 };

    // Column spacing is 1 between each of the four columns
    let descriptor_width = area
        .width
        .saturating_sub(CHECKBOX_WIDTH + group_width + POINTS_WIDTH + 3)
        .max(10) as usize;

    let rows: Vec<Row> = app
        .view
        .toggles
        .iter()
        .enumerate()
        .map(|(idx, toggle)| {
            let checked = app.wizard.is_checked(toggle.key);
            toggle_row(toggle, checked, idx, descriptor_width, theme)
        })
        .collect();

    let widths = [
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Length(group_width),
        Constraint::Fill(1),
        Constraint::Length(POINTS_WIDTH),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "", "Criterion", "Points"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn toggle_row<'a>(
    toggle: &Toggle,
    checked: bool,
    idx: usize,
    descriptor_width: usize,
    theme: &ThemeColors,
) -> Row<'a> {
    let checkbox = if checked { "[x]" } else { "[ ]" };

    let mut lines: Vec<Line> = wrap_words(toggle.descriptor, descriptor_width)
        .into_iter()
        .map(Line::from)
        .collect();
    if let Some(hint) = toggle.hint {
        lines.extend(
            wrap_words(hint, descriptor_width)
                .into_iter()
                .map(|l| Line::styled(l, Style::default().fg(theme.hint).italic())),
        );
    }
    let height = lines.len().max(1) as u16;

    let points = toggle.points.map(format_points).unwrap_or_default();

    // Alternating row background (odd rows get subtle background)
    let row_style = if idx % 2 == 1 {
        Style::default().bg(theme.row_alt_bg)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(checkbox).style(Style::default().fg(theme.checkbox_color(checked)).bold()),
        Cell::from(toggle.group.unwrap_or_default()).style(Style::default().fg(theme.group)),
        Cell::from(Text::from(lines)),
        Cell::from(points).style(Style::default().fg(theme.points)),
    ])
    .height(height)
    .style(row_style)
}

fn render_notes(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    for note in &app.view.notes {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(note.title, theme.note_title));
        for (i, item) in note.lines.iter().enumerate() {
            lines.push(Line::from(format!("{}. {}", i + 1, item)));
        }
    }

    if let Some(caption) = app.view.caption {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(caption, Style::default().fg(theme.muted).italic()));
    }

    let block = Block::bordered().border_style(Style::default().fg(theme.note_border));
    let notes = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(notes, area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(result) = app.wizard.result() else {
        frame.render_widget(Paragraph::new("No score computed"), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),  // Verdict
        Constraint::Length(1),  // Spacer
        Constraint::Length(2),  // Threshold checks
        Constraint::Length(1),  // Spacer
        Constraint::Length(16), // Domain table
        Constraint::Fill(1),    // Caption
    ])
    .split(area);

    let verdict = Paragraph::new(classification_line(result))
        .style(Style::default().fg(theme.verdict_color(result.classified)).bold());
    frame.render_widget(verdict, chunks[0]);

    let checks: Vec<Line> = threshold_checks(result)
        .into_iter()
        .map(|(label, met)| {
            let (mark, color) = if met {
                ("✓ met", theme.result_pass)
            } else {
                ("✗ not met", theme.result_fail)
            };
            Line::from(vec![
                Span::raw(format!("{:<28}", label)),
                Span::styled(mark, Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(checks), chunks[2]);

    frame.render_widget(score_table(result, theme), chunks[4]);

    if app.config.print_report_on_exit {
        let caption = format!(
            "{}: the report is printed to the terminal when you quit",
            app.view.caption.unwrap_or_default()
        );
        let caption = Paragraph::new(caption)
            .style(Style::default().fg(theme.muted).italic())
            .wrap(Wrap { trim: true });
        frame.render_widget(caption, chunks[5]);
    }
}

fn score_table<'a>(result: &ScoreResult, theme: &ThemeColors) -> Table<'a> {
    let domain_row = |domain: Domain| {
        Row::new(vec![
            Cell::from(format!("{}: {}", domain, domain.name())),
            Cell::from(result.score(domain).to_string()),
        ])
    };
    let total_row = |label: &'static str, total: u32| {
        Row::new(vec![Cell::from(label), Cell::from(total.to_string())])
            .style(Style::default().bold())
            .bottom_margin(1)
    };

    let mut rows: Vec<Row> = Domain::ALL
        .iter()
        .filter(|d| d.is_clinical())
        .map(|d| domain_row(*d))
        .collect();
    rows.push(total_row("Total Clinical", result.total_clinical));
    rows.extend(
        Domain::ALL
            .iter()
            .filter(|d| d.is_laboratory())
            .map(|d| domain_row(*d)),
    );
    rows.push(total_row("Total Lab", result.total_lab));

    Table::new(rows, [Constraint::Length(40), Constraint::Length(6)]).header(
        Row::new(vec!["Domain", "Score"])
            .style(theme.header_style)
            .bottom_margin(1),
    )
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme.flash_success,
            FlashKind::Error => theme.flash_error,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let page = app.page();
        let mut hints: Vec<(&str, String)> = Vec::new();
        if !app.view.toggles.is_empty() {
            hints.push(("j/k", ":nav ".to_string()));
            hints.push(("Space", ":toggle ".to_string()));
        }
        if let Some(label) = page.forward_label() {
            hints.push(("→", format!(":{} ", label.to_lowercase())));
        }
        if page != Page::EntryGate {
            hints.push(("←", ":back ".to_string()));
        }
        hints.push(("f", ":full text ".to_string()));
        hints.push(("r", ":restart ".to_string()));
        hints.push(("?", ":help ".to_string()));
        hints.push(("q", ":quit".to_string()));

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 15, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border))
        .style(Style::default().bg(theme.popup_bg));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let shortcuts = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("Space / Enter ", "Check or uncheck criterion"),
        ("n / Right     ", "Next page / calculate score"),
        ("p / Left      ", "Previous page"),
        ("f             ", "Open criteria full text"),
        ("r             ", "Start a new assessment"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = shortcuts
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(*key, Style::default().fg(theme.status_key_color).bold()),
                Span::raw(*desc),
            ])
        })
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words_short() {
        assert_eq!(wrap_words("Thickening", 20), vec!["Thickening"]);
    }

    #[test]
    fn test_wrap_words_breaks_on_spaces() {
        assert_eq!(
            wrap_words("Positive LAC (single – one time)", 14),
            vec!["Positive LAC", "(single – one", "time)"]
        );
    }

    #[test]
    fn test_wrap_words_long_word() {
        assert_eq!(wrap_words("a supercalifragilistic b", 5), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_words_empty() {
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(50, 15, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect_fixed(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
