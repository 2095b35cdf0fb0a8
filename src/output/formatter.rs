use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::{Criterion, Domain};
use crate::scoring::{ScoreResult, CLINICAL_THRESHOLD, LAB_THRESHOLD};

const LABEL_WIDTH: usize = 40;
const RULE: &str = "--------------------------------------------------";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// "1 point" / "3 points"
pub fn format_points(points: u32) -> String {
    if points == 1 {
        "1 point".to_string()
    } else {
        format!("{} points", points)
    }
}

/// One-line verdict for a score
pub fn classification_line(result: &ScoreResult) -> &'static str {
    if result.classified {
        "Result: Classified as APS for research purposes"
    } else {
        "Result: Does not meet APS classification criteria"
    }
}

/// Threshold check lines, clinical first
pub fn threshold_checks(result: &ScoreResult) -> [(String, bool); 2] {
    [
        (
            format!("Clinical score >= {}", CLINICAL_THRESHOLD),
            result.clinical_threshold_met(),
        ),
        (
            format!("Laboratory score >= {}", LAB_THRESHOLD),
            result.lab_threshold_met(),
        ),
    ]
}

fn domain_row(domain: Domain, score: u32) -> String {
    let label = format!("{}: {}", domain, domain.name());
    format!("{:<width$}{}", label, score, width = LABEL_WIDTH)
}

/// Plain-text domain table, laid out for pasting into an EMR note
pub fn format_score_table(result: &ScoreResult) -> String {
    let mut lines = vec![format!("{:<width$}Score", "Domain", width = LABEL_WIDTH)];

    for domain in Domain::ALL.iter().filter(|d| d.is_clinical()) {
        lines.push(domain_row(*domain, result.score(*domain)));
    }
    lines.push(RULE.to_string());
    lines.push(format!(
        "{:<width$}{}",
        "Total Clinical",
        result.total_clinical,
        width = LABEL_WIDTH
    ));
    lines.push(String::new());

    for domain in Domain::ALL.iter().filter(|d| d.is_laboratory()) {
        lines.push(domain_row(*domain, result.score(*domain)));
    }
    lines.push(RULE.to_string());
    lines.push(format!(
        "{:<width$}{}",
        "Total Lab",
        result.total_lab,
        width = LABEL_WIDTH
    ));

    lines.join("\n")
}

/// Full score report: verdict, threshold checks and the domain table
pub fn format_score_report(result: &ScoreResult, use_colors: bool) -> String {
    let verdict = classification_line(result);
    let mut out = if use_colors {
        if result.classified {
            format!("{}", verdict.green().bold())
        } else {
            format!("{}", verdict.red().bold())
        }
    } else {
        verdict.to_string()
    };
    out.push_str("\n\n");

    for (label, met) in threshold_checks(result) {
        let mark = if met { "met" } else { "not met" };
        let line = format!("{:<width$}{}", label, mark, width = LABEL_WIDTH);
        if use_colors && !met {
            out.push_str(&format!("{}", line.dimmed()));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format_score_table(result));
    out
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format criteria as a table: domain, key, points, descriptor.
/// Descriptors are truncated to the terminal width when stdout is a terminal.
pub fn format_criteria_table(criteria: &[&Criterion], use_colors: bool) -> String {
    if criteria.is_empty() {
        return "No criteria found.".to_string();
    }

    let key_width = criteria.iter().map(|c| c.key.len()).max().unwrap_or(0);
    let term_width = get_terminal_width();
    let separator = "  ";

    criteria
        .iter()
        .map(|criterion| {
            let domain = format!("{}", criterion.domain);
            let key = format!("{:<width$}", criterion.key, width = key_width);
            let points = format!("{:>2}", criterion.points);

            let fixed_width = domain.len() + key_width + points.len() + separator.len() * 3;
            let descriptor = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(criterion.descriptor, width - fixed_width)
                }
                Some(_) => truncate_text(criterion.descriptor, 20),
                None => criterion.descriptor.to_string(),
            };

            if use_colors {
                format!(
                    "{}{}{}{}{}{}{}",
                    domain.dimmed(),
                    separator,
                    key.cyan(),
                    separator,
                    points.bold(),
                    separator,
                    descriptor
                )
            } else {
                format!(
                    "{}{}{}{}{}{}{}",
                    domain, separator, key, separator, points, separator, descriptor
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format criteria as tab-separated values for scripting
/// Columns: domain number, key, points, descriptor (no headers, no colors)
pub fn format_criteria_tsv(criteria: &[&Criterion]) -> String {
    criteria
        .iter()
        .map(|c| {
            format!(
                "{}\t{}\t{}\t{}",
                c.domain.number(),
                c.key,
                c.points,
                c.descriptor
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
