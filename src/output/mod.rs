pub mod formatter;

pub use formatter::{
    classification_line, format_criteria_table, format_criteria_tsv, format_points,
    format_score_report, format_score_table, should_use_colors, threshold_checks, truncate_text,
};
