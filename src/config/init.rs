use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config, ThemeMode};

/// Line-oriented question/answer over any reader and writer.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write prompt")
    }

    /// Ask a question and return the trimmed answer. End of input reads as empty.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read input")?;
        Ok(answer.trim().to_string())
    }

    fn ask_or(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [{}]: ", question, default))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{} [{}]: ", question, hint))?;
        Ok(parse_yes_no(&answer, default_yes))
    }

    fn theme(&mut self) -> Result<ThemeMode> {
        loop {
            let answer = self.ask_or("Theme (auto/dark/light)", "auto")?;
            match parse_theme(&answer) {
                Some(mode) => return Ok(mode),
                None => self.say("  expected auto, dark or light")?,
            }
        }
    }
}

fn parse_yes_no(input: &str, default_yes: bool) -> bool {
    match input.to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    }
}

fn parse_theme(input: &str) -> Option<ThemeMode> {
    match input.trim().to_lowercase().as_str() {
        "auto" => Some(ThemeMode::Auto),
        "dark" => Some(ThemeMode::Dark),
        "light" => Some(ThemeMode::Light),
        _ => None,
    }
}

/// Ask for each setting and build the resulting config and its target path.
/// Returns `None` when the user declines to overwrite an existing file.
fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_path: PathBuf,
) -> Result<Option<(PathBuf, Config)>> {
    let defaults = Config::default();

    prompter.say("")?;
    prompter.say("APS Calculator Configuration")?;
    prompter.say("")?;

    let theme = prompter.theme()?;
    let print_report_on_exit =
        prompter.confirm("Print the score report for the EMR on exit?", true)?;
    let reference_url = prompter.ask_or("Criteria full text link", &defaults.reference_url)?;
    let log_level = prompter.ask_or("Log level", &defaults.log_level)?;

    let path = PathBuf::from(
        prompter.ask_or("Save config to", &default_path.display().to_string())?,
    );
    if path.exists() {
        let question = format!("{} exists. Overwrite?", path.display());
        if !prompter.confirm(&question, false)? {
            prompter.say("Aborted.")?;
            return Ok(None);
        }
    }

    let config = Config {
        theme,
        reference_url,
        print_report_on_exit,
        log_level,
    };
    Ok(Some((path, config)))
}

/// Run the interactive init wizard to create a config file.
///
/// `default_path` is offered as the save location; without it the standard
/// config path is offered.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let default_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    if let Some((path, config)) = collect(&mut prompter, default_path)? {
        save_config(&path, &config)?;
        prompter.say(&format!("Config written to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str, default_path: PathBuf) -> (Option<(PathBuf, Config)>, String) {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(answers.as_bytes()), &mut out);
        let collected = collect(&mut prompter, default_path).unwrap();
        (collected, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
        assert!(parse_yes_no("Y", false));
        assert!(parse_yes_no("yes", false));
        assert!(!parse_yes_no("nope", true));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("Dark"), Some(ThemeMode::Dark));
        assert_eq!(parse_theme(" light "), Some(ThemeMode::Light));
        assert_eq!(parse_theme("auto"), Some(ThemeMode::Auto));
        assert_eq!(parse_theme("blue"), None);
    }

    #[test]
    fn test_all_defaults() {
        let path = std::env::temp_dir().join("aps-calc-init-test-missing/config.yaml");
        let (collected, _) = run("\n\n\n\n\n", path.clone());
        let (saved_path, config) = collected.unwrap();
        assert_eq!(saved_path, path);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_retries_bad_theme() {
        let path = std::env::temp_dir().join("aps-calc-init-test-missing/config.yaml");
        let (collected, out) = run("purple\nlight\nn\n\ndebug\n\n", path);
        let (_, config) = collected.unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(!config.print_report_on_exit);
        assert_eq!(config.log_level, "debug");
        assert!(out.contains("expected auto, dark or light"));
    }

    #[test]
    fn test_declining_overwrite_aborts() {
        let dir = std::env::temp_dir().join(format!("aps-calc-init-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "theme: dark\n").unwrap();

        let (collected, out) = run("\n\n\n\n\n\n", path.clone());
        assert!(collected.is_none());
        assert!(out.contains("Aborted."));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "theme: dark\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
