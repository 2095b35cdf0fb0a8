use serde::{Deserialize, Serialize};

/// Full text of the 2023 ACR/EULAR APS classification criteria
pub const DEFAULT_REFERENCE_URL: &str = "https://doi.org/10.1002/art.42624";

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// theme: dark
/// print_report_on_exit: true
/// log_level: warn
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Color palette for the TUI
    #[serde(default)]
    pub theme: ThemeMode,

    /// Link opened by the "full text" key
    #[serde(default = "default_reference_url")]
    pub reference_url: String,

    /// Print the EMR-ready score block to stdout after leaving the TUI
    #[serde(default = "default_print_report")]
    pub print_report_on_exit: bool,

    /// tracing filter directive (e.g. "warn", "aps_calc=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

fn default_reference_url() -> String {
    DEFAULT_REFERENCE_URL.to_string()
}

fn default_print_report() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            reference_url: default_reference_url(),
            print_report_on_exit: default_print_report(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Auto);
        assert_eq!(config.reference_url, DEFAULT_REFERENCE_URL);
        assert!(config.print_report_on_exit);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            theme: ThemeMode::Light,
            reference_url: "https://example.org/aps".to_string(),
            print_report_on_exit: false,
            log_level: "debug".to_string(),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
theme: dark
print_report_on_exit: false
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(!config.print_report_on_exit);
        assert_eq!(config.reference_url, DEFAULT_REFERENCE_URL);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "queries: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let yaml = "theme: solarized\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
