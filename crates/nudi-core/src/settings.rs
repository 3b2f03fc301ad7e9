//! Global settings loaded from TOML, following the same OnceLock pattern as the symbol table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub limits: LimitSettings,
    pub analyzer: AnalyzerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    /// Upper bound for `transliterate_bounded`, in characters.
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerSettings {
    pub top_n: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(limits.max_input_chars);
    check_positive_usize!(analyzer.top_n);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.limits.max_input_chars, 1_000_000);
        assert_eq!(s.analyzer.top_n, 20);
    }

    #[test]
    fn global_settings_match_default() {
        assert_eq!(settings().analyzer.top_n, 20);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[limits]
max_input_chars = 5000

[analyzer]
top_n = 50
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.limits.max_input_chars, 5000);
        assert_eq!(s.analyzer.top_n, 50);
    }

    #[test]
    fn error_zero_limit() {
        let toml = r#"
[limits]
max_input_chars = 0

[analyzer]
top_n = 20
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("limits.max_input_chars"));
    }

    #[test]
    fn error_zero_top_n() {
        let toml = r#"
[limits]
max_input_chars = 100

[analyzer]
top_n = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("analyzer.top_n"));
    }

    #[test]
    fn error_negative_is_parse_error() {
        let toml = r#"
[limits]
max_input_chars = -1

[analyzer]
top_n = 20
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[limits]
max_input_chars = 100
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
