//! Configuration loading — embedded TOML with an optional page override.
//!
//! `folio.toml` is compiled into the module. A page may replace it with an
//! inline `<script type="application/toml" id="folio-config">` block. Every
//! field has a sensible default, so both are allowed to be partial.

use serde::Deserialize;

use folio_app::settings::PageSettings;
use folio_domain::fragment::Fragment;

/// Configuration compiled into the module.
pub const EMBEDDED: &str = include_str!("../folio.toml");

/// Selector of the inline override block.
pub const OVERRIDE_SCRIPT: &str = "script#folio-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Controller settings: `[theme]`, `[scroll]`, `[navbar]`, `[reveal]`
    /// and `[widgets.*]`.
    #[serde(flatten)]
    pub page: PageSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load the page override if it has any content, the embedded
    /// configuration otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen source is malformed or fails
    /// validation.
    pub fn load(page_override: Option<&str>) -> Result<Self, ConfigError> {
        let source = page_override
            .filter(|source| !source.trim().is_empty())
            .unwrap_or(EMBEDDED);
        let config = Self::from_toml(source)?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(ConfigError::Parse)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let scroll = &self.page.scroll;
        let thresholds = [
            ("navbar_raise", scroll.thresholds.navbar_raise),
            ("back_to_top", scroll.thresholds.back_to_top),
            ("probe_offset", scroll.thresholds.probe_offset),
            ("header_offset", scroll.header_offset),
        ];
        for (name, value) in thresholds {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "scroll.{name} must be a non-negative number"
                )));
            }
        }
        if !scroll.home_hash.starts_with('#') || Fragment::parse(&scroll.home_hash).is_none() {
            return Err(ConfigError::Validation(format!(
                "scroll.home_hash must look like `#section`, got {:?}",
                scroll.home_hash
            )));
        }
        if !(0.0..=1.0).contains(&self.page.reveal.threshold) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "folio_web=info,folio_app=info,folio_adapter_web_sys=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse page configuration")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
