//! Site configuration.
//!
//! The landing page embeds `econest.toml` at build time and parses it with
//! [`SiteConfig::from_toml_str`]. Every key is optional:
//!
//! ```toml
//! title = "EcoNest"
//! theme = "light"
//! base_path = "/econest_landing"
//! hero_image = "assets/econest_hero.png"
//! log_level = "info"
//!
//! [timings]
//! submit_latency_ms = 1000
//! success_display_ms = 3000
//! toast_duration_ms = 4000
//! ```

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors while loading [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document is malformed or has wrongly typed keys
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// `base_path` must be empty or absolute
    #[error("base_path must be empty or start with '/': {0:?}")]
    InvalidBasePath(String),
    /// `log_level` is not a valid tracing filter directive
    #[error("invalid log_level {level:?}: {reason}")]
    InvalidLogLevel {
        /// The rejected directive
        level: String,
        /// Parser message
        reason: String,
    },
}

/// Colour theme. The page ships light only; dark is reserved for a switcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl Theme {
    /// Class put on the document element.
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Durations driving the waitlist flow and toasts, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Latency of the simulated submission
    pub submit_latency_ms: u64,
    /// How long the success panel stays before the form comes back
    pub success_display_ms: u64,
    /// Lifetime of a toast
    pub toast_duration_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1000,
            success_display_ms: 3000,
            toast_duration_ms: 4000,
        }
    }
}

impl Timings {
    /// [`Self::submit_latency_ms`] as a `Duration`.
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// [`Self::success_display_ms`] as a `Duration`.
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    /// [`Self::toast_duration_ms`] as a `Duration`.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Everything the page reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand / document title
    pub title: String,
    /// Initial theme
    pub theme: Theme,
    /// Path prefix the site is served under (`""` for the domain root)
    pub base_path: String,
    /// Hero illustration, relative to the served root
    pub hero_image: String,
    /// `EnvFilter` directive for the console logger
    pub log_level: String,
    /// Flow and toast durations
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "EcoNest".into(),
            theme: Theme::Light,
            base_path: "/econest_landing".into(),
            hero_image: "assets/econest_hero.png".into(),
            log_level: "info".into(),
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(source)?;
        config.base_path = normalize_base_path(&config.base_path)?;
        if let Err(err) = EnvFilter::try_new(&config.log_level) {
            return Err(ConfigError::InvalidLogLevel {
                level: config.log_level,
                reason: err.to_string(),
            });
        }
        Ok(config)
    }

    /// Hero image URL under the base path.
    pub fn hero_src(&self) -> String {
        format!("{}/{}", self.base_path, self.hero_image.trim_start_matches('/'))
    }
}

/// Strip trailing slashes; `"/"` becomes `""`.
fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.timings.submit_latency(), Duration::from_secs(1));
        assert_eq!(config.timings.success_display(), Duration::from_secs(3));
    }

    #[test]
    fn partial_timings_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            title = "EcoNest Beta"
            [timings]
            submit_latency_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "EcoNest Beta");
        assert_eq!(config.timings.submit_latency_ms, 10);
        assert_eq!(config.timings.success_display_ms, 3000);
    }

    #[test]
    fn theme_parses_lowercase() {
        let config = SiteConfig::from_toml_str(r#"theme = "dark""#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.theme.as_class(), "dark");
    }

    #[test]
    fn base_path_is_normalized() {
        let config = SiteConfig::from_toml_str(r#"base_path = "/econest_landing/""#).unwrap();
        assert_eq!(config.base_path, "/econest_landing");

        let root = SiteConfig::from_toml_str(r#"base_path = "/""#).unwrap();
        assert_eq!(root.base_path, "");
        assert_eq!(root.hero_src(), "/assets/econest_hero.png");
    }

    #[test]
    fn relative_base_path_is_rejected() {
        let err = SiteConfig::from_toml_str(r#"base_path = "econest""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = SiteConfig::from_toml_str(r#"log_level = "econest=loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("timings = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn hero_src_joins_base_path() {
        let config = SiteConfig::default();
        assert_eq!(config.hero_src(), "/econest_landing/assets/econest_hero.png");
    }
}
