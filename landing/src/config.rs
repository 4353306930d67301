//! Page configuration.
//!
//! Defaults cover the production page. The only runtime knob is the log level,
//! taken from the `log` query parameter (`/?log=debug`).

use std::str::FromStr;

use tracing::Level;
use web_sys::UrlSearchParams;

use crate::error::{LandingError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Brand shown in the footer and copyright line.
    pub brand: &'static str,
    pub copyright_year: u16,
    /// Id of the host element the page is mounted into.
    pub mount_id: &'static str,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "SaaS Platform",
            copyright_year: 2024,
            mount_id: "root",
            log_level: Level::INFO,
        }
    }
}

impl SiteConfig {
    /// Defaults with the given `log` parameter value applied, if any.
    pub fn with_log_param(value: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = value {
            config.log_level =
                Level::from_str(value).map_err(|_| LandingError::InvalidLogLevel(value.to_string()))?;
        }
        Ok(config)
    }

    /// Applies a URL query string (with or without the leading `?`).
    ///
    /// Decoding follows the browser's `URLSearchParams`: values are
    /// percent-decoded and the first `log` wins. Unknown parameters are ignored.
    pub fn from_query(query: &str) -> Result<Self> {
        let params = UrlSearchParams::new_with_str(query)
            .map_err(|_| LandingError::InvalidQuery(query.to_string()))?;
        Self::with_log_param(params.get("log").as_deref())
    }

    /// Reads the query string of the current page.
    pub fn from_location() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        // A location without a readable search string behaves like an empty one.
        let search = window.location().search().unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_parameter_keeps_defaults() {
        assert_eq!(SiteConfig::with_log_param(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn log_parameter_sets_level() {
        let config = SiteConfig::with_log_param(Some("debug")).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = SiteConfig::with_log_param(Some("TRACE")).unwrap();
        assert_eq!(config.log_level, Level::TRACE);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = SiteConfig::with_log_param(Some("loud")).unwrap_err();
        assert_eq!(err, LandingError::InvalidLogLevel("loud".into()));
        assert!(err.to_string().contains("loud"));

        let err = SiteConfig::with_log_param(Some("")).unwrap_err();
        assert_eq!(err, LandingError::InvalidLogLevel(String::new()));
    }
}
