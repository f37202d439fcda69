//! Client configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use analytics_core::{DashboardSession, HttpAnalyticsClient};
use analytics_spi::{AnalyticsError, FeatureQuery, Result};
use serde::{Deserialize, Serialize};
use shaping_api::{ShapingConfig, Shaper};
use tracing::{debug, info};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "CAPPLAN_API_BASE";

/// Connection and shaping settings.
///
/// ```toml
/// base_url = "http://analytics.internal:8000"
/// timeout_secs = 10
///
/// [shaping]
/// strong_threshold = 0.85
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Rows per feature page
    pub page_size: u32,
    pub user_agent: String,
    pub shaping: ShapingConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            page_size: 50,
            user_agent: format!("capplan/{}", env!("CARGO_PKG_VERSION")),
            shaping: ShapingConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| AnalyticsError::ConfigError(format!("Failed to parse TOML: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AnalyticsError::ConfigError(format!(
                "Failed to read config file at {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Layered load: defaults, then the file if it exists, then the process
    /// environment. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading config file");
                Self::from_file(path)?
            }
            Some(path) => {
                info!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "config loaded");
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AnalyticsError::ConfigError(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AnalyticsError::ConfigError(
                "timeout_secs must be positive".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(AnalyticsError::ConfigError(
                "page_size must be positive".to_string(),
            ));
        }
        self.shaping.validate()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// First feature page with the configured page size.
    pub fn feature_query(&self) -> FeatureQuery {
        FeatureQuery::default().with_page(1, self.page_size)
    }

    pub fn client(&self) -> Result<HttpAnalyticsClient> {
        HttpAnalyticsClient::with_options(&self.base_url, self.timeout(), Some(&self.user_agent))
    }

    pub fn session(&self) -> Result<DashboardSession<HttpAnalyticsClient>> {
        let shaper = Shaper::new(self.shaping.clone())?;
        Ok(DashboardSession::new(self.client()?, shaper))
    }
}
