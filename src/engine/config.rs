//! Viewer configuration.
//!
//! `ViewerConfig` holds everything a [`CountryViewer`](crate::CountryViewer)
//! needs to know up front: where the country list lives, how the HTTP client
//! behaves, and how the result card is rendered. Sensible defaults are provided
//! via [`Default`], and [`ViewerConfig::builder()`] offers a fluent, validated
//! way to customize them.
//!
//! # Examples
//!
//! ```rust
//! use country_viewer::ViewerConfig;
//! use country_viewer::render::NumberLocale;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ViewerConfig::builder()
//!     .locale(NumberLocale::DeDe)
//!     .disable_trigger_while_loading(true)
//!     .build()?;
//! assert_eq!(cfg.endpoint.as_str(), "https://restcountries.com/v3.1/all");
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! [`ViewerConfigBuilder::build`] returns a [`ViewerConfigError`] when the
//! endpoint cannot be parsed or is not http(s), when a zero timeout or channel
//! capacity is given, or when the title or trigger label is empty.

use crate::engine::DEFAULT_CHANNEL_CAPACITY;
use crate::render::{NumberLocale, RenderOptions};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Endpoint returning every known country in a single JSON array.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_TITLE: &str = "🌍 Random Country Info";
pub const DEFAULT_TRIGGER_LABEL: &str = "Get a Country";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// URL that is fetched on every trigger
    pub endpoint: Url,
    /// User agent header. `None` sends the client default.
    pub user_agent: Option<String>,
    /// Request timeout. `None` waits forever.
    pub request_timeout: Option<Duration>,
    /// Number grouping used for the population field
    pub locale: NumberLocale,
    /// Fixed seed for the country picker. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Render the trigger as disabled while a fetch is in flight
    pub disable_trigger_while_loading: bool,
    pub title: String,
    pub trigger_label: String,
    /// Capacity of the command and event channels
    pub channel_capacity: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            user_agent: None,
            request_timeout: None,
            locale: NumberLocale::default(),
            rng_seed: None,
            disable_trigger_while_loading: false,
            title: DEFAULT_TITLE.to_string(),
            trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ViewerConfig {
    pub fn builder() -> ViewerConfigBuilder {
        ViewerConfigBuilder::default()
    }

    /// The subset of the configuration the render contract depends on.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            trigger_label: self.trigger_label.clone(),
            locale: self.locale,
            disable_trigger_while_loading: self.disable_trigger_while_loading,
        }
    }
}

/// Builder for [`ViewerConfig`].
#[derive(Debug, Clone, Default)]
pub struct ViewerConfigBuilder {
    inner: ViewerConfig,
    // Parsed in build() so a bad URL surfaces as a config error
    endpoint: Option<String>,
}

impl ViewerConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ViewerConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn endpoint<S: Into<String>>(mut self, url: S) -> Self {
        self.endpoint = Some(url.into());
        self
    }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = Some(ua.into())) }
    pub fn request_timeout(self, timeout: Duration) -> Self { self.map(|c| c.request_timeout = Some(timeout)) }
    pub fn locale(self, locale: NumberLocale) -> Self { self.map(|c| c.locale = locale) }
    pub fn rng_seed(self, seed: u64) -> Self { self.map(|c| c.rng_seed = Some(seed)) }
    pub fn disable_trigger_while_loading(self, on: bool) -> Self { self.map(|c| c.disable_trigger_while_loading = on) }
    pub fn title<S: Into<String>>(self, title: S) -> Self { self.map(|c| c.title = title.into()) }
    pub fn trigger_label<S: Into<String>>(self, label: S) -> Self { self.map(|c| c.trigger_label = label.into()) }
    pub fn channel_capacity(self, n: usize) -> Self { self.map(|c| c.channel_capacity = n) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut ViewerConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(mut self) -> Result<ViewerConfig, ViewerConfigError> {
        if let Some(raw) = self.endpoint.take() {
            self.inner.endpoint = Url::parse(&raw).map_err(|e| ViewerConfigError::InvalidEndpoint {
                url: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerConfigError {
    InvalidEndpoint { url: String, reason: String },
    UnsupportedScheme(String),
    ZeroTimeout,
    ZeroChannelCapacity,
    EmptyLabel(&'static str),
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerConfigError::InvalidEndpoint { url, reason } =>
                write!(f, "endpoint '{url}' is not a valid URL: {reason}"),
            ViewerConfigError::UnsupportedScheme(scheme) =>
                write!(f, "endpoint scheme '{scheme}' is not supported (expected http or https)"),
            ViewerConfigError::ZeroTimeout =>
                write!(f, "request_timeout must be greater than zero"),
            ViewerConfigError::ZeroChannelCapacity =>
                write!(f, "channel_capacity must be at least 1"),
            ViewerConfigError::EmptyLabel(field) =>
                write!(f, "{field} must not be empty"),
        }
    }
}
impl std::error::Error for ViewerConfigError {}

fn validate(c: &ViewerConfig) -> Result<(), ViewerConfigError> {
    if !matches!(c.endpoint.scheme(), "http" | "https") {
        return Err(ViewerConfigError::UnsupportedScheme(c.endpoint.scheme().to_string()));
    }
    if c.request_timeout.is_some_and(|t| t.is_zero()) {
        return Err(ViewerConfigError::ZeroTimeout);
    }
    if c.channel_capacity == 0 {
        return Err(ViewerConfigError::ZeroChannelCapacity);
    }
    if c.title.trim().is_empty() {
        return Err(ViewerConfigError::EmptyLabel("title"));
    }
    if c.trigger_label.trim().is_empty() {
        return Err(ViewerConfigError::EmptyLabel("trigger_label"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_rest_countries() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert!(cfg.user_agent.is_none());
        assert!(cfg.request_timeout.is_none());
        assert_eq!(cfg.locale, NumberLocale::EnUs);
        assert!(!cfg.disable_trigger_while_loading);
        assert_eq!(cfg.trigger_label, "Get a Country");
        assert_eq!(cfg.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn builder_applies_values() {
        let cfg = ViewerConfig::builder()
            .endpoint("http://localhost:8080/v3.1/all")
            .user_agent("country-viewer/0.1")
            .request_timeout(Duration::from_secs(5))
            .rng_seed(7)
            .with(|c| c.title = "Countries".into())
            .build()
            .unwrap();

        assert_eq!(cfg.endpoint.as_str(), "http://localhost:8080/v3.1/all");
        assert_eq!(cfg.user_agent.as_deref(), Some("country-viewer/0.1"));
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(cfg.rng_seed, Some(7));
        assert_eq!(cfg.title, "Countries");
    }

    #[test]
    fn builder_rejects_bad_values() {
        let err = ViewerConfig::builder().endpoint("not a url").build().unwrap_err();
        assert!(matches!(err, ViewerConfigError::InvalidEndpoint { .. }));

        let err = ViewerConfig::builder().endpoint("ftp://example.com/all").build().unwrap_err();
        assert_eq!(err, ViewerConfigError::UnsupportedScheme("ftp".into()));

        let err = ViewerConfig::builder().request_timeout(Duration::ZERO).build().unwrap_err();
        assert_eq!(err, ViewerConfigError::ZeroTimeout);

        let err = ViewerConfig::builder().channel_capacity(0).build().unwrap_err();
        assert_eq!(err, ViewerConfigError::ZeroChannelCapacity);

        let err = ViewerConfig::builder().trigger_label("  ").build().unwrap_err();
        assert_eq!(err, ViewerConfigError::EmptyLabel("trigger_label"));
    }

    #[test]
    fn render_options_follow_config() {
        let cfg = ViewerConfig::builder()
            .locale(NumberLocale::FrFr)
            .disable_trigger_while_loading(true)
            .build()
            .unwrap();
        let opts = cfg.render_options();
        assert_eq!(opts.locale, NumberLocale::FrFr);
        assert!(opts.disable_trigger_while_loading);
        assert_eq!(opts.title, DEFAULT_TITLE);
    }
}
