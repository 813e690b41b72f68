//! Storefront configuration.
//!
//! Both settings are read by the frontend at compile time:
//!
//! - `BACKEND_URL`, handed to [`StorefrontConfig::from_backend_url`]; blank or
//!   missing values fall back to [`DEFAULT_BACKEND_URL`].
//! - `CATALOG_OVERLAP`, handed to [`OverlapPolicy::from_setting`]; `supersede`
//!   selects [`OverlapPolicy::Supersede`], anything else keeps the default.

/// Backend used when no URL is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const PRODUCTS_PATH: &str = "/api/products";
const SEED_PATH: &str = "/api/products/seed";

/// What to do when a catalog load is triggered while another is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Ignore the new trigger and let the running load finish.
    #[default]
    Reject,
    /// Start a new load; the older one's result is discarded when it arrives.
    Supersede,
}

impl OverlapPolicy {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("supersede") => OverlapPolicy::Supersede,
            _ => OverlapPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub backend_url: String,
    pub overlap: OverlapPolicy,
}

impl StorefrontConfig {
    pub fn from_backend_url(value: Option<&str>) -> Self {
        let backend_url = value
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();

        Self {
            backend_url,
            overlap: OverlapPolicy::default(),
        }
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// `GET` endpoint returning the product list.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.backend_url, PRODUCTS_PATH)
    }

    /// `POST` endpoint that fills an empty product store with default data.
    pub fn seed_url(&self) -> String {
        format!("{}{}", self.backend_url, SEED_PATH)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::from_backend_url(None)
    }
}
