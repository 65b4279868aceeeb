//! App Configuration
//!
//! Chooses where the listing comes from. Defaults are baked in at build time,
//! the page query string can override them:
//! `?source=remote`, `?source=bundled`, `?endpoint=<url>`, `?timeout_ms=<n>`.
//! `source=bundled` wins over any `endpoint`, wherever it appears. Values are
//! form-decoded, so `+` reads as a space and a literal plus is `%2B`.

use percent_encoding::percent_decode_str;

pub const DEFAULT_ENDPOINT: &str = match option_env!("CATALOG_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/products.json",
};

pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

/// `setTimeout` takes a signed 32-bit delay
pub const MAX_FETCH_TIMEOUT_MS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// Compile-time sample listing
    Bundled,
    /// Fetched once on mount
    Remote { endpoint: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: ListingSource,
    pub fetch_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: ListingSource::Bundled,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Parse a `location.search` string (leading `?` optional)
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let mut endpoint: Option<String> = None;
        let mut remote = false;
        let mut bundled = false;

        for pair in search.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = percent_decode_str(&value).decode_utf8_lossy();
            match key {
                // Last `source` wins
                "source" => match &*value {
                    "remote" => {
                        remote = true;
                        bundled = false;
                    }
                    "bundled" => {
                        remote = false;
                        bundled = true;
                    }
                    _ => {}
                },
                "endpoint" if !value.is_empty() => endpoint = Some(value.into_owned()),
                "timeout_ms" => {
                    if let Ok(ms) = value.parse::<u32>() {
                        if ms > 0 && ms <= MAX_FETCH_TIMEOUT_MS {
                            config.fetch_timeout_ms = ms;
                        }
                    }
                }
                _ => {}
            }
        }

        if !bundled && (remote || endpoint.is_some()) {
            config.source = ListingSource::Remote {
                endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            };
        }
        config
    }

    /// Read overrides from the current page URL
    pub fn from_window() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
