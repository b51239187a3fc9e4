//! Environment-driven API configuration.

use std::path::PathBuf;

use stockwise_analytics::{DEFAULT_MONTHS, MAX_MONTHS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `STOCKWISE_BIND_ADDR`
    pub bind_addr: String,
    /// `STOCKWISE_PUBLIC_URL`; base for relative image references.
    pub public_url: String,
    /// `STOCKWISE_SEED_PATH`; JSON snapshot loaded at startup.
    pub seed_path: Option<PathBuf>,
    /// `STOCKWISE_DEFAULT_MONTHS`; window used when a request omits `months`.
    pub default_months: i32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            public_url: "http://localhost:8080".to_string(),
            seed_path: None,
            default_months: DEFAULT_MONTHS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("STOCKWISE_BIND_ADDR").unwrap_or_else(|| {
            tracing::info!(addr = %defaults.bind_addr, "STOCKWISE_BIND_ADDR not set; using default");
            defaults.bind_addr.clone()
        });

        let public_url = lookup("STOCKWISE_PUBLIC_URL").unwrap_or_else(|| {
            tracing::warn!(url = %defaults.public_url, "STOCKWISE_PUBLIC_URL not set; image links use dev default");
            defaults.public_url.clone()
        });

        let seed_path = lookup("STOCKWISE_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let default_months = match lookup("STOCKWISE_DEFAULT_MONTHS") {
            None => defaults.default_months,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(m) if (1..=MAX_MONTHS).contains(&m) => m,
                _ => {
                    tracing::warn!(value = %raw, "invalid STOCKWISE_DEFAULT_MONTHS; using {}", DEFAULT_MONTHS);
                    DEFAULT_MONTHS
                }
            },
        };

        Self {
            bind_addr,
            public_url,
            seed_path,
            default_months,
        }
    }
}
