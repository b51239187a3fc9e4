//! Product image references.

use serde::{Deserialize, Serialize};

/// Path segment under which relative image file names are served.
pub const IMAGE_ROUTE: &str = "/api/files/images/";

/// Image reference stored on a catalog item: either an absolute URL or a
/// file name relative to the storefront's file route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Resolve into a public URL.
    ///
    /// Absolute URLs pass through, file names are joined onto `public_url`,
    /// blank references resolve to `None`.
    pub fn resolve(&self, public_url: &str) -> Option<String> {
        if self.0.trim().is_empty() {
            return None;
        }
        if self.is_absolute() {
            return Some(self.0.clone());
        }
        Some(format!(
            "{}{}{}",
            public_url.trim_end_matches('/'),
            IMAGE_ROUTE,
            self.0.trim_start_matches('/')
        ))
    }
}
