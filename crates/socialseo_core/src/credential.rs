//! Access credential.

use serde::{Deserialize, Serialize};

/// Opaque API key. `Debug` never prints the secret.
///
/// # Examples
///
/// ```
/// use socialseo_core::ApiKey;
///
/// let key = ApiKey::new("AIza-secret");
/// assert_eq!(format!("{:?}", key), "ApiKey(<redacted>)");
/// assert_eq!(key.expose(), "AIza-secret");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Surrounding whitespace is dropped.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The raw key, for placing in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when no key material is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiKey(<empty>)")
        } else {
            write!(f, "ApiKey(<redacted>)")
        }
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
