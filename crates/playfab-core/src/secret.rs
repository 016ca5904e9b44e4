//! Redacting wrapper for secret keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secret string whose value never appears in `Debug` output.
///
/// There is intentionally no `Display` impl; the wrapped value is only
/// reachable through [`Secret::expose`], so exposure stays grep-able at
/// call sites.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the wrapped value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_value() {
        let secret = Secret::new("s3cret-key");
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("s3cret-key"));
        assert_eq!(printed, "Secret(***)");
    }

    #[test]
    fn expose_returns_value() {
        let secret = Secret::new("s3cret-key");
        assert_eq!(secret.expose(), "s3cret-key");
        assert!(!secret.is_empty());
        assert!(Secret::new("").is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        #[derive(Debug, serde::Serialize, serde::Deserialize)]
        struct Holder {
            key: Secret,
        }

        let parsed: Holder = toml::from_str(r#"key = "abc123""#).unwrap();
        assert_eq!(parsed.key.expose(), "abc123");

        let rendered = toml::to_string(&parsed).unwrap();
        assert!(rendered.contains("abc123"));
    }
}
