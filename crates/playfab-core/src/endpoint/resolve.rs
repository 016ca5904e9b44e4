//! Field-by-field precedence between per-call overrides and shared defaults.

use crate::settings::{ApiSettings, SharedSettings};

/// Default public API host used when neither the per-call overrides nor
/// the shared settings name an environment URL.
pub const DEFAULT_API_HOST: &str = "playfabapi.com";

/// Fully resolved endpoint fields for one API call.
///
/// Produced by [`Endpoint::resolve`]. Holding the merged values in one
/// struct keeps the precedence rule out of the URL builder and lets a
/// resolution be inspected before any URL is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host to call: a bare host (`playfabapi.com`) or a full URL prefix
    /// when the environment URL already carries a scheme.
    pub base_host: String,
    /// Private-cluster subdomain component; empty for multi-tenant.
    pub vertical_name: String,
    /// Title subdomain component; may be empty for anonymous calls.
    pub title_id: String,
}

impl Endpoint {
    /// Merge per-call overrides over shared defaults.
    ///
    /// First non-empty wins, each field decided independently, so a
    /// partially filled override object only shadows the fields it sets.
    pub fn resolve(overrides: Option<&ApiSettings>, defaults: &SharedSettings) -> Self {
        let base_host = pick(
            overrides.and_then(|o| o.production_environment_url.as_deref()),
            defaults.production_environment_url.as_deref(),
        )
        .unwrap_or(DEFAULT_API_HOST)
        .to_string();

        let vertical_name = pick(
            overrides.and_then(|o| o.vertical_name.as_deref()),
            defaults.vertical_name.as_deref(),
        )
        .unwrap_or("")
        .to_string();

        let title_id = pick(
            overrides.and_then(|o| o.title_id.as_deref()),
            Some(defaults.title_id.as_str()),
        )
        .unwrap_or("")
        .to_string();

        Self {
            base_host,
            vertical_name,
            title_id,
        }
    }
}

/// First non-empty candidate, if any.
fn pick<'a>(override_value: Option<&'a str>, default_value: Option<&'a str>) -> Option<&'a str> {
    override_value
        .filter(|value| !value.is_empty())
        .or_else(|| default_value.filter(|value| !value.is_empty()))
}
