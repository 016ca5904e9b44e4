//! Per-call settings overrides.

use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// Optional per-call overrides applied on top of
/// [`SharedSettings`](super::SharedSettings).
///
/// Only non-empty fields take precedence; an empty string behaves the same
/// as an absent field, so partially filled override objects merge cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Title identifier for this call only.
    pub title_id: Option<String>,
    /// Private-cluster name for this call only.
    pub vertical_name: Option<String>,
    /// Host override for this call only.
    pub production_environment_url: Option<String>,
    /// Secret key override for this call only.
    pub developer_secret_key: Option<Secret>,
}
