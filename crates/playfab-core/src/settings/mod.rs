//! Shared settings and per-call overrides.
//!
//! [`SharedSettings`] is the process-wide configuration loaded from the
//! settings store; [`ApiSettings`] carries optional per-call overrides.
//! Precedence between the two is applied by [`crate::endpoint`].

mod api;
mod log_level;
mod shared;
mod transport;

pub use api::ApiSettings;
pub use log_level::LogLevel;
pub use shared::SharedSettings;
pub use transport::RequestTransport;

/// Advertising identifier kind reported for iOS IDFA attribution.
pub const AD_TYPE_IDFA: &str = "Idfa";

/// Advertising identifier kind reported for the Android advertising id.
pub const AD_TYPE_ANDROID_ID: &str = "Adid";
