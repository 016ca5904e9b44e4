//! Settings model and endpoint resolution for the PlayFab client SDK.
//!
//! This crate owns the configuration surface of the SDK: the shared
//! settings object, per-call overrides, and construction of fully
//! qualified API URLs. Request transport, retries and authentication live
//! in sibling crates and only consume what is resolved here.

pub mod config;
pub mod endpoint;
pub mod logging;
pub mod secret;
pub mod settings;

/// Version of this SDK crate.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string reported to the backend by the transport layer.
pub const VERSION_STRING: &str = concat!("RustSDK-", env!("CARGO_PKG_VERSION"));

/// Identifier of the build that produced this crate ("manual" outside CI).
pub const BUILD_IDENTIFIER: &str = "manual_build";
