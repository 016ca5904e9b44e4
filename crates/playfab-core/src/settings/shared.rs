//! Process-wide shared settings.

use serde::{Deserialize, Serialize};

use super::{LogLevel, RequestTransport};
use crate::secret::Secret;

/// Process-wide SDK settings, loaded once from the settings store and
/// shared by every API call that does not override them.
///
/// All fields have defaults so a sparse settings file stays valid. The
/// struct is read-mostly: load it once at startup, then hand out shared
/// references. Updating fields while other threads resolve URLs is the
/// caller's problem to synchronize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedSettings {
    /// Title identifier issued by the backend's Game Manager. May stay
    /// empty for anonymous calls that do not address a specific title.
    pub title_id: String,
    /// Private-cluster name. Absent for standard multi-tenant deployments.
    pub vertical_name: Option<String>,
    /// Host used instead of the default public API host when set. May be a
    /// bare host or a full `http(s)://` prefix.
    pub production_environment_url: Option<String>,
    /// Developer secret key for server/admin APIs. Redacted from `Debug`.
    pub developer_secret_key: Option<Secret>,
    /// HTTP mechanism the transport layer should use.
    pub request_transport: RequestTransport,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u32,
    /// Keep connections alive between requests.
    pub request_keep_alive: bool,
    /// Compress API request/response bodies.
    pub compress_api_data: bool,
    /// Which classes of SDK log events are emitted.
    pub log_level: LogLevel,
    /// Host of an external log collector, if any.
    pub logger_host: Option<String>,
    /// Port of the external log collector (0 = unset).
    pub logger_port: u16,
    /// Forward log events to the collector as they happen instead of batching.
    pub enable_real_time_logging: bool,
    /// Maximum number of buffered log events per batch.
    pub log_cap_limit: u32,
    /// Prevent the advertising identifier from leaving the device.
    pub disable_advertising: bool,
    /// Prevent hardware information from leaving the device.
    pub disable_device_info: bool,
    /// Prevent focus-change telemetry from leaving the device.
    pub disable_focus_time_collection: bool,
    /// Local API server used when debugging against a developer machine.
    /// Carried as configuration only; URL resolution never consults it.
    pub local_api_server: Option<String>,
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self {
            title_id: String::new(),
            vertical_name: None,
            production_environment_url: None,
            developer_secret_key: None,
            request_transport: RequestTransport::default(),
            request_timeout_ms: 2000,
            request_keep_alive: false,
            compress_api_data: true,
            log_level: LogLevel::default(),
            logger_host: None,
            logger_port: 0,
            enable_real_time_logging: false,
            log_cap_limit: 30,
            disable_advertising: false,
            disable_device_info: false,
            disable_focus_time_collection: false,
            local_api_server: None,
        }
    }
}
