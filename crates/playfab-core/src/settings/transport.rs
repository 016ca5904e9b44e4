//! Transport selection knob.

use serde::{Deserialize, Serialize};

/// HTTP mechanism the transport layer should use for API calls.
///
/// The transport implementation itself lives outside this crate; the
/// settings layer only records the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestTransport {
    /// Worker-thread pool issuing requests off the calling thread.
    #[default]
    Threaded,
    /// Synchronous requests on the calling thread.
    Blocking,
    /// Caller-supplied transport registered with the SDK at startup.
    Custom,
}
