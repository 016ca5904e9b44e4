//! SDK log-level flag set.

use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Which classes of SDK log events are emitted.
    ///
    /// The empty set silences SDK logging entirely. In the settings file
    /// the value is a list of flag names, e.g. `log_level = ["warning", "error"]`;
    /// `"all"` and `"none"` are accepted as shorthands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LogLevel: u8 {
        const DEBUG = 1 << 0;
        const INFO = 1 << 1;
        const WARNING = 1 << 2;
        const ERROR = 1 << 3;
        const ALL = Self::DEBUG.bits()
            | Self::INFO.bits()
            | Self::WARNING.bits()
            | Self::ERROR.bits();
    }
}

/// Settings-file name of each basic flag, most verbose first.
const NAMED_FLAGS: [(&str, LogLevel); 4] = [
    ("debug", LogLevel::DEBUG),
    ("info", LogLevel::INFO),
    ("warning", LogLevel::WARNING),
    ("error", LogLevel::ERROR),
];

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::WARNING | LogLevel::ERROR
    }
}

impl LogLevel {
    /// Tracing filter directive for this flag set.
    ///
    /// Tracing filters by a single verbosity threshold, so the most verbose
    /// enabled flag decides the directive.
    pub fn filter_directive(self) -> &'static str {
        if self.contains(LogLevel::DEBUG) {
            "debug"
        } else if self.contains(LogLevel::INFO) {
            "info"
        } else if self.contains(LogLevel::WARNING) {
            "warn"
        } else if self.contains(LogLevel::ERROR) {
            "error"
        } else {
            "off"
        }
    }
}

fn flag_from_name(name: &str) -> Option<LogLevel> {
    match name {
        "all" => return Some(LogLevel::ALL),
        "none" => return Some(LogLevel::empty()),
        _ => {}
    }
    NAMED_FLAGS
        .iter()
        .find(|(flag_name, _)| *flag_name == name)
        .map(|(_, flag)| *flag)
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut names: Vec<&str> = Vec::new();
        for (name, flag) in NAMED_FLAGS {
            if self.contains(flag) {
                names.push(name);
            }
        }
        names.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut level = LogLevel::empty();
        for name in &names {
            level |= flag_from_name(name)
                .ok_or_else(|| D::Error::custom(format!("unknown log level {name:?}")))?;
        }
        Ok(level)
    }
}
