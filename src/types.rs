use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Severity attached to a `LogEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Maps any severity name onto a known variant.
    ///
    /// Matching ignores case and surrounding whitespace. Names that are not
    /// recognised fall back to `Severity::Info` instead of being rejected.
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" | "notset" => Severity::Debug,
            "info" => Severity::Info,
            "warning" | "warn" => Severity::Warning,
            "error" => Severity::Error,
            "critical" | "fatal" => Severity::Critical,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::resolve(name)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name: Option<String> = Option::deserialize(deserializer)?;
        Ok(name.as_deref().map(Severity::resolve).unwrap_or_default())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// One log record as it travels from a worker to the sink.
///
/// Construction goes through [`LogEvent::new`] or deserialization, both of
/// which reject an empty `message` or `server_name`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawLogEvent")]
pub struct LogEvent {
    message: String,
    server_name: String,
    level: Severity,
    args: Vec<Value>,
}

#[derive(Deserialize)]
struct RawLogEvent {
    message: String,
    server_name: String,
    #[serde(default)]
    level: Severity,
    #[serde(default)]
    args: Option<Vec<Value>>,
}

impl TryFrom<RawLogEvent> for LogEvent {
    type Error = EventError;

    fn try_from(raw: RawLogEvent) -> Result<Self, Self::Error> {
        LogEvent::new(raw.message, raw.server_name, raw.level, raw.args.unwrap_or_default())
    }
}

impl LogEvent {
    pub fn new(
        message: impl Into<String>,
        server_name: impl Into<String>,
        level: Severity,
        args: Vec<Value>,
    ) -> Result<Self, EventError> {
        let message = message.into();
        let server_name = server_name.into();

        if message.is_empty() {
            return Err(EventError::EmptyField("message"));
        }
        if server_name.is_empty() {
            return Err(EventError::EmptyField("server_name"));
        }

        Ok(Self {
            message,
            server_name,
            level,
            args,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// Acknowledgement returned by the sink for every accepted event.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Ack {
    pub status: String,
    pub timestamp: String,
}

/// Result of one computation on the worker.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PowerResult {
    pub number: i64,
    pub power_of_2: i128,
}
