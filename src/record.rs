//! Line-delimited-JSON log record, the collaborator shape the canonical
//! log-aggregation pipeline parses with [`try_map`](crate::combinator::try_map).
//!
//! One JSON object per line, no surrounding array, no multi-line records:
//!
//! ```text
//! {"timestamp":"2026-08-07T09:15:04.221Z","app":"auth","severity":"warn","msg":"token expiring"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Severity of a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Whether the record demands attention (`warn` or `error`).
    pub const fn is_actionable(self) -> bool {
        matches!(self, Severity::Warn | Severity::Error)
    }
}

/// One structured log event on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event instant, ISO-8601 on the wire.
    pub timestamp: DateTime<Utc>,
    /// Producing application; may be empty.
    #[serde(default)]
    pub app: String,
    pub severity: Severity,
    pub msg: String,
}

impl LogRecord {
    /// Parse one line of line-delimited JSON into a record.
    ///
    /// Shaped to slot straight into a fallible map over a line source:
    ///
    /// ```rust
    /// use std::io::Cursor;
    /// use pullseq::prelude::*;
    /// use pullseq::record::{LogRecord, Severity};
    ///
    /// let line = br#"{"timestamp":"2026-08-07T09:15:04Z","app":"auth","severity":"warn","msg":"token expiring"}"#;
    /// let mut seq = lines(Cursor::new(&line[..])).try_map(|l| LogRecord::parse(&l));
    /// let record = seq.next().unwrap_item();
    /// assert_eq!(record.app, "auth");
    /// assert_eq!(record.severity, Severity::Warn);
    /// ```
    pub fn parse(line: &[u8]) -> Result<LogRecord> {
        serde_json::from_slice(line).map_err(Error::transform)
    }
}
