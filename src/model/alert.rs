use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anomaly notification shown on the dashboard.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    /// `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    /// Label of the metric the alert refers to.
    pub metric: String,
}

// Create
impl Alert {
    pub fn new(
        id: impl ToString,
        severity: Severity,
        message: impl ToString,
        timestamp: impl ToString,
        metric: impl ToString,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            metric: metric.to_string(),
        }
    }
}
