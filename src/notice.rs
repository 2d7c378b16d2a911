use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A short-lived message for the user. How (and whether) it is shown is up
/// to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// The user can act on this notice by retrying the geolocation probe.
    pub retry: bool,
}

impl Notice {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Info,
            retry: false,
        }
    }

    pub fn warning(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Warning,
            retry: false,
        }
    }

    pub fn with_retry(mut self) -> Self {
        self.retry = true;
        self
    }
}
