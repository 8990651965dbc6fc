use serde::Serialize;

use crate::record::ContainerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Success,
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
}

/// Checks the whole container set and returns at most one alert per check,
/// in the order danger, warning, info. When no check fires, a single success
/// alert is returned instead.
pub fn alerts(records: &[ContainerRecord]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let stopped: Vec<&str> = records
        .iter()
        .filter(|r| r.is_exited())
        .map(|r| r.names.as_str())
        .collect();
    if !stopped.is_empty() {
        alerts.push(Alert {
            severity: Severity::Danger,
            icon: "⚠️",
            title: "Stopped containers found",
            message: format!(
                "{} container(s) have stopped: {}",
                stopped.len(),
                stopped.join(", ")
            ),
        });
    }

    let public = records
        .iter()
        .filter(|r| r.ports.contains("0.0.0.0"))
        .count();
    if public > 0 {
        alerts.push(Alert {
            severity: Severity::Warning,
            icon: "🌐",
            title: "Public ports exposed",
            message: format!(
                "{public} container(s) expose ports on all interfaces, review their security settings"
            ),
        });
    }

    let unchecked = records
        .iter()
        .filter(|r| r.is_running() && !r.is_healthy())
        .count();
    if unchecked > 0 {
        alerts.push(Alert {
            severity: Severity::Info,
            icon: "ℹ️",
            title: "Missing health checks",
            message: format!("{unchecked} running container(s) have no health check configured"),
        });
    }

    if alerts.is_empty() {
        alerts.push(Alert {
            severity: Severity::Success,
            icon: "✅",
            title: "All normal",
            message: "All containers are in good shape".to_string(),
        });
    }

    alerts
}
