use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use minijinja::{Environment, context};

use crate::{record::ContainerRecord, stats::statistics};

const DEFAULT_TEMPLATE: &str = "Docker container analysis report
Generated at: {{ generated_at }}

Statistics:
- Total containers: {{ stats.total }}
- Running: {{ stats.running }}
- Healthy: {{ stats.healthy }}
- With port mappings: {{ stats.with_ports }}

Details:
{% for c in containers %}
Name: {{ c.names }}
ID: {{ c.id }}
Image: {{ c.image }}
Status: {{ c.status }}
Ports: {% if c.ports %}{{ c.ports }}{% else %}none{% endif %}
Created: {{ c.created }}
{{ rule }}
{% endfor %}";

pub const DEFAULT_RULE_WIDTH: usize = 80;
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Templating error: {0:?}")]
    Template(#[from] minijinja::Error),
    #[error("Invalid timestamp format: {0}")]
    TimestampFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Width of the `=` line that closes every container block.
    pub rule_width: usize,
    /// strftime-style format for the generation time.
    pub timestamp_format: String,
    /// Optional template file replacing the built-in layout.
    pub template: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            rule_width: DEFAULT_RULE_WIDTH,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            template: None,
        }
    }
}

impl ReportOptions {
    pub fn rule(&self) -> String {
        "=".repeat(self.rule_width)
    }
}

pub fn export_report(
    records: &[ContainerRecord],
    options: &ReportOptions,
) -> Result<String, ReportError> {
    export_report_at(records, Local::now(), options)
}

/// Renders the plain-text report for `records` as of `generated_at`.
pub fn export_report_at(
    records: &[ContainerRecord],
    generated_at: DateTime<Local>,
    options: &ReportOptions,
) -> Result<String, ReportError> {
    let mut timestamp = String::new();
    write!(timestamp, "{}", generated_at.format(&options.timestamp_format))
        .map_err(|_| ReportError::TimestampFormat(options.timestamp_format.clone()))?;

    let source = match &options.template {
        Some(path) => {
            log::debug!("Using report template {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
    let template = env.template_from_str(&source)?;
    Ok(template.render(context! {
        generated_at => timestamp,
        stats => statistics(records),
        containers => records,
        rule => options.rule(),
    })?)
}

/// File name used when no output path is given, e.g. `docker-analysis-1760875200000.txt`.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("docker-analysis-{}.txt", now.timestamp_millis())
}

pub fn write_report(path: &Path, report: &str) -> Result<(), ReportError> {
    std::fs::write(path, report)?;
    log::info!("Report written to {}", path.display());
    Ok(())
}
