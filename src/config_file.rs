use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use crate::{
    filter::QuickFilter,
    report::{DEFAULT_RULE_WIDTH, DEFAULT_TIMESTAMP_FORMAT, ReportOptions},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DockscopeConfigFile {
    pub report: ReportSection,
    pub output: OutputSection,
}

#[derive(Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    pub rule_width: NonZeroUsize,
    pub timestamp_format: String,
    /// Template file for the exported report. Relative paths are resolved
    /// against the directory of the config file.
    pub template: Option<PathBuf>,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            rule_width: NonZeroUsize::new(DEFAULT_RULE_WIDTH).unwrap_or(NonZeroUsize::MIN),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            template: None,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Quick filter applied when none is given on the command line.
    pub filter: QuickFilter,
    /// Show the per-application view after the table.
    pub groups: bool,
}

impl DockscopeConfigFile {
    fn try_init_from_string(val: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(val)?)
    }

    /// Reads the config file at `path`. A missing file is not an error, the
    /// defaults are used instead.
    pub fn try_init(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(config) => {
                log::debug!("Loading config from {}", path.display());
                Self::try_init_from_string(&config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn into_config(self, path: &Path) -> crate::config::DockscopeConfig {
        let base = path.parent().unwrap_or(Path::new("."));
        let template = self.report.template.map(|template| {
            if template.is_absolute() {
                template
            } else {
                base.join(template)
            }
        });

        crate::config::DockscopeConfig {
            report: ReportOptions {
                rule_width: self.report.rule_width.get(),
                timestamp_format: self.report.timestamp_format,
                template,
            },
            filter: self.output.filter,
            groups: self.output.groups,
        }
    }
}
