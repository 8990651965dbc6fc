use crate::{filter::QuickFilter, report::ReportOptions};

/// Resolved settings, after the config file has been read.
#[derive(Debug, Clone, Default)]
pub struct DockscopeConfig {
    pub report: ReportOptions,
    pub filter: QuickFilter,
    pub groups: bool,
}
