use serde::{Deserialize, Serialize};

use crate::record::ContainerRecord;

/// Predefined views over the container list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    #[default]
    All,
    Healthy,
    Ports,
    #[serde(alias = "MaxKB")]
    Maxkb,
    Dify,
    #[serde(alias = "db")]
    Database,
}

impl QuickFilter {
    pub fn matches(&self, record: &ContainerRecord) -> bool {
        let image_or_name =
            |needle: &str| record.image.contains(needle) || record.names.contains(needle);

        match self {
            Self::All => true,
            Self::Healthy => record.is_healthy(),
            Self::Ports => record.has_ports(),
            Self::Maxkb => image_or_name("maxkb"),
            Self::Dify => image_or_name("dify"),
            Self::Database => {
                record.image.contains("redis")
                    || record.image.contains("postgres")
                    || record.names.contains("redis")
                    || record.names.contains("pgsql")
            }
        }
    }
}

/// Case-insensitive match against every column shown in the table.
///
/// The columns are searched as one space-joined line, so a term may span the
/// boundary between two adjacent columns.
pub fn matches_search(record: &ContainerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let haystack = [
        &record.names,
        &record.id,
        &record.image,
        &record.command,
        &record.created,
        &record.status,
        &record.ports,
    ]
    .iter()
    .map(|field| field.to_lowercase())
    .collect::<Vec<_>>()
    .join(" ");

    haystack.contains(&term.to_lowercase())
}

/// What the user is currently looking at: the parsed containers plus the
/// active filter and search term. Re-parsing replaces the whole session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<ContainerRecord>,
    pub filter: QuickFilter,
    pub search: String,
}

impl Session {
    pub fn load(records: Vec<ContainerRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: QuickFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn records(&self) -> &[ContainerRecord] {
        &self.records
    }

    pub fn visible(&self) -> Vec<ContainerRecord> {
        self.records
            .iter()
            .filter(|r| self.filter.matches(r) && matches_search(r, &self.search))
            .cloned()
            .collect()
    }
}
