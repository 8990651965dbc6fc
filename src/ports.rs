use serde::Serialize;

use crate::record::ContainerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortCategory {
    Redis,
    Postgres,
    Http,
    App,
    Other,
}

impl PortCategory {
    pub const ALL: [PortCategory; 5] = [
        Self::Redis,
        Self::Postgres,
        Self::Http,
        Self::App,
        Self::Other,
    ];

    /// First matching rule wins. The http rule is a plain substring test, so
    /// any token containing `80` (e.g. `8080`, `9800`) lands there too.
    pub fn classify(token: &str) -> Self {
        if token.contains("6379") {
            Self::Redis
        } else if token.contains("5432") {
            Self::Postgres
        } else if token.contains("80") || token.contains("443") {
            Self::Http
        } else if token.contains("->") {
            Self::App
        } else {
            Self::Other
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Redis => "Redis ports",
            Self::Postgres => "PostgreSQL ports",
            Self::Http => "HTTP/HTTPS ports",
            Self::App => "Application ports",
            Self::Other => "Other ports",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortUsage {
    pub container: String,
    pub port: String,
}

/// Port mappings bucketed by category. Fields are declared in category
/// order, which is also the order they serialize in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortGroups {
    pub redis: Vec<PortUsage>,
    pub postgres: Vec<PortUsage>,
    pub http: Vec<PortUsage>,
    pub app: Vec<PortUsage>,
    pub other: Vec<PortUsage>,
}

impl PortGroups {
    pub fn get(&self, category: PortCategory) -> &[PortUsage] {
        match category {
            PortCategory::Redis => &self.redis,
            PortCategory::Postgres => &self.postgres,
            PortCategory::Http => &self.http,
            PortCategory::App => &self.app,
            PortCategory::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: PortCategory) -> &mut Vec<PortUsage> {
        match category {
            PortCategory::Redis => &mut self.redis,
            PortCategory::Postgres => &mut self.postgres,
            PortCategory::Http => &mut self.http,
            PortCategory::App => &mut self.app,
            PortCategory::Other => &mut self.other,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PortCategory, &[PortUsage])> {
        PortCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, usages)| usages.is_empty())
    }
}

pub fn analyze_ports(records: &[ContainerRecord]) -> PortGroups {
    let mut groups = PortGroups::default();

    for record in records.iter().filter(|r| r.has_ports()) {
        for token in record.port_tokens() {
            groups
                .get_mut(PortCategory::classify(token))
                .push(PortUsage {
                    container: record.names.clone(),
                    port: token.to_string(),
                });
        }
    }

    groups
}
