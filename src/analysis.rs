use serde::Serialize;

use crate::{
    alerts::{Alert, alerts},
    filter::Session,
    groups::{ApplicationGroups, group_by_application},
    ports::{PortGroups, analyze_ports},
    record::ContainerRecord,
    stats::{Statistics, statistics},
};

/// Everything derived from one session. Recomputed from scratch on every
/// call; nothing here is cached.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub statistics: Statistics,
    pub alerts: Vec<Alert>,
    pub ports: PortGroups,
    pub groups: ApplicationGroups,
    /// Only the rows passing the session's filter and search.
    pub containers: Vec<ContainerRecord>,
}

impl Analysis {
    /// Statistics, alerts, ports and groups always cover every loaded
    /// container. The filter and search only narrow `containers`.
    pub fn of_session(session: &Session) -> Self {
        let records = session.records();
        Self {
            statistics: statistics(records),
            alerts: alerts(records),
            ports: analyze_ports(records),
            groups: group_by_application(records),
            containers: session.visible(),
        }
    }
}

#[cfg(test)]
impl Analysis {
    pub fn new(containers: Vec<ContainerRecord>) -> Self {
        Self::of_session(&Session::load(containers))
    }
}
