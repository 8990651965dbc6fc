use serde::Serialize;

use crate::record::ContainerRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub running: usize,
    pub healthy: usize,
    pub with_ports: usize,
}

pub fn statistics(records: &[ContainerRecord]) -> Statistics {
    let count = |pred: fn(&ContainerRecord) -> bool| records.iter().filter(|r| pred(r)).count();

    Statistics {
        total: records.len(),
        running: count(ContainerRecord::is_running),
        healthy: count(ContainerRecord::is_healthy),
        with_ports: count(ContainerRecord::has_ports),
    }
}
