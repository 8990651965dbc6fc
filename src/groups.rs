use serde::Serialize;

use crate::record::ContainerRecord;

pub const OTHER_GROUP: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationGroup {
    pub name: &'static str,
    pub containers: Vec<ContainerRecord>,
}

/// Containers grouped by application, in the order each group was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApplicationGroups {
    inner: Vec<ApplicationGroup>,
}

impl ApplicationGroups {
    pub fn iter(&self) -> impl Iterator<Item = &ApplicationGroup> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn push(&mut self, name: &'static str, record: ContainerRecord) {
        match self.inner.iter_mut().find(|group| group.name == name) {
            Some(group) => group.containers.push(record),
            None => self.inner.push(ApplicationGroup {
                name,
                containers: vec![record],
            }),
        }
    }
}

/// Picks the application a container belongs to. MaxKB and Dify are matched on
/// the image or the container name, the rest on the image only.
pub fn application_of(record: &ContainerRecord) -> &'static str {
    let either = |needle: &str| record.image.contains(needle) || record.names.contains(needle);

    if either("maxkb") {
        "MaxKB"
    } else if either("dify") {
        "Dify"
    } else if record.image.contains("redis") {
        "Redis"
    } else if record.image.contains("postgres") {
        "PostgreSQL"
    } else if record.image.contains("nginx") {
        "Nginx"
    } else {
        OTHER_GROUP
    }
}

#[cfg(test)]
impl ApplicationGroups {
    pub fn get(&self, name: &str) -> Option<&[ContainerRecord]> {
        self.inner
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.containers.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.inner.iter().map(|group| group.name)
    }
}

pub fn group_by_application(records: &[ContainerRecord]) -> ApplicationGroups {
    let mut groups = ApplicationGroups::default();
    for record in records {
        groups.push(application_of(record), record.clone());
    }
    groups
}
