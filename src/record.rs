use serde::Serialize;

/// One row of a `docker ps` table.
///
/// Every field is kept as the raw text of its column. Classification is done
/// with substring tests on `status` and `ports`, never by parsing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerRecord {
    pub id: String,
    pub image: String,
    pub command: String,
    pub created: String,
    pub status: String,
    pub ports: String,
    pub names: String,
}

/// Coarse state of a container as shown in the table and group views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Healthy,
    Up,
    Exited,
}

impl ContainerRecord {
    pub fn is_running(&self) -> bool {
        self.status.contains("Up")
    }

    pub fn is_healthy(&self) -> bool {
        self.status.contains("healthy")
    }

    pub fn is_exited(&self) -> bool {
        self.status.contains("Exited")
    }

    pub fn has_ports(&self) -> bool {
        !self.ports.is_empty()
    }

    /// Healthy wins over running; anything that is neither counts as exited.
    pub fn status_class(&self) -> StatusClass {
        if self.is_healthy() {
            StatusClass::Healthy
        } else if self.is_running() {
            StatusClass::Up
        } else {
            StatusClass::Exited
        }
    }

    /// The individual port mappings, trimmed, in column order.
    pub fn port_tokens(&self) -> impl Iterator<Item = &str> {
        self.ports
            .split(',')
            .map(str::trim)
            .filter(move |_| self.has_ports())
    }
}

/// Whether a port mapping is bound on every interface.
pub fn is_external_port(token: &str) -> bool {
    token.contains("0.0.0.0") || token.contains(":::")
}

#[cfg(test)]
pub(crate) fn record(image: &str, status: &str, ports: &str, names: &str) -> ContainerRecord {
    ContainerRecord {
        id: "9df7471a0773".to_string(),
        image: image.to_string(),
        command: "\"/entrypoint.sh\"".to_string(),
        created: "3 weeks ago".to_string(),
        status: status.to_string(),
        ports: ports.to_string(),
        names: names.to_string(),
    }
}
