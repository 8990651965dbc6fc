//! Container records straight from the local Docker daemon.
//!
//! The daemon's container summaries are rendered the way `docker ps` prints
//! them, so the rest of the analysis cannot tell them apart from pasted text.

use std::fmt::Display;

use bollard::{Docker, models::ContainerSummary, query_parameters::ListContainersOptionsBuilder};

use crate::record::ContainerRecord;

/// `docker ps` truncates commands to this many characters.
const COMMAND_WIDTH: usize = 20;
const ID_WIDTH: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    #[error("Docker API error: {0}")]
    DockerApi(#[from] bollard::errors::Error),
}

pub async fn fetch_records(all: bool) -> Result<Vec<ContainerRecord>, LiveError> {
    let docker = Docker::connect_with_local_defaults()?;
    let options = ListContainersOptionsBuilder::new().all(all).build();
    let summaries = docker.list_containers(Some(options)).await?;
    log::info!("Fetched {} container(s) from the Docker daemon", summaries.len());

    let now = chrono::Utc::now().timestamp();
    Ok(summaries
        .into_iter()
        .map(|summary| record_from_summary(summary, now))
        .collect())
}

fn record_from_summary(summary: ContainerSummary, now: i64) -> ContainerRecord {
    let ports = summary
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(|port| {
            let proto = port.typ.map(|t| t.to_string()).unwrap_or_default();
            format_port(port.ip.as_deref(), port.private_port, port.public_port, &proto)
        })
        .collect::<Vec<_>>()
        .join(", ");

    ContainerRecord {
        id: short_id(summary.id.as_deref().unwrap_or_default()),
        image: summary.image.unwrap_or_default(),
        command: quote_command(summary.command.as_deref().unwrap_or_default()),
        created: summary
            .created
            .map(|created| format!("{} ago", human_duration(now - created)))
            .unwrap_or_default(),
        status: summary.status.unwrap_or_default(),
        ports,
        names: container_names(summary.names.unwrap_or_default()),
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(ID_WIDTH).collect()
}

fn container_names(names: Vec<String>) -> String {
    names
        .iter()
        .map(|name| name.trim_start_matches('/'))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_command(command: &str) -> String {
    if command.chars().count() > COMMAND_WIDTH {
        let head: String = command.chars().take(COMMAND_WIDTH - 1).collect();
        format!("\"{head}…\"")
    } else {
        format!("\"{command}\"")
    }
}

/// `0.0.0.0:9003->8080/tcp` when published, `5432/tcp` otherwise.
fn format_port(
    ip: Option<&str>,
    private: impl Display,
    public: Option<impl Display>,
    proto: &str,
) -> String {
    let proto = if proto.is_empty() { "tcp" } else { proto };
    match public {
        Some(public) => format!("{}:{public}->{private}/{proto}", ip.unwrap_or_default()),
        None => format!("{private}/{proto}"),
    }
}

/// Same wording as the Docker CLI uses for `CREATED` and `STATUS`.
fn human_duration(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = (seconds + 1800) / 3600;

    if seconds < 1 {
        "Less than a second".to_string()
    } else if seconds == 1 {
        "1 second".to_string()
    } else if seconds < 60 {
        format!("{seconds} seconds")
    } else if minutes == 1 {
        "About a minute".to_string()
    } else if minutes < 60 {
        format!("{minutes} minutes")
    } else if hours == 1 {
        "About an hour".to_string()
    } else if hours < 48 {
        format!("{hours} hours")
    } else if hours < 24 * 7 * 2 {
        format!("{} days", hours / 24)
    } else if hours < 24 * 30 * 2 {
        format!("{} weeks", hours / 24 / 7)
    } else if hours < 24 * 365 * 2 {
        format!("{} months", hours / 24 / 30)
    } else {
        format!("{} years", hours / 24 / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{groups::application_of, parser::parse};

    #[test]
    fn test_format_port() {
        assert_eq!(
            format_port(Some("0.0.0.0"), 8080u16, Some(9003u16), "tcp"),
            "0.0.0.0:9003->8080/tcp"
        );
        assert_eq!(format_port(Some("::"), 80u16, Some(9004u16), "tcp"), ":::9004->80/tcp");
        assert_eq!(format_port(None, 5432u16, None::<u16>, "tcp"), "5432/tcp");
        assert_eq!(format_port(None, 53u16, None::<u16>, "udp"), "53/udp");
        assert_eq!(format_port(None, 6379u16, None::<u16>, ""), "6379/tcp");
    }

    #[test]
    fn test_quote_command_truncates_like_docker() {
        assert_eq!(quote_command("/main"), "\"/main\"");
        assert_eq!(
            quote_command("bash -c /usr/bin/start-all.sh"),
            "\"bash -c /usr/bin/st…\""
        );
        assert_eq!(quote_command("12345678901234567890"), "\"12345678901234567890\"");
    }

    #[test]
    fn test_names_and_id() {
        assert_eq!(container_names(vec!["/docker-redis-1".to_string()]), "docker-redis-1");
        assert_eq!(
            container_names(vec!["/web".to_string(), "/proxy/web".to_string()]),
            "web,proxy/web"
        );
        assert_eq!(
            short_id("12fccc32e7ec5b0d1f8e9b7a1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d"),
            "12fccc32e7ec"
        );
    }

    #[test]
    fn test_human_duration() {
        assert_eq!(human_duration(0), "Less than a second");
        assert_eq!(human_duration(1), "1 second");
        assert_eq!(human_duration(42), "42 seconds");
        assert_eq!(human_duration(90), "About a minute");
        assert_eq!(human_duration(25 * 60), "25 minutes");
        assert_eq!(human_duration(70 * 60), "About an hour");
        assert_eq!(human_duration(5 * 3600), "5 hours");
        assert_eq!(human_duration(3 * 86400), "3 days");
        assert_eq!(human_duration(21 * 86400), "3 weeks");
        assert_eq!(human_duration(90 * 86400), "3 months");
        assert_eq!(human_duration(800 * 86400), "2 years");
    }

    #[test]
    fn test_record_from_summary() {
        let now = 1_760_000_000;
        let summary = ContainerSummary {
            id: Some("12fccc32e7ec5b0d1f8e9b7a1c2d3e4f".to_string()),
            names: Some(vec!["/docker-redis-1".to_string()]),
            image: Some("redis:6-alpine".to_string()),
            command: Some("docker-entrypoint.sh redis-server".to_string()),
            created: Some(now - 21 * 86400),
            status: Some("Up 3 weeks (healthy)".to_string()),
            ..Default::default()
        };
        let record = record_from_summary(summary, now);

        assert_eq!(record.id, "12fccc32e7ec");
        assert_eq!(record.names, "docker-redis-1");
        assert_eq!(record.command, "\"docker-entrypoint.s…\"");
        assert_eq!(record.created, "3 weeks ago");
        assert_eq!(record.ports, "");
        assert!(record.is_healthy());
        assert_eq!(application_of(&record), "Redis");
    }

    #[test]
    fn test_live_records_render_as_parseable_rows() {
        let record = record_from_summary(
            ContainerSummary {
                id: Some("9c82aa0a8ec8".to_string()),
                names: Some(vec!["/docker-db-1".to_string()]),
                image: Some("postgres:15-alpine".to_string()),
                command: Some("docker-entrypoint.sh postgres".to_string()),
                created: Some(0),
                status: Some("Up 3 weeks (healthy)".to_string()),
                ..Default::default()
            },
            2 * 86400,
        );
        let line = [
            record.id.as_str(),
            record.image.as_str(),
            record.command.as_str(),
            record.created.as_str(),
            record.status.as_str(),
            "5432/tcp",
            record.names.as_str(),
        ]
        .join("   ");
        let parsed = parse(&format!("HEADER\n{line}"));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].created, "2 days ago");
        assert_eq!(parsed[0].names, record.names);
    }
}
