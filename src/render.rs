//! Plain terminal output for an [`Analysis`].

use std::io::{self, Write};

use crate::{
    analysis::Analysis,
    record::{ContainerRecord, StatusClass, is_external_port},
};

const HEADERS: [&str; 5] = ["NAME", "ID", "IMAGE", "STATUS", "PORTS"];

pub fn render_analysis(analysis: &Analysis, show_groups: bool, out: &mut impl Write) -> io::Result<()> {
    let stats = &analysis.statistics;
    writeln!(
        out,
        "Containers: {}  Running: {}  Healthy: {}  With ports: {}",
        stats.total, stats.running, stats.healthy, stats.with_ports
    )?;
    writeln!(out)?;

    for alert in &analysis.alerts {
        writeln!(
            out,
            "[{}] {} {}: {}",
            alert.severity.as_ref(),
            alert.icon,
            alert.title,
            alert.message
        )?;
    }

    if !analysis.ports.is_empty() {
        writeln!(out)?;
        for (category, usages) in analysis.ports.iter() {
            if usages.is_empty() {
                continue;
            }
            writeln!(out, "{}", category.title())?;
            for usage in usages {
                writeln!(out, "  {} ({})", usage.port, usage.container)?;
            }
        }
    }

    if !analysis.containers.is_empty() {
        writeln!(out)?;
        render_table(&analysis.containers, out)?;
    }

    if show_groups && !analysis.groups.is_empty() {
        writeln!(out)?;
        for group in analysis.groups.iter() {
            writeln!(out, "{} ({})", group.name, group.containers.len())?;
            for container in &group.containers {
                let state = if container.is_running() { "running" } else { "stopped" };
                writeln!(out, "  {:<30} {state}", container.names)?;
            }
        }
    }

    Ok(())
}

/// External ports are marked with a trailing `*`.
fn ports_cell(record: &ContainerRecord) -> String {
    record
        .port_tokens()
        .map(|token| {
            if is_external_port(token) {
                format!("{token}*")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_cell(record: &ContainerRecord) -> String {
    match record.status_class() {
        StatusClass::Exited => format!("{} !", record.status),
        _ => record.status.clone(),
    }
}

fn render_table(records: &[ContainerRecord], out: &mut impl Write) -> io::Result<()> {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.names.clone(),
                r.id.clone(),
                r.image.clone(),
                status_cell(r),
                ports_cell(r),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(&HEADERS.map(String::from), &widths, out)?;
    for row in &rows {
        write_row(row, &widths, out)?;
    }
    Ok(())
}

fn write_row(cells: &[String; 5], widths: &[usize; 5], out: &mut impl Write) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::parse_checked, record::record, sample::SAMPLE_PS};

    fn render(analysis: &Analysis, show_groups: bool) -> String {
        let mut out = Vec::new();
        render_analysis(analysis, show_groups, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sample_output() {
        let analysis = Analysis::new(parse_checked(SAMPLE_PS).unwrap());
        let text = render(&analysis, false);

        assert!(text.starts_with("Containers: 13  Running: 13  Healthy: 5  With ports: 13\n"));
        assert!(text.contains("[warning] 🌐 Public ports exposed: 4 container(s)"));
        assert!(text.contains("[info] ℹ️ Missing health checks: 8 running container(s)"));
        assert!(text.contains("Redis ports\n  6379/tcp (maxkb)\n"));
        assert!(text.contains("0.0.0.0:9003->8080/tcp*"));
        assert!(text.contains("127.0.0.1:6379->6379/tcp"));
        assert!(!text.contains("127.0.0.1:6379->6379/tcp*"));
        assert!(!text.contains("MaxKB (3)"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let analysis = Analysis::new(vec![
            record("redis:6-alpine", "Up 3 weeks (healthy)", "6379/tcp", "cache"),
            record("nginx:latest", "Exited (0) 1 hour ago", "", "a-much-longer-name"),
        ]);
        let text = render(&analysis, false);
        let table: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.starts_with("NAME"))
            .collect();

        assert_eq!(table.len(), 3);
        let id_column = table[0].find("ID").unwrap();
        assert_eq!(table[1].find("9df7471a0773"), Some(id_column));
        assert_eq!(table[2].find("9df7471a0773"), Some(id_column));
        assert!(table[2].contains("Exited (0) 1 hour ago !"));
    }

    #[test]
    fn test_group_view() {
        let analysis = Analysis::new(vec![
            record("langgenius/dify-api:1.7.1", "Up 3 weeks", "5001/tcp", "docker-api-1"),
            record("langgenius/dify-web:1.7.1", "Exited (1) 2 days ago", "", "docker-web-1"),
        ]);
        let text = render(&analysis, true);
        assert!(text.contains("Dify (2)\n"));
        assert!(text.contains(&format!("  {:<30} running\n", "docker-api-1")));
        assert!(text.contains(&format!("  {:<30} stopped\n", "docker-web-1")));
    }

    #[test]
    fn test_empty_analysis() {
        let text = render(&Analysis::new(Vec::new()), true);
        assert!(text.contains("Containers: 0"));
        assert!(text.contains("[success]"));
        assert!(!text.contains("NAME"));
    }
}
