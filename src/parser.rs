use crate::record::ContainerRecord;

/// Number of columns in a `docker ps` table.
const COLUMNS: usize = 7;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No container listing was provided")]
    EmptyInput,
    #[error("No container could be parsed, check the input format")]
    NoRecords,
}

/// Parses the output of `docker ps` into records.
///
/// The first line is always treated as the header and skipped, whatever it
/// contains. Columns are separated by runs of two or more whitespace
/// characters, so single spaces inside a column (e.g. `3 weeks ago`) are
/// preserved. Lines with fewer than seven columns are dropped without error,
/// and columns past the seventh are ignored.
pub fn parse(input: &str) -> Vec<ContainerRecord> {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in input.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match record_from_columns(&split_columns(line)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} line(s) with fewer than {COLUMNS} columns");
    }
    records
}

/// Parses user supplied input, reporting when nothing usable came out of it.
///
/// The whole input is trimmed first, so leading blank lines do not take the
/// place of the header.
pub fn parse_checked(input: &str) -> Result<Vec<ContainerRecord>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let records = parse(input);
    if records.is_empty() {
        return Err(ParseError::NoRecords);
    }
    log::debug!("Parsed {} container(s)", records.len());
    Ok(records)
}

fn record_from_columns(columns: &[&str]) -> Option<ContainerRecord> {
    if columns.len() < COLUMNS {
        return None;
    }
    Some(ContainerRecord {
        id: columns[0].to_string(),
        image: columns[1].to_string(),
        command: columns[2].to_string(),
        created: columns[3].to_string(),
        status: columns[4].to_string(),
        ports: columns[5].to_string(),
        names: columns[6].to_string(),
    })
}

/// Splits on every run of at least two whitespace characters.
fn split_columns(line: &str) -> Vec<&str> {
    let mut columns = Vec::new();
    let mut start = 0;
    // Byte offset where the current whitespace run began, and its length in chars.
    let mut run: Option<(usize, usize)> = None;

    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            match run.as_mut() {
                Some((_, len)) => *len += 1,
                None => run = Some((idx, 1)),
            }
            continue;
        }
        if let Some((run_start, len)) = run.take() {
            if len >= 2 {
                columns.push(&line[start..run_start]);
                start = idx;
            }
        }
    }

    if let Some((run_start, len)) = run {
        if len >= 2 {
            columns.push(&line[start..run_start]);
            start = line.len();
        }
    }
    columns.push(&line[start..]);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const LINE: &str = "abc123  myimage:latest  run  2 days ago  Up 2 days (healthy)  0.0.0.0:80->80/tcp  myapp";

    #[test]
    fn test_split_on_runs_of_two_or_more() {
        assert_eq!(split_columns("a  b   c"), vec!["a", "b", "c"]);
        assert_eq!(split_columns("a b c"), vec!["a b c"]);
        assert_eq!(split_columns("a \t b"), vec!["a", "b"]);
        assert_eq!(split_columns("  a"), vec!["", "a"]);
        assert_eq!(split_columns("a  "), vec!["a", ""]);
    }

    #[test]
    fn test_single_line_scenario() {
        let records = parse(&format!("HEADER\n{LINE}"));
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.id, "abc123");
        assert_eq!(rec.image, "myimage:latest");
        assert_eq!(rec.command, "run");
        assert_eq!(rec.created, "2 days ago");
        assert_eq!(rec.status, "Up 2 days (healthy)");
        assert_eq!(rec.ports, "0.0.0.0:80->80/tcp");
        assert_eq!(rec.names, "myapp");
        assert!(rec.status.contains("Up") && rec.status.contains("healthy"));
    }

    #[test]
    fn test_header_is_skipped_even_when_it_looks_like_data() {
        let records = parse(&format!("{LINE}\n{LINE}"));
        assert_eq!(records.len(), 1);
        assert!(parse(LINE).is_empty());
    }

    #[test]
    fn test_short_lines_are_dropped_silently() {
        // Containers without published ports leave the PORTS column blank, so
        // the row only has six columns. Losing them is the expected behavior.
        let input = format!(
            "HEADER\n\
             ec2590773987  langgenius/dify-sandbox:0.2.12  \"/main\"  3 weeks ago  Up 3 weeks (healthy)            docker-sandbox-1\n\
             {LINE}\n\
             not a docker line\n"
        );
        let records = parse(&input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].names, "myapp");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let records = parse(&format!("HEADER\n{LINE}  trailing  more"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].names, "myapp");
    }

    #[test]
    fn test_order_is_preserved_and_blank_lines_skipped() {
        let second = LINE.replace("myapp", "other");
        let records = parse(&format!("HEADER\n\n{LINE}\n   \n{second}\r\n"));
        let names: Vec<&str> = records.iter().map(|r| r.names.as_str()).collect();
        assert_eq!(names, vec!["myapp", "other"]);
    }

    #[test]
    fn test_parse_checked_reports_empty_input() {
        assert_eq!(parse_checked(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_checked(" \n\t \n"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_checked_reports_no_records() {
        assert_eq!(parse_checked("HEADER\nfoo bar"), Err(ParseError::NoRecords));
        assert_eq!(parse_checked(LINE), Err(ParseError::NoRecords));
    }

    #[test]
    fn test_parse_checked_trims_leading_blank_lines() {
        let records = parse_checked(&format!("\n\nHEADER\n{LINE}")).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[quickcheck]
    fn first_line_is_never_a_record(line: String) -> bool {
        parse(&line.replace('\n', " ")).is_empty()
    }

    #[quickcheck]
    fn surrounding_whitespace_does_not_change_fields(left: u8, right: u8) -> bool {
        let padded = format!(
            "{}{LINE}{}",
            " \t".repeat(usize::from(left % 4)),
            "\t ".repeat(usize::from(right % 4))
        );
        parse(&format!("HEADER\n{padded}")) == parse(&format!("HEADER\n{LINE}"))
    }
}
