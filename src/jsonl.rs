//! Newline-delimited JSON fixture files, one object per line.

use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{FixtureError, Result};

/// A single fixture row. Key order follows the source file.
pub type Record = Map<String, Value>;

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    parse_records(BufReader::new(File::open(path)?))
}

/// Parse every non-blank line of `reader` as a JSON object.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = serde_json::from_str::<Value>(line).map_err(|source| FixtureError::BadJson {
            line: idx + 1,
            source,
        })?;
        match parsed {
            Value::Object(obj) => records.push(obj),
            other => {
                return Err(FixtureError::MalformedRecord(format!(
                    "line {} is not a JSON object (found {other})",
                    idx + 1
                )))
            }
        }
    }
    Ok(records)
}

pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_keeps_key_order() {
        let input = "{\"b\":\"1\",\"a\":\"2\"}\n\n   \n{\"c\":\"3\"}\n";
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn non_object_line_is_malformed() {
        let input = "{\"a\":\"1\"}\n[1,2]\n";
        match parse_records(input.as_bytes()) {
            Err(FixtureError::MalformedRecord(msg)) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_names_its_line() {
        let input = "{\"a\":\"1\"}\n\n{\"b\":\"2\"}\n{not json}\n";
        match parse_records(input.as_bytes()) {
            Err(err @ FixtureError::BadJson { line: 4, .. }) => {
                assert!(err.to_string().contains("line 4"), "{err}")
            }
            other => panic!("expected bad json on line 4, got {other:?}"),
        }
    }
}
