//! Reading workplace and attendance tables from delimited text.
//!
//! The first row of each file names the columns; every following row maps
//! positionally onto those names. Column order does not matter. A row whose
//! cell count differs from the header yields a record with no cells at all,
//! so it is skipped downstream rather than misaligned. Invalid UTF-8 in a
//! cell is replaced with U+FFFD; only an unreadable header fails the file.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRow, WorkplaceRow};

/// Reads the workplace directory from a file.
pub fn read_workplaces<P: AsRef<Path>>(path: P) -> EngineResult<Vec<WorkplaceRow>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let rows = read_table(open(path)?, &label)?;
    Ok(rows.into_iter().map(workplace_from_cells).collect())
}

/// Reads the attendance log from a file.
pub fn read_attendances<P: AsRef<Path>>(path: P) -> EngineResult<Vec<AttendanceRow>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let rows = read_table(open(path)?, &label)?;
    Ok(rows.into_iter().map(attendance_from_cells).collect())
}

/// Reads the workplace directory from any reader.
pub fn workplaces_from_reader<R: Read>(reader: R) -> EngineResult<Vec<WorkplaceRow>> {
    let rows = read_table(reader, "workplaces")?;
    Ok(rows.into_iter().map(workplace_from_cells).collect())
}

/// Reads the attendance log from any reader.
pub fn attendances_from_reader<R: Read>(reader: R) -> EngineResult<Vec<AttendanceRow>> {
    let rows = read_table(reader, "attendance")?;
    Ok(rows.into_iter().map(attendance_from_cells).collect())
}

fn open(path: &Path) -> EngineResult<File> {
    File::open(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })
}

/// Reads a headed table into one column-name to cell map per row.
fn read_table<R: Read>(reader: R, label: &str) -> EngineResult<Vec<HashMap<String, String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let parse_error = |e: csv::Error| EngineError::InputParseError {
        source_name: label.to_string(),
        message: e.to_string(),
    };

    let headers = rdr.headers().map_err(parse_error)?.clone();
    let mut raw_record = csv::ByteRecord::new();
    let mut rows = Vec::new();

    while rdr.read_byte_record(&mut raw_record).map_err(parse_error)? {
        if raw_record.len() != headers.len() {
            tracing::debug!(
                source = label,
                expected = headers.len(),
                found = raw_record.len(),
                "Row does not match header width"
            );
            rows.push(HashMap::new());
            continue;
        }

        rows.push(
            headers
                .iter()
                .zip(raw_record.iter())
                .map(|(key, value)| {
                    (key.to_string(), String::from_utf8_lossy(value).into_owned())
                })
                .collect(),
        );
    }

    Ok(rows)
}

fn workplace_from_cells(mut cells: HashMap<String, String>) -> WorkplaceRow {
    WorkplaceRow {
        id: cells.remove("id"),
        location: cells.remove("location"),
    }
}

fn attendance_from_cells(mut cells: HashMap<String, String>) -> AttendanceRow {
    AttendanceRow {
        id: cells.remove("id"),
        dob: cells.remove("dob"),
        status: cells.remove("status"),
        location: cells.remove("location"),
        workplace_id: cells.remove("workplace_id"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_workplaces() {
        let data = "id,location\n1,\"(0,0)\"\n2,\"(3, 4)\"\n";
        let rows = workplaces_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], WorkplaceRow::new("1", "(0,0)"));
        assert_eq!(rows[1].location.as_deref(), Some("(3, 4)"));
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let data = "workplace_id,status,location,dob,id\n1,AL,\"(0,8)\",2000-01-01,10\n";
        let rows = attendances_from_reader(data.as_bytes()).unwrap();

        assert_eq!(
            rows[0],
            AttendanceRow::new("10", "2000-01-01", "AL", "(0,8)", "1")
        );
    }

    #[test]
    fn test_missing_column_leaves_cell_absent() {
        let data = "id,dob,status,location\n10,2000-01-01,AL,\"(0,8)\"\n";
        let rows = attendances_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows[0].workplace_id, None);
        assert_eq!(rows[0].id.as_deref(), Some("10"));
    }

    #[test]
    fn test_row_width_mismatch_yields_empty_row() {
        let data = "id,location\n1,\"(0,0)\",extra\n2\n3,\"(1,1)\"\n";
        let rows = workplaces_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], WorkplaceRow::default());
        assert_eq!(rows[1], WorkplaceRow::default());
        assert_eq!(rows[2], WorkplaceRow::new("3", "(1,1)"));
    }

    #[test]
    fn test_invalid_utf8_cell_keeps_neighbouring_rows() {
        let mut data = b"id,dob,status,location,workplace_id\n".to_vec();
        data.extend_from_slice(b"1,2000-01-01,AL,\"(0,0)\",1\n");
        data.extend_from_slice(b"2,2000-01-01,W\xFF,\"(0,0)\",1\n");
        data.extend_from_slice(b"3,2000-01-01,USL,\"(0,0)\",1\n");

        let rows = attendances_from_reader(data.as_slice()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id.as_deref(), Some("1"));
        assert_eq!(rows[1].id.as_deref(), Some("2"));
        assert_eq!(rows[1].status.as_deref(), Some("W\u{FFFD}"));
        assert_eq!(rows[2].status.as_deref(), Some("USL"));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let rows = attendances_from_reader("id,dob,status,location,workplace_id\n".as_bytes())
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file_returns_error() {
        match read_workplaces("/nonexistent/workplaces.csv") {
            Err(EngineError::InputNotFound { path }) => {
                assert!(path.contains("workplaces.csv"));
            }
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }
}
