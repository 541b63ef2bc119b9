//! CSV ingestion for the salary pipeline.

use std::path::Path;

use crate::error::{GuideError, GuideResult};
use crate::models::PositionRecord;

/// Reads all position rows from a salary CSV.
///
/// The file must carry a header row naming at least the eight expected
/// columns (`name`, `total_salary`, `position_title`, `department`,
/// `college`, `position_salary`, `tenure`, `pay_type`). A leading UTF-8
/// byte-order mark is tolerated; exports from spreadsheet tools routinely
/// carry one. The whole file is read into memory before any downstream
/// stage runs.
///
/// # Errors
///
/// - [`GuideError::InputNotFound`] when the path is not an existing file
/// - [`GuideError::Encoding`] when the content is not decodable as UTF-8
/// - [`GuideError::Csv`] for structural CSV failures (missing columns,
///   ragged rows)
pub fn read_records<P: AsRef<Path>>(path: P) -> GuideResult<Vec<PositionRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    if !path.is_file() {
        return Err(GuideError::InputNotFound { path: path_str });
    }

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| map_csv_error(&path_str, e))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: PositionRecord = result.map_err(|e| map_csv_error(&path_str, e))?;
        records.push(record);
    }

    Ok(records)
}

/// Separates decoding failures from structural CSV failures.
fn map_csv_error(path: &str, error: csv::Error) -> GuideError {
    match error.kind() {
        csv::ErrorKind::Utf8 { .. } => GuideError::Encoding {
            path: path.to_string(),
            message: error.to_string(),
        },
        _ => GuideError::Csv {
            path: path.to_string(),
            message: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        file.write_all(content).expect("write csv");
        file
    }

    const HEADER: &str =
        "name,total_salary,position_title,department,college,position_salary,tenure,pay_type\n";

    #[test]
    fn test_read_simple_file() {
        let file = write_temp_csv(
            format!("{HEADER}Jane Doe,50000.00,Assoc Prof,CS,Engineering,50000.00,A,AL\n")
                .as_bytes(),
        );
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[0].tenure, "A");
    }

    #[test]
    fn test_read_tolerates_utf8_bom() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(
            format!("{HEADER}Jane Doe,50000.00,Assoc Prof,CS,Engineering,50000.00,A,AL\n")
                .as_bytes(),
        );
        let file = write_temp_csv(&content);
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let error = read_records("/nonexistent/UIS.csv").unwrap_err();
        match error {
            GuideError::InputNotFound { path } => {
                assert_eq!(path, "/nonexistent/UIS.csv");
            }
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let mut content = HEADER.as_bytes().to_vec();
        content.extend_from_slice(b"Jane \xFF\xFE Doe,50000.00,Prof,CS,Eng,50000.00,A,AL\n");
        let file = write_temp_csv(&content);

        let error = read_records(file.path()).unwrap_err();
        match error {
            GuideError::Encoding { .. } => {}
            other => panic!("Expected Encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_rows_deserialize_as_empty_records() {
        let file = write_temp_csv(format!("{HEADER},,,,,,,\n").as_bytes());
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let file = write_temp_csv(
            format!("{HEADER}\nJane Doe,50000.00,Assoc Prof,CS,Engineering,50000.00,A,AL\n\n")
                .as_bytes(),
        );
        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let file = write_temp_csv(
            b"name,total_salary\nJane Doe,50000.00\n",
        );
        let error = read_records(file.path()).unwrap_err();
        match error {
            GuideError::Csv { .. } => {}
            other => panic!("Expected Csv error, got {:?}", other),
        }
    }
}
