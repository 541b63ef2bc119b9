//! Error types for the salary guide pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while converting a salary CSV
//! into the widget's JSON document.

use thiserror::Error;

/// The main error type for the salary guide pipeline.
///
/// All operations in the pipeline return this error type. Every variant is
/// fatal for the run: no output file is written once any of them occurs.
///
/// # Example
///
/// ```
/// use salary_guide::error::GuideError;
///
/// let error = GuideError::InputNotFound {
///     path: "/missing/UIS.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/UIS.csv");
/// ```
#[derive(Debug, Error)]
pub enum GuideError {
    /// The input CSV path does not reference an existing file.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input file could not be read as CSV.
    #[error("Failed to read CSV file '{path}': {message}")]
    Csv {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the CSV error.
        message: String,
    },

    /// The input file contained bytes that are not valid UTF-8.
    #[error("Input file '{path}' is not valid UTF-8: {message}")]
    Encoding {
        /// The path to the file with undecodable content.
        path: String,
        /// A description of the decoding error.
        message: String,
    },

    /// A row's salary field was not parseable as a decimal number.
    ///
    /// The row number is 1-based over non-empty data rows, matching the
    /// numbering used for the reported row count (the header row and
    /// entirely empty rows are not counted).
    #[error("Row {row}: cannot parse {field} value '{value}' as a decimal salary")]
    SalaryParse {
        /// The 1-based number of the offending data row.
        row: usize,
        /// The name of the salary field that failed to parse.
        field: String,
        /// The raw value that was not a decimal number.
        value: String,
    },

    /// The output JSON file could not be written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The output path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },
}

/// A type alias for Results that return GuideError.
pub type GuideResult<T> = Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_displays_path() {
        let error = GuideError::InputNotFound {
            path: "input/UIS.csv".to_string(),
        };
        assert_eq!(error.to_string(), "Input file not found: input/UIS.csv");
    }

    #[test]
    fn test_csv_error_displays_path_and_message() {
        let error = GuideError::Csv {
            path: "input/UIS.csv".to_string(),
            message: "unequal lengths".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read CSV file 'input/UIS.csv': unequal lengths"
        );
    }

    #[test]
    fn test_encoding_error_displays_path_and_message() {
        let error = GuideError::Encoding {
            path: "input/UIS.csv".to_string(),
            message: "invalid utf-8 in record 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input file 'input/UIS.csv' is not valid UTF-8: invalid utf-8 in record 3"
        );
    }

    #[test]
    fn test_salary_parse_displays_row_field_and_value() {
        let error = GuideError::SalaryParse {
            row: 42,
            field: "total_salary".to_string(),
            value: "N/A".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Row 42: cannot parse total_salary value 'N/A' as a decimal salary"
        );
    }

    #[test]
    fn test_output_write_displays_path_and_message() {
        let error = GuideError::OutputWrite {
            path: "output/UIS.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write output file 'output/UIS.json': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<GuideError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_input_not_found() -> GuideResult<()> {
            Err(GuideError::InputNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> GuideResult<()> {
            returns_input_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
