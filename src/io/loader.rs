//! CSV dataset loading.
//!
//! The loader is a small state machine over the line stream:
//!
//! ```text
//! SeekingFirstDataLine -> Loading -> Done
//! ```
//!
//! The first non-blank line is classified: if it is all-numeric it becomes
//! the first data row (and establishes the column count), otherwise it is
//! treated as a header and discarded. Every later non-blank line must parse
//! to the same width. Any structural problem aborts the whole load; the
//! loader never returns a partial dataset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::Dataset;
use crate::error::LoadError;
use crate::io::parse::{RowError, classify_numeric, parse_numeric_row};

enum LoaderState {
    SeekingFirstDataLine,
    Loading,
}

/// Load a numeric CSV dataset from `path`.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(LoadError::IoUnavailable)?;
    load_from_reader(BufReader::new(file))
}

/// Load a numeric CSV dataset from any buffered line source.
///
/// Split out from [`load`] so tests and embedders can feed in-memory data.
pub fn load_from_reader<R: BufRead>(mut reader: R) -> Result<Dataset, LoadError> {
    let mut state = LoaderState::SeekingFirstDataLine;
    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(LoadError::IoUnavailable)?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // Blank lines are skipped in any state.
        if line.trim().is_empty() {
            continue;
        }

        if let LoaderState::SeekingFirstDataLine = state {
            state = LoaderState::Loading;
            if classify_numeric(&line).is_none() {
                // Header line: discard without consuming a data row.
                continue;
            }
        }

        let row = parse_numeric_row(&line).map_err(|err| row_error(line_no, err))?;
        if row.is_empty() {
            continue;
        }

        if cols == 0 {
            cols = row.len();
        } else if row.len() != cols {
            return Err(LoadError::ColumnCountMismatch {
                line: line_no,
                expected: cols,
                found: row.len(),
            });
        }

        values.extend_from_slice(&row);
        rows += 1;
    }

    if rows == 0 {
        return Err(LoadError::EmptyDataset);
    }
    Ok(Dataset::from_row_major(values, cols))
}

fn row_error(line: usize, err: RowError) -> LoadError {
    match err {
        RowError::EmptyToken { column } => LoadError::EmptyToken { line, column },
        RowError::NonNumericToken { column, token } => LoadError::NonNumericToken {
            line,
            column,
            token,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_uniform_numeric_csv() {
        let d = load_from_reader("1,2\n3,4\n5,6\n".as_bytes()).unwrap();
        assert_eq!(d.rows(), 3);
        assert_eq!(d.cols(), 2);
        assert_eq!(d.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn non_numeric_first_line_is_treated_as_header() {
        let d = load_from_reader("x,y\n1,2\n3,4\n".as_bytes()).unwrap();
        assert_eq!(d.rows(), 2);
        assert_eq!(d.cols(), 2);
        assert_eq!(d.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn numeric_first_line_is_data_even_if_intended_as_header() {
        // `1,2` as column names is indistinguishable from data; the loader
        // keeps it as a row by design.
        let d = load_from_reader("1,2\n3,4\n".as_bytes()).unwrap();
        assert_eq!(d.rows(), 2);
    }

    #[test]
    fn blank_lines_are_skipped_everywhere() {
        let d = load_from_reader("\n  \nx,y\n\n1,2\n   \n3,4\n\n".as_bytes()).unwrap();
        assert_eq!(d.rows(), 2);
    }

    #[test]
    fn last_line_may_omit_trailing_newline() {
        let d = load_from_reader("1,2\n3,4".as_bytes()).unwrap();
        assert_eq!(d.rows(), 2);
        assert_eq!(d.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn empty_field_fails_the_whole_load() {
        let err = load_from_reader("1,2\n1,,3\n".as_bytes()).unwrap_err();
        match err {
            LoadError::EmptyToken { line, column } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
            }
            other => panic!("expected EmptyToken, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_after_header_fails() {
        let err = load_from_reader("x,y\n1,abc\n".as_bytes()).unwrap_err();
        match err {
            LoadError::NonNumericToken {
                line,
                column,
                token,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected NonNumericToken, got {other:?}"),
        }
    }

    #[test]
    fn column_count_mismatch_fails() {
        let err = load_from_reader("1,2\n3,4,5\n".as_bytes()).unwrap_err();
        match err {
            LoadError::ColumnCountMismatch {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected ColumnCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let err = load_from_reader("x,y\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn empty_input_is_an_empty_dataset() {
        let err = load_from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn column_count_set_from_first_row_after_header() {
        let d = load_from_reader("a,b,c\n1,2,3\n4,5,6\n".as_bytes()).unwrap();
        assert_eq!(d.cols(), 3);
        assert_eq!(d.rows(), 2);
    }

    #[test]
    fn quoted_fields_load_like_plain_ones() {
        let d = load_from_reader("\"1\",\"2\"\n3,4\n".as_bytes()).unwrap();
        assert_eq!(d.rows(), 2);
        assert_eq!(d.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn missing_file_reports_io_unavailable() {
        let err = load(Path::new("/nonexistent/linfit-test.csv")).unwrap_err();
        assert!(matches!(err, LoadError::IoUnavailable(_)));
    }
}
