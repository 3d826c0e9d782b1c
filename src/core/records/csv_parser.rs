//! CSV parser for family records

use crate::core::models::{Field, PersonRecord};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Cell contents that spreadsheet and data-frame exports use for "no value"
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Errors raised while reading a family CSV
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file could not be read
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    /// The input has no header row
    #[error("file is empty")]
    Empty,
    /// A quoted field was still open at end of input
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote {
        /// 1-based line where the quoted field began
        line: usize,
    },
    /// A required column is missing from the header
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Parse a family CSV file into records, in file order
///
/// # Errors
/// Returns an error if the file cannot be read, a quoted field is never closed, or
/// the header lacks a `Person_ID` column.
pub fn parse_family_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PersonRecord>, CsvError> {
    let content = fs::read_to_string(path)?;
    parse_family_str(&content)
}

/// Parse family CSV text into records, in row order
///
/// Unknown columns are ignored. Rows shorter than the header leave the missing
/// columns absent.
///
/// # Errors
/// Same as [`parse_family_csv`], minus I/O.
pub fn parse_family_str(content: &str) -> Result<Vec<PersonRecord>, CsvError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut rows = parse_csv_rows(content)?.into_iter();

    let header = rows.next().ok_or(CsvError::Empty)?;
    let columns: Vec<Option<Field>> = header.iter().map(|h| Field::from_column(h)).collect();

    if !columns.contains(&Some(Field::PersonId)) {
        return Err(CsvError::MissingColumn(Field::PersonId.column_name()));
    }

    let records = rows
        .map(|row| {
            let mut record = PersonRecord::default();
            for (column, cell) in columns.iter().zip(row) {
                if let (Some(field), Some(value)) = (column, present_value(cell)) {
                    record.set(*field, value);
                }
            }
            record
        })
        .collect();

    Ok(records)
}

/// Treat blank cells and NA markers as absent
fn present_value(cell: String) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || NA_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(cell)
    }
}

/// Split CSV text into rows of fields
///
/// Handles double-quoted fields with `""` escapes and embedded commas or line
/// breaks, and both LF and CRLF row endings. Blank lines are skipped.
fn parse_csv_rows(content: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
                quote_line = line;
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                line += 1;
                finish_row(&mut rows, &mut row, &mut field);
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: quote_line });
    }
    finish_row(&mut rows, &mut row, &mut field);

    Ok(rows)
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    row.push(std::mem::take(field));
    let fields = std::mem::take(row);
    if fields.iter().any(|f| !f.trim().is_empty()) {
        rows.push(fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_rows_plain() {
        let rows = parse_csv_rows("a,b,c\n1,2,3\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_parse_csv_rows_quoted() {
        let rows = parse_csv_rows("id,place\r\nP1,\"Boston, MA\"\r\nP2,\"say \"\"hi\"\"\"\r\n").unwrap();
        assert_eq!(rows[1], vec!["P1", "Boston, MA"]);
        assert_eq!(rows[2], vec!["P2", "say \"hi\""]);
    }

    #[test]
    fn test_parse_csv_rows_multiline_field() {
        let rows = parse_csv_rows("id,note\nP1,\"line one\nline two\"\nP2,x").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], "line one\nline two");
        assert_eq!(rows[2], vec!["P2", "x"]);
    }

    #[test]
    fn test_parse_csv_rows_skips_blank_lines() {
        let rows = parse_csv_rows("id\n\nP1\n,\n\nP2\n").unwrap();
        assert_eq!(rows, vec![vec!["id"], vec!["P1"], vec!["P2"]]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_csv_rows("id,name\nP1,\"open\n").unwrap_err();
        assert!(matches!(err, CsvError::UnterminatedQuote { line: 2 }));
    }

    #[test]
    fn test_parse_family_str_maps_columns() {
        let csv = "\u{feff}Person_ID,Full_Name,Generation,Notes,Spouse_ID\n\
                   P1,Ada Smith,1,ignored,P2\n\
                   P2,Bob Smith\n";
        let records = parse_family_str(csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].person_id.as_deref(), Some("P1"));
        assert_eq!(records[0].full_name.as_deref(), Some("Ada Smith"));
        assert_eq!(records[0].generation, Some(1));
        assert_eq!(records[0].spouse_id.as_deref(), Some("P2"));
        assert!(records[1].spouse_id.is_none());
        assert!(records[1].generation.is_none());
    }

    #[test]
    fn test_na_markers_are_absent() {
        let csv = "Person_ID,Father_ID,Mother_ID,Spouse_ID\nP1,NA,  ,nan\n";
        let records = parse_family_str(csv).unwrap();

        assert!(records[0].father_id.is_none());
        assert!(records[0].mother_id.is_none());
        assert!(records[0].spouse_id.is_none());
    }

    #[test]
    fn test_missing_person_id_column() {
        let err = parse_family_str("Full_Name\nAda\n").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn("Person_ID")));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_family_str(""), Err(CsvError::Empty)));
    }
}
