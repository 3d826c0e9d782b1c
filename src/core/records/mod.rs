//! Record source: reads family CSV exports into [`PersonRecord`](crate::core::models::PersonRecord)s

pub mod csv_parser;

pub use csv_parser::{parse_family_csv, parse_family_str, CsvError};
