//! CSV importer for the prefecture distance table (都道府県間距離)
//!
//! Handles CP932 (Shift-JIS) encoded CSV files commonly used in Japanese
//! business systems, as well as plain UTF-8.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use thiserror::Error;

use mitsumori_domain::model::PrefectureDistance;

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Load distance rows from a CP932 or UTF-8 encoded CSV file
///
/// Expected CSV header:
/// 出発,到着,距離(km)
pub fn load_distances<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<PrefectureDistance>, CsvLoaderError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // Decode from CP932 (Shift-JIS) to UTF-8; UTF-8 input decodes unchanged
    let (decoded, _, had_errors) = SHIFT_JIS.decode(&bytes);
    if had_errors {
        eprintln!("Warning: Some characters could not be decoded from CP932");
    }

    load_distances_from_str(&decoded)
}

/// Parse distance rows from decoded CSV text
pub fn load_distances_from_str(content: &str) -> Result<Vec<PrefectureDistance>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut distances = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        distances.push(parse_record(&record, row_num)?);
    }

    Ok(distances)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), CsvLoaderError> {
    let required = ["出発", "到着", "距離(km)"];
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(CsvLoaderError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn parse_record(
    record: &csv::StringRecord,
    row_num: usize,
) -> Result<PrefectureDistance, CsvLoaderError> {
    let from = record
        .get(0)
        .ok_or_else(|| CsvLoaderError::MissingColumn("出発".to_string()))?;
    let to = record
        .get(1)
        .ok_or_else(|| CsvLoaderError::MissingColumn("到着".to_string()))?;
    let distance_raw = record
        .get(2)
        .ok_or_else(|| CsvLoaderError::MissingColumn("距離(km)".to_string()))?;

    let distance_km: f64 = distance_raw
        .parse()
        .map_err(|_| CsvLoaderError::InvalidNumber {
            row: row_num,
            column: "距離(km)".to_string(),
            value: distance_raw.to_string(),
        })?;

    Ok(PrefectureDistance {
        prefecture_id_from: from.to_string(),
        prefecture_id_to: to.to_string(),
        distance_km,
    })
}
