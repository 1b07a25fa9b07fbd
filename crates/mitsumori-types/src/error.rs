//! Error types for hikkoshi-mitsumori

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    /// 同一都道府県内の距離テーブルに該当コードがない
    #[error("No same-prefecture distance registered for code {0}")]
    MissingSameRegionDistance(String),
}

/// Estimate store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Customer record not found: {0}")]
    CustomerNotFound(u64),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),

    #[error("Store IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("Unknown package type: {0}")]
    UnknownPackageType(String),

    #[error("Unknown optional service: {0}")]
    UnknownService(String),

    #[allow(dead_code)]
    #[error("Unknown prefecture: {0}")]
    UnknownPrefecture(String),

    /// 距離テーブルに同一ペアの行が複数存在する（データ破損）
    #[error("Ambiguous distance data for {from}-{to}: {count} rows matched")]
    AmbiguousDistance {
        from: String,
        to: String,
        count: usize,
    },

    /// 積載可能なトラックがない
    #[error("No truck tier can carry {0} boxes")]
    NoCapacityAvailable(u32),

    /// 段ボール数の合計が表現可能な範囲を超えた
    #[error("Total box count overflows the supported range")]
    BoxCountOverflow,

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
