//! Infrastructure layer - tariff loaders and file-based stores

pub mod distance_csv;
pub mod persistence;
pub mod tariff_loader;
