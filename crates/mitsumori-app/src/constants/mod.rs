//! Static reference tables

pub mod same_region;

pub use same_region::{build_same_region_table, get_same_region_distance};
