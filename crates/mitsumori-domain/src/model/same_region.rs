//! Same-prefecture fallback distance table
//!
//! Moves within a single prefecture have no row in the pairwise distance
//! table, so a fixed per-code fallback is used instead. The table is built
//! once at startup (compiled-in defaults plus optional tariff overrides)
//! and read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed fallback distances for same-prefecture moves (同一都道府県内距離)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SameRegionTable {
    distances: HashMap<String, f64>,
}

impl SameRegionTable {
    pub fn new(distances: HashMap<String, f64>) -> Self {
        Self { distances }
    }

    /// Look up the fallback distance for a prefecture code
    pub fn lookup(&self, prefecture_id: &str) -> Option<f64> {
        self.distances.get(prefecture_id).copied()
    }

    /// Insert or replace an entry (used for tariff-file overrides)
    pub fn set(&mut self, prefecture_id: String, distance_km: f64) {
        self.distances.insert(prefecture_id, distance_km);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
