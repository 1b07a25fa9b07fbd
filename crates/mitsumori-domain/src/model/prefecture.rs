//! Prefecture master data type definitions

use serde::{Deserialize, Serialize};

/// Prefecture master entry (都道府県マスタ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefecture {
    /// 都道府県コード (e.g., "13" = 東京都)
    pub prefecture_id: String,
    /// 都道府県名
    pub prefecture_name: String,
}

/// Distance between two prefectures (都道府県間距離)
///
/// The table stores one direction per pair; the distance is symmetric,
/// so lookups must treat the pair as unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefectureDistance {
    pub prefecture_id_from: String,
    pub prefecture_id_to: String,
    /// 距離[km]
    pub distance_km: f64,
}

impl PrefectureDistance {
    /// Whether this row links the two prefectures, in either direction
    pub fn connects(&self, from: &str, to: &str) -> bool {
        (self.prefecture_id_from == from && self.prefecture_id_to == to)
            || (self.prefecture_id_from == to && self.prefecture_id_to == from)
    }
}
