//! Truck capacity tier type definitions

use serde::{Deserialize, Serialize};

/// Truck pricing tier (トラック料金マスタ)
///
/// A tier covers any load up to `max_boxes`. Selection is by cheapest
/// covering price, not smallest covering capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckTier {
    /// トラック種別 (2t, 4t, etc.)
    pub truck_name: Option<String>,
    /// 最大段ボール数
    pub max_boxes: u32,
    /// 料金[円]
    pub price_yen: u32,
}

impl TruckTier {
    /// Whether this tier can carry the given box count
    pub fn covers(&self, total_boxes: u32) -> bool {
        self.max_boxes >= total_boxes
    }
}
