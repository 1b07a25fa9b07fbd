//! Estimate request and result types

use serde::{Deserialize, Serialize};

use super::package::PackageSelection;

/// A validated estimate request, consumed once by the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// 引越し元の都道府県コード
    pub old_prefecture_id: String,
    /// 引越し先の都道府県コード
    pub new_prefecture_id: String,
    /// 荷物の選択リスト
    pub packages: Vec<PackageSelection>,
    /// 選択されたオプションサービスID
    pub option_services: Vec<String>,
}

/// Price breakdown for a single estimate request
///
/// Distance is reported for reference only; the total is the truck price
/// plus the optional-service total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// 距離[km]
    pub distance_km: f64,
    /// 総段ボール数
    pub total_boxes: u32,
    /// トラック料金[円]
    pub truck_price_yen: u32,
    /// オプションサービス料金[円]
    pub option_price_yen: u32,
    /// 見積もり合計[円]
    pub total_price_yen: u32,
}
