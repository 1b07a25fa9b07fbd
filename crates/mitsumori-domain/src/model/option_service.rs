//! Optional service master data

use serde::{Deserialize, Serialize};

/// Optional add-on service with a flat price (オプションサービスマスタ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalService {
    /// サービスID
    pub service_id: String,
    /// サービス名 (e.g., "洗濯機設置")
    pub service_name: Option<String>,
    /// 料金[円]
    pub price_yen: u32,
}
