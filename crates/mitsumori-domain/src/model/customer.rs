//! Customer types for the request recorder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::estimate::EstimateResult;

/// Customer contact and address information (顧客情報)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// 顧客名
    pub customer_name: String,
    /// 電話番号
    pub tel: String,
    /// メールアドレス
    pub email: String,
    /// 引越し元の都道府県コード
    pub old_prefecture_id: String,
    /// 引越し先の都道府県コード
    pub new_prefecture_id: String,
    /// 引越し元住所
    pub old_address: String,
    /// 引越し先住所
    pub new_address: String,
}

/// A package-selection row keyed by customer id (顧客_荷物)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPackage {
    pub customer_id: u64,
    pub package_id: String,
    /// 個数
    pub quantity: u32,
}

/// A recorded estimate request in the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Generated customer id (used as store key)
    pub customer_id: u64,

    pub customer: Customer,

    /// Chosen optional service ids
    #[serde(default)]
    pub option_services: Vec<String>,

    /// Chosen packages (package_id, quantity)
    #[serde(default)]
    pub packages: Vec<(String, u32)>,

    /// Price breakdown computed for this request, if attached
    #[serde(default)]
    pub result: Option<EstimateResult>,

    /// When the request was recorded
    pub requested_at: DateTime<Utc>,
}
