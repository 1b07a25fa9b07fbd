//! Package master and selection types

use serde::{Deserialize, Serialize};

/// Boxes required per unit of a package type (荷物マスタ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageBox {
    /// 荷物ID
    pub package_id: String,
    /// 荷物名 (e.g., "段ボール", "ベッド")
    pub package_name: Option<String>,
    /// 1個あたりの段ボール数
    pub boxes_per_unit: u32,
}

/// A package type chosen by the customer, with quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSelection {
    pub package_id: String,
    /// 個数
    pub quantity: u32,
}
