//! Tariff master data loader from TOML configuration
//!
//! The tariff file holds every reference table the pricing core reads:
//! prefectures, pairwise distances, package box counts, truck tiers,
//! optional services, and optional same-prefecture distance overrides.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mitsumori_domain::model::{
    OptionalService, PackageBox, Prefecture, PrefectureDistance, TruckTier,
};
use mitsumori_types::{ConfigError, Error, Result};

/// Same-prefecture distance override entry in the tariff file
#[derive(Debug, Clone, Deserialize)]
pub struct SameRegionEntry {
    pub prefecture_id: String,
    pub distance_km: f64,
}

/// Container for parsing tariff.toml
#[derive(Debug, Deserialize)]
struct TariffConfig {
    #[serde(default)]
    prefectures: Vec<Prefecture>,
    #[serde(default)]
    distances: Vec<PrefectureDistance>,
    #[serde(default)]
    packages: Vec<PackageBox>,
    #[serde(default)]
    truck_tiers: Vec<TruckTier>,
    #[serde(default)]
    optional_services: Vec<OptionalService>,
    #[serde(default)]
    same_region: Vec<SameRegionEntry>,
}

/// Tariff master data loaded from TOML
#[derive(Debug)]
pub struct TariffLoader {
    prefectures: Vec<Prefecture>,
    distances: Vec<PrefectureDistance>,
    /// Map of package_id to boxes per unit
    packages: HashMap<String, PackageBox>,
    truck_tiers: Vec<TruckTier>,
    /// Map of service_id to service entry
    services: HashMap<String, OptionalService>,
    same_region_overrides: Vec<SameRegionEntry>,
}

impl TariffLoader {
    /// Load tariff data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read tariff file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load tariff data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: TariffConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse tariff TOML: {}",
                e
            )))
        })?;

        let packages = config
            .packages
            .into_iter()
            .map(|p| (p.package_id.clone(), p))
            .collect();

        let services = config
            .optional_services
            .into_iter()
            .map(|s| (s.service_id.clone(), s))
            .collect();

        Ok(Self {
            prefectures: config.prefectures,
            distances: config.distances,
            packages,
            truck_tiers: config.truck_tiers,
            services,
            same_region_overrides: config.same_region,
        })
    }

    /// All registered prefectures
    pub fn all_prefectures(&self) -> &[Prefecture] {
        &self.prefectures
    }

    /// All pairwise distance rows, stored direction only
    pub fn all_distances(&self) -> &[PrefectureDistance] {
        &self.distances
    }

    /// Replace the distance table (used by the CSV importer)
    pub fn set_distances(&mut self, distances: Vec<PrefectureDistance>) {
        self.distances = distances;
    }

    /// Look up boxes per unit by package id
    pub fn boxes_per_package(&self, package_id: &str) -> Option<u32> {
        self.packages.get(package_id).map(|p| p.boxes_per_unit)
    }

    /// Look up a package entry by id
    pub fn get_package(&self, package_id: &str) -> Option<&PackageBox> {
        self.packages.get(package_id)
    }

    /// All truck pricing tiers
    pub fn truck_tiers(&self) -> &[TruckTier] {
        &self.truck_tiers
    }

    /// Look up an optional-service unit price by id
    pub fn option_price(&self, service_id: &str) -> Option<u32> {
        self.services.get(service_id).map(|s| s.price_yen)
    }

    /// Look up an optional-service entry by id
    pub fn get_service(&self, service_id: &str) -> Option<&OptionalService> {
        self.services.get(service_id)
    }

    /// Same-prefecture distance overrides declared in the tariff file
    pub fn same_region_overrides(&self) -> &[SameRegionEntry] {
        &self.same_region_overrides
    }

    /// Total number of registered prefectures
    pub fn prefecture_count(&self) -> usize {
        self.prefectures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[prefectures]]
prefecture_id = "13"
prefecture_name = "東京都"

[[prefectures]]
prefecture_id = "14"
prefecture_name = "神奈川県"

[[distances]]
prefecture_id_from = "13"
prefecture_id_to = "14"
distance_km = 30.0

[[packages]]
package_id = "BOX"
package_name = "段ボール"
boxes_per_unit = 1

[[packages]]
package_id = "BED"
package_name = "ベッド"
boxes_per_unit = 2

[[truck_tiers]]
truck_name = "2t"
max_boxes = 80
price_yen = 15000

[[truck_tiers]]
truck_name = "4t"
max_boxes = 200
price_yen = 25000

[[optional_services]]
service_id = "1"
service_name = "洗濯機設置"
price_yen = 7500

[[same_region]]
prefecture_id = "13"
distance_km = 45.0
"#;

    #[test]
    fn test_load_from_str() {
        let loader = TariffLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.prefecture_count(), 2);
        assert_eq!(loader.all_distances().len(), 1);
        assert_eq!(loader.boxes_per_package("BED"), Some(2));
        assert_eq!(loader.boxes_per_package("PIANO"), None);
        assert_eq!(loader.truck_tiers().len(), 2);
        assert_eq!(loader.option_price("1"), Some(7500));
        assert_eq!(loader.option_price("9"), None);
    }

    #[test]
    fn test_same_region_overrides() {
        let loader = TariffLoader::load_from_str(TEST_TOML).unwrap();
        let overrides = loader.same_region_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].prefecture_id, "13");
        assert_eq!(overrides[0].distance_km, 45.0);
    }

    #[test]
    fn test_missing_tables_default_empty() {
        let loader = TariffLoader::load_from_str("").unwrap();
        assert_eq!(loader.prefecture_count(), 0);
        assert!(loader.truck_tiers().is_empty());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = TariffLoader::load_from_str("[[packages]]\nboxes_per_unit = \"two\"")
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_package_names_preserved() {
        let loader = TariffLoader::load_from_str(TEST_TOML).unwrap();
        let package = loader.get_package("BOX").unwrap();
        assert_eq!(package.package_name.as_deref(), Some("段ボール"));
        let service = loader.get_service("1").unwrap();
        assert_eq!(service.service_name.as_deref(), Some("洗濯機設置"));
    }
}
