//! File-based implementation of ReferenceDataRepository

use std::path::PathBuf;

use mitsumori_domain::model::{Prefecture, PrefectureDistance, TruckTier};
use mitsumori_domain::repository::ReferenceDataRepository;
use mitsumori_types::Error;

use crate::distance_csv;
use crate::tariff_loader::TariffLoader;

/// File-based reference data repository (TOML tariff)
pub struct FileReferenceRepository {
    tariff_path: PathBuf,
    loader: TariffLoader,
}

impl FileReferenceRepository {
    /// Create a new repository from a tariff TOML file path
    pub fn new(tariff_path: PathBuf) -> Result<Self, Error> {
        let loader = TariffLoader::load_from_file(&tariff_path)?;
        Ok(Self {
            tariff_path,
            loader,
        })
    }

    /// Get the tariff path
    pub fn tariff_path(&self) -> &PathBuf {
        &self.tariff_path
    }

    /// Access the underlying loader (same-region overrides etc.)
    pub fn loader(&self) -> &TariffLoader {
        &self.loader
    }

    /// Reload data from the tariff file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = TariffLoader::load_from_file(&self.tariff_path)?;
        Ok(())
    }

    /// Replace the distance table from a CSV import
    pub fn import_distances_csv(&mut self, csv_path: &std::path::Path) -> Result<(), Error> {
        let distances =
            distance_csv::load_distances(csv_path).map_err(|e| Error::CsvLoader(e.to_string()))?;
        self.loader.set_distances(distances);
        Ok(())
    }
}

impl ReferenceDataRepository for FileReferenceRepository {
    fn find_all_prefectures(&self) -> Result<Vec<Prefecture>, Error> {
        Ok(self.loader.all_prefectures().to_vec())
    }

    fn find_distance_rows(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<PrefectureDistance>, Error> {
        Ok(self
            .loader
            .all_distances()
            .iter()
            .filter(|row| row.connects(from, to))
            .cloned()
            .collect())
    }

    fn find_boxes_per_package(&self, package_id: &str) -> Result<Option<u32>, Error> {
        Ok(self.loader.boxes_per_package(package_id))
    }

    fn find_truck_tiers(&self) -> Result<Vec<TruckTier>, Error> {
        Ok(self.loader.truck_tiers().to_vec())
    }

    fn find_option_price(&self, service_id: &str) -> Result<Option<u32>, Error> {
        Ok(self.loader.option_price(service_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[prefectures]]
prefecture_id = "13"
prefecture_name = "東京都"

[[distances]]
prefecture_id_from = "13"
prefecture_id_to = "14"
distance_km = 30.0

[[distances]]
prefecture_id_from = "13"
prefecture_id_to = "12"
distance_km = 40.0
"#;

    fn write_tariff(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("tariff.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_find_distance_rows_both_orderings() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileReferenceRepository::new(write_tariff(dir.path(), TEST_TOML)).unwrap();

        let forward = repo.find_distance_rows("13", "14").unwrap();
        let reverse = repo.find_distance_rows("14", "13").unwrap();
        assert_eq!(forward.len(), 1);
        assert_eq!(reverse.len(), 1);
        assert_eq!(forward[0].distance_km, reverse[0].distance_km);

        assert!(repo.find_distance_rows("01", "47").unwrap().is_empty());
    }

    #[test]
    fn test_import_distances_csv_replaces_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = FileReferenceRepository::new(write_tariff(dir.path(), TEST_TOML)).unwrap();

        let csv_path = dir.path().join("distances.csv");
        std::fs::write(&csv_path, "出発,到着,距離(km)\n01,02,205.0\n").unwrap();
        repo.import_distances_csv(&csv_path).unwrap();

        assert!(repo.find_distance_rows("13", "14").unwrap().is_empty());
        let imported = repo.find_distance_rows("02", "01").unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].distance_km, 205.0);
    }

    #[test]
    fn test_missing_tariff_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileReferenceRepository::new(dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
