//! Repository adapters for the persistence layer

use std::path::PathBuf;

use mitsumori_domain::model::SameRegionTable;
use mitsumori_infra::persistence::{FileEstimateRecorder, FileReferenceRepository};
use mitsumori_types::Result;

use crate::config::Config;
use crate::constants;

pub use mitsumori_infra::tariff_loader::SameRegionEntry;

/// Open the file-based reference data repository from the configured tariff
pub fn open_reference_repo(config: &Config) -> Result<FileReferenceRepository> {
    let tariff_path = config.tariff_path()?;
    FileReferenceRepository::new(tariff_path)
}

/// Open the file-based reference data repository at a custom path
pub fn open_reference_repo_at(tariff_path: PathBuf) -> Result<FileReferenceRepository> {
    FileReferenceRepository::new(tariff_path)
}

/// Open the estimate recorder in the configured store directory
pub fn open_recorder(config: &Config) -> Result<FileEstimateRecorder> {
    let store_dir = config.store_dir()?;
    FileEstimateRecorder::open(store_dir)
}

/// Open the estimate recorder at a custom directory
pub fn open_recorder_at(store_dir: PathBuf) -> Result<FileEstimateRecorder> {
    FileEstimateRecorder::open(store_dir)
}

/// Build the same-region distance table for an opened reference repository
///
/// Defaults come from the compiled table; tariff `[[same_region]]` entries
/// override per code.
pub fn same_region_table(repo: &FileReferenceRepository) -> SameRegionTable {
    constants::build_same_region_table(repo.loader().same_region_overrides())
}
