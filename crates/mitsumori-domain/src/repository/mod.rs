//! Repository trait definitions for reference data and request recording

use mitsumori_types::Error;

use crate::model::{
    Customer, CustomerPackage, EstimateResult, Prefecture, PrefectureDistance, TruckTier,
};

/// Read-only reference data store (料金マスタ)
///
/// Reference data is immutable within the scope of a request, so
/// implementations need no internal coordination between readers.
pub trait ReferenceDataRepository {
    /// All registered prefectures
    fn find_all_prefectures(&self) -> Result<Vec<Prefecture>, Error>;

    /// All distance rows linking the two prefectures, in either direction
    ///
    /// Returns every matching row so that callers can distinguish
    /// "no row" (fallback applies) from "more than one row" (corrupt data).
    fn find_distance_rows(&self, from: &str, to: &str)
        -> Result<Vec<PrefectureDistance>, Error>;

    /// Boxes per unit for a package type, None if unregistered
    fn find_boxes_per_package(&self, package_id: &str) -> Result<Option<u32>, Error>;

    /// All truck pricing tiers
    fn find_truck_tiers(&self) -> Result<Vec<TruckTier>, Error>;

    /// Unit price for an optional service, None if unregistered
    fn find_option_price(&self, service_id: &str) -> Result<Option<u32>, Error>;
}

/// Recorder for accepted estimate requests (見積もり依頼の記録)
///
/// Called only after the calculator succeeds. The customer row, option
/// associations, and package rows form one logical unit of work; partial
/// persistence must not be left user-visible.
pub trait EstimateRecorder {
    /// Insert a customer record and return the generated id
    fn insert_customer(&self, customer: &Customer) -> Result<u64, Error>;

    /// Associate an optional service with a customer, returns rows written
    fn insert_customer_option(&self, customer_id: u64, service_id: &str) -> Result<usize, Error>;

    /// Bulk-insert package selections, returns rows written per entry
    fn batch_insert_customer_packages(
        &self,
        packages: &[CustomerPackage],
    ) -> Result<Vec<usize>, Error>;

    /// Attach the computed price breakdown to a recorded customer
    fn attach_result(&self, customer_id: u64, result: &EstimateResult) -> Result<(), Error>;

    /// Remove a customer record and everything attached to it
    ///
    /// Used as compensating cleanup when a later write in the unit of work
    /// fails. Deleting an id that is not present is not an error.
    fn delete_customer(&self, customer_id: u64) -> Result<(), Error>;
}
