//! Domain model types

pub mod customer;
pub mod estimate;
pub mod option_service;
pub mod package;
pub mod prefecture;
pub mod same_region;
pub mod truck;

pub use customer::{Customer, CustomerPackage, CustomerRecord};
pub use estimate::{EstimateRequest, EstimateResult};
pub use option_service::OptionalService;
pub use package::{PackageBox, PackageSelection};
pub use prefecture::{Prefecture, PrefectureDistance};
pub use same_region::SameRegionTable;
pub use truck::TruckTier;
