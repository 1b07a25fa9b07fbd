//! Estimate calculation - orchestrates the pricing core
//!
//! Order of operations:
//! 1. Resolve distance between origin and destination
//! 2. Aggregate total box count from the package selections
//! 3. Select the truck price covering that box count
//! 4. Sum the optional-service prices
//! 5. Total = truck price + option total
//!
//! The first failing step aborts the whole computation; no partial result
//! is ever returned. Distance is reported in the result but does not enter
//! the price formula.

use mitsumori_types::Error;

use crate::model::{EstimateRequest, EstimateResult, SameRegionTable};
use crate::repository::ReferenceDataRepository;
use crate::service::{box_aggregator, distance_resolver, option_pricer, truck_selector};

/// Compute the full price breakdown for a request
pub fn compute_estimate<R: ReferenceDataRepository>(
    repo: &R,
    same_region: &SameRegionTable,
    request: &EstimateRequest,
) -> Result<EstimateResult, Error> {
    let distance_km = distance_resolver::resolve_distance(
        repo,
        same_region,
        &request.old_prefecture_id,
        &request.new_prefecture_id,
    )?;

    let total_boxes = box_aggregator::total_boxes(repo, &request.packages)?;

    let tiers = repo.find_truck_tiers()?;
    let truck_price_yen = truck_selector::cheapest_tier(&tiers, total_boxes)?.price_yen;

    let option_price_yen = option_pricer::total_option_price(repo, &request.option_services)?;

    Ok(EstimateResult {
        distance_km,
        total_boxes,
        truck_price_yen,
        option_price_yen,
        total_price_yen: truck_price_yen + option_price_yen,
    })
}
