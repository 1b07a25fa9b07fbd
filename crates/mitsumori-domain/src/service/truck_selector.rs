//! Truck tier selection by box count

use mitsumori_types::Error;

use crate::model::TruckTier;

/// Pick the cheapest tier whose capacity covers the box count
///
/// Business rule: selection is by minimum price among covering tiers, not
/// minimum capacity. Price ties break to the smallest qualifying capacity
/// so the choice stays deterministic. Fails when no tier covers the load.
pub fn cheapest_tier(tiers: &[TruckTier], total_boxes: u32) -> Result<&TruckTier, Error> {
    tiers
        .iter()
        .filter(|tier| tier.covers(total_boxes))
        .min_by_key(|tier| (tier.price_yen, tier.max_boxes))
        .ok_or(Error::NoCapacityAvailable(total_boxes))
}
