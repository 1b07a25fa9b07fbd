//! Distance resolution between prefectures

use mitsumori_types::{ConfigError, Error};

use crate::model::SameRegionTable;
use crate::repository::ReferenceDataRepository;

/// Fallback distance when no row exists for a pair of distinct prefectures
///
/// Missing pairwise rows are expected in the reference data; degrading to a
/// fixed distance is policy, not an error.
pub const DEFAULT_PAIR_DISTANCE_KM: f64 = 50.0;

/// Resolve the distance in km between origin and destination
///
/// Same-prefecture moves use the fixed fallback table; every valid code
/// must have an entry there. Cross-prefecture moves look up the pairwise
/// table in both orderings. More than one matching row is corrupt data and
/// fails, never averaged or arbitrarily picked.
pub fn resolve_distance<R: ReferenceDataRepository>(
    repo: &R,
    same_region: &SameRegionTable,
    from: &str,
    to: &str,
) -> Result<f64, Error> {
    if from == to {
        return same_region
            .lookup(from)
            .ok_or_else(|| ConfigError::MissingSameRegionDistance(from.to_string()).into());
    }

    let rows = repo.find_distance_rows(from, to)?;
    match rows.len() {
        0 => Ok(DEFAULT_PAIR_DISTANCE_KM),
        1 => Ok(rows[0].distance_km),
        count => Err(Error::AmbiguousDistance {
            from: from.to_string(),
            to: to.to_string(),
            count,
        }),
    }
}
