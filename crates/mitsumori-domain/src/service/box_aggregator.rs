//! Box count aggregation across package selections

use mitsumori_types::Error;

use crate::model::PackageSelection;
use crate::repository::ReferenceDataRepository;

/// Total number of boxes needed for the selected packages
///
/// Each selection contributes boxes-per-unit × quantity. An empty
/// selection list totals zero; an unregistered package type fails, and a
/// total past `u32::MAX` fails rather than wrapping into a small load.
pub fn total_boxes<R: ReferenceDataRepository>(
    repo: &R,
    selections: &[PackageSelection],
) -> Result<u32, Error> {
    let mut total = 0u32;
    for selection in selections {
        let boxes_per_unit = repo
            .find_boxes_per_package(&selection.package_id)?
            .ok_or_else(|| Error::UnknownPackageType(selection.package_id.clone()))?;
        let boxes = boxes_per_unit
            .checked_mul(selection.quantity)
            .ok_or(Error::BoxCountOverflow)?;
        total = total.checked_add(boxes).ok_or(Error::BoxCountOverflow)?;
    }
    Ok(total)
}
