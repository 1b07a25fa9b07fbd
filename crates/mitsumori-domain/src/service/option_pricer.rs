//! Optional service price summation

use std::collections::BTreeSet;

use mitsumori_types::Error;

use crate::repository::ReferenceDataRepository;

/// Sum the unit prices of the selected optional services
///
/// The input is treated as a set: a duplicated id is counted once, so a
/// double-submitted form cannot double-charge. An empty selection totals
/// zero; an unregistered service id fails.
pub fn total_option_price<R: ReferenceDataRepository>(
    repo: &R,
    service_ids: &[String],
) -> Result<u32, Error> {
    let unique: BTreeSet<&str> = service_ids.iter().map(String::as_str).collect();

    let mut total = 0u32;
    for service_id in unique {
        let price = repo
            .find_option_price(service_id)?
            .ok_or_else(|| Error::UnknownService(service_id.to_string()))?;
        total += price;
    }
    Ok(total)
}
