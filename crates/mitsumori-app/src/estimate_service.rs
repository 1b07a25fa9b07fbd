//! Estimate Service - Core Use Case for Moving-Cost Estimation
//!
//! This service orchestrates the complete estimate workflow:
//! 1. Compute the price breakdown via the domain pricing core
//! 2. On success, record the customer, chosen options, and chosen packages
//! 3. Attach the computed breakdown to the recorded request
//!
//! Recording never happens when pricing fails, and a recording failure is
//! reported separately so callers can tell "could not price" apart from
//! "priced but could not save".

use thiserror::Error;

use mitsumori_domain::model::{
    Customer, CustomerPackage, EstimateRequest, EstimateResult,
    SameRegionTable,
};
use mitsumori_domain::repository::{EstimateRecorder, ReferenceDataRepository};
use mitsumori_domain::service::compute_estimate;
use mitsumori_types::Error;

/// Errors specific to the estimate service
#[derive(Debug, Error)]
pub enum EstimateServiceError {
    /// The pricing core rejected the request (no record was written)
    #[error("Pricing failed: {0}")]
    Pricing(#[source] Error),

    /// Pricing succeeded but the request could not be recorded
    #[error("Failed to record estimate request: {0}")]
    Persistence(#[source] Error),
}

/// Outcome of a successful estimate run
#[derive(Debug, Clone)]
pub struct EstimateOutcome {
    pub result: EstimateResult,
    /// Generated customer id, when the request was recorded
    pub customer_id: Option<u64>,
}

/// Compute an estimate without recording anything
pub fn price_only<R: ReferenceDataRepository>(
    reference: &R,
    same_region: &SameRegionTable,
    request: &EstimateRequest,
) -> Result<EstimateResult, EstimateServiceError> {
    compute_estimate(reference, same_region, request).map_err(EstimateServiceError::Pricing)
}

/// Compute an estimate and record the accepted request
///
/// The customer row, option associations, and package rows are written as
/// one logical unit; the recorder is only reached after pricing succeeds.
pub fn price_and_record<R, S>(
    reference: &R,
    same_region: &SameRegionTable,
    recorder: &S,
    customer: &Customer,
    request: &EstimateRequest,
) -> Result<EstimateOutcome, EstimateServiceError>
where
    R: ReferenceDataRepository,
    S: EstimateRecorder,
{
    let result = price_only(reference, same_region, request)?;

    let customer_id = record_request(recorder, customer, request, &result)
        .map_err(EstimateServiceError::Persistence)?;

    Ok(EstimateOutcome {
        result,
        customer_id: Some(customer_id),
    })
}

fn record_request<S: EstimateRecorder>(
    recorder: &S,
    customer: &Customer,
    request: &EstimateRequest,
    result: &EstimateResult,
) -> Result<u64, Error> {
    let customer_id = recorder.insert_customer(customer)?;

    // Any failure past this point would leave a customer-only record in the
    // store, so compensate by deleting it before reporting the error.
    if let Err(e) = record_details(recorder, customer_id, request, result) {
        let _ = recorder.delete_customer(customer_id);
        return Err(e);
    }
    Ok(customer_id)
}

fn record_details<S: EstimateRecorder>(
    recorder: &S,
    customer_id: u64,
    request: &EstimateRequest,
    result: &EstimateResult,
) -> Result<(), Error> {
    for service_id in &request.option_services {
        recorder.insert_customer_option(customer_id, service_id)?;
    }

    let package_rows: Vec<CustomerPackage> = request
        .packages
        .iter()
        .map(|selection| CustomerPackage {
            customer_id,
            package_id: selection.package_id.clone(),
            quantity: selection.quantity,
        })
        .collect();
    recorder.batch_insert_customer_packages(&package_rows)?;

    recorder.attach_result(customer_id, result)?;
    Ok(())
}
