//! Vendor Management Service
//!
//! Vendor listing, approval and onboarding submission. Served from fixtures.

use super::{simulate_latency, ApiError};
use crate::mock;
use crate::models::{Vendor, VendorStatus};
use crate::onboarding::VendorApplication;

pub async fn list_vendors() -> Result<Vec<Vendor>, ApiError> {
    simulate_latency().await;
    Ok(mock::vendors())
}

pub async fn set_vendor_status(vendor: Vendor, status: VendorStatus) -> Result<Vendor, ApiError> {
    simulate_latency().await;
    log::info!("vendor {} -> {} (mock)", vendor.id, status.label());
    Ok(Vendor { status, ..vendor })
}

/// Returns the new application reference
pub async fn submit_vendor_application(application: &VendorApplication) -> Result<String, ApiError> {
    simulate_latency().await;
    let payload = serde_json::to_string(application).map_err(|e| ApiError::Encode(e.to_string()))?;
    log::debug!("vendor application payload: {}", payload);
    Ok(format!("VND-{:05}", js_sys::Date::now() as u64 % 100_000))
}
