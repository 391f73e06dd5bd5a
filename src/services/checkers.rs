//! Quality Checker Service
//!
//! Checker registration and inspection assignments. Served from fixtures.

use super::{simulate_latency, ApiError};
use crate::mock;
use crate::models::Inspection;
use crate::onboarding::CheckerApplication;

/// `CHK-0042`
pub fn format_checker_id(seq: u32) -> String {
    format!("CHK-{:04}", seq % 10_000)
}

/// Returns the issued checker ID
pub async fn register_checker(application: &CheckerApplication) -> Result<String, ApiError> {
    simulate_latency().await;
    log::info!("registered checker {} (mock)", application.email);
    Ok(format_checker_id((js_sys::Date::now() as u64 % 10_000) as u32))
}

pub async fn list_inspections(checker_id: &str) -> Result<Vec<Inspection>, ApiError> {
    simulate_latency().await;
    log::debug!("loading inspections for {}", checker_id);
    Ok(mock::inspections())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checker_id() {
        assert_eq!(format_checker_id(42), "CHK-0042");
        assert_eq!(format_checker_id(123_456), "CHK-3456");
    }
}
