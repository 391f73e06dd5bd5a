//! Analytics Service (fixtures)

use super::{simulate_latency, ApiError};
use crate::mock;
use crate::models::DashboardStats;

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    simulate_latency().await;
    Ok(mock::dashboard_stats())
}
