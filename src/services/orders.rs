//! Order Service (fixtures)

use super::{simulate_latency, ApiError};
use crate::mock;
use crate::models::{Order, OrderStatus};

pub async fn list_orders() -> Result<Vec<Order>, ApiError> {
    simulate_latency().await;
    Ok(mock::orders())
}

pub fn count_by_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}
