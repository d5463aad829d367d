use crate::domain::money::Price;
use crate::domain::order::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate of paid orders over a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub total_sales: Price,
    pub count: usize,
}

/// Sums the paid orders in the given collection.
///
/// Orders carry no timestamps, so the period bounds are recorded on the
/// report but do not filter anything yet.
pub fn generate(
    orders: &[Order],
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
) -> Report {
    let paid = orders.iter().filter(|o| o.status() == OrderStatus::Paid);
    let (total_sales, count) = paid.fold((Price::ZERO, 0), |(total, count), order| {
        (total + order.total(), count + 1)
    });
    Report {
        period_start,
        period_end,
        total_sales,
        count,
    }
}
