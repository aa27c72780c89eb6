use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::series::DerivedSeries;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Processing,
    Cancelled,
}

/// A customer order credited to one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrder {
    /// Order number, e.g. "ORD-7651".
    pub id: String,
    pub date: NaiveDate,
    pub client: String,
    /// Login of the seller the order is credited to.
    pub seller: String,
    /// Number of line items.
    pub items: u32,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    pub status: OrderStatus,
}

/// Orders per seller, backing the profile screen.
///
/// Read-only once built, like the transaction set behind `SalesAggregator`.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<RecentOrder>,
}

impl OrderHistory {
    pub fn new(orders: Vec<RecentOrder>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[RecentOrder] {
        &self.orders
    }

    /// The seller's newest `limit` orders, newest first, whatever their status.
    ///
    /// Orders on the same day keep the higher order number first.
    pub fn recent_for(&self, seller: &str, limit: usize) -> Vec<RecentOrder> {
        let mut mine: Vec<&RecentOrder> = self.orders.iter().filter(|o| o.seller == seller).collect();
        mine.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        mine.into_iter().take(limit).cloned().collect()
    }

    /// The seller's revenue per month, oldest first. Label: `YYYY-MM`.
    ///
    /// Only completed orders count; months with none are absent.
    pub fn monthly_sales_for(&self, seller: &str) -> DerivedSeries<u64> {
        let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
        for order in self
            .orders
            .iter()
            .filter(|o| o.seller == seller && o.status == OrderStatus::Completed)
        {
            let sum = months.entry((order.date.year(), order.date.month())).or_default();
            *sum = sum.saturating_add(order.amount);
        }

        months
            .into_iter()
            .map(|((year, month), sum)| (format!("{year:04}-{month:02}"), sum))
            .collect()
    }
}
