//! Sales analytics.
//!
//! Derives chart-ready series from a fixed set of transactions, and keeps
//! the per-seller order history shown on the profile screen. Every derivation
//! is a pure function of its input; nothing here mutates it.

pub mod aggregator;
pub mod buckets;
pub mod order;
pub mod seed;
pub mod series;
pub mod transaction;

pub use aggregator::{SalesAggregator, SalesSummary};
pub use buckets::HourBuckets;
pub use order::{OrderHistory, OrderStatus, RecentOrder};
pub use series::{DerivedSeries, SeriesPoint};
pub use transaction::{SalesChannel, SalesTransaction};
