use serde::Serialize;

use goldline_auth::Profile;
use goldline_sales::{DerivedSeries, OrderHistory, RecentOrder, SalesAggregator, SalesSummary};

/// Everything the sales statistics screen draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub daily: DerivedSeries<u64>,
    pub weekday: DerivedSeries<u64>,
    pub hourly: DerivedSeries<u64>,
    pub monthly: DerivedSeries<u64>,
    /// Percent per channel.
    pub channels: DerivedSeries<f64>,
    pub summary: SalesSummary,
}

impl Dashboard {
    pub fn from_sales(sales: &SalesAggregator) -> Self {
        Self {
            daily: sales.by_day(),
            weekday: sales.by_weekday(),
            hourly: sales.by_hour_bucket(),
            monthly: sales.by_month(),
            channels: sales.by_channel(),
            summary: sales.summary(),
        }
    }
}

/// How many orders the profile screen lists.
pub const RECENT_ORDERS_SHOWN: usize = 3;

/// The signed-in user's screen. Only exists while a session is open.
///
/// Both the chart and the order table are scoped to the user's own orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    /// Completed revenue per month.
    pub monthly_sales: DerivedSeries<u64>,
    /// Newest first.
    pub recent_orders: Vec<RecentOrder>,
}

impl ProfileView {
    pub fn for_profile(profile: &Profile, orders: &OrderHistory) -> Self {
        Self {
            profile: profile.clone(),
            monthly_sales: orders.monthly_sales_for(&profile.username),
            recent_orders: orders.recent_for(&profile.username, RECENT_ORDERS_SHOWN),
        }
    }
}
