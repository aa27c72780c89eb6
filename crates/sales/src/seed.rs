//! Demo data.
//!
//! Dashboard: five days in February 2024 with daily totals 15 000, 18 000,
//! 12 000, 20 000 and 25 000, split 60/40 between online and offline.
//!
//! Profile: orders credited to `AlexSmirnov` for January to March 2025, with
//! completed revenue of 120 000, 135 000 and 110 000 per month.

use chrono::NaiveDate;

use crate::order::{OrderStatus, RecentOrder};
use crate::transaction::{SalesChannel, SalesTransaction};

use SalesChannel::{Offline, Online};

// (day of February 2024, hour, minute, amount, channel)
const SEED: [(u32, u32, u32, u64, SalesChannel); 15] = [
    (10, 9, 30, 5_000, Online),
    (10, 13, 15, 6_000, Offline),
    (10, 17, 40, 4_000, Online),
    (11, 11, 5, 8_000, Online),
    (11, 15, 20, 4_000, Offline),
    (11, 19, 45, 6_000, Online),
    (12, 10, 10, 3_000, Offline),
    (12, 14, 30, 5_000, Online),
    (12, 18, 0, 4_000, Offline),
    (13, 12, 0, 7_000, Online),
    (13, 16, 45, 9_000, Offline),
    (13, 20, 10, 4_000, Online),
    (14, 9, 50, 10_000, Offline),
    (14, 13, 30, 9_000, Online),
    (14, 17, 15, 6_000, Online),
];

pub fn transactions() -> Vec<SalesTransaction> {
    SEED.iter()
        .filter_map(|&(day, hour, minute, amount, channel)| {
            let ts = NaiveDate::from_ymd_opt(2024, 2, day)?.and_hms_opt(hour, minute, 0)?;
            Some(SalesTransaction::new(ts, amount, channel))
        })
        .collect()
}

// (order no, year, month, day, client, seller, items, amount, status)
#[allow(clippy::type_complexity)]
const ORDERS: [(&str, i32, u32, u32, &str, &str, u32, u64, OrderStatus); 11] = [
    ("ORD-7601", 2025, 1, 14, "Мария Волкова", "AlexSmirnov", 2, 70_000, OrderStatus::Completed),
    ("ORD-7605", 2025, 1, 27, "Сергей Орлов", "AlexSmirnov", 1, 50_000, OrderStatus::Completed),
    ("ORD-7612", 2025, 2, 6, "Анна Белова", "AlexSmirnov", 4, 80_000, OrderStatus::Completed),
    ("ORD-7620", 2025, 2, 21, "Павел Никитин", "AlexSmirnov", 2, 55_000, OrderStatus::Completed),
    ("ORD-7631", 2025, 3, 1, "Ольга Морозова", "AlexSmirnov", 2, 41_500, OrderStatus::Completed),
    ("ORD-7633", 2025, 3, 2, "Игорь Лебедев", "AlexSmirnov", 1, 18_000, OrderStatus::Cancelled),
    ("ORD-7640", 2025, 3, 4, "Наталья Фёдорова", "OlgaIvanova", 1, 30_000, OrderStatus::Completed),
    ("ORD-7642", 2025, 3, 5, "Елена Сидорова", "AlexSmirnov", 2, 67_800, OrderStatus::Processing),
    ("ORD-7650", 2025, 3, 10, "Дмитрий Козлов", "AlexSmirnov", 1, 23_500, OrderStatus::Completed),
    ("ORD-7651", 2025, 3, 12, "Ирина Петрова", "AlexSmirnov", 3, 45_000, OrderStatus::Completed),
    ("ORD-7600", 2024, 12, 30, "Виктор Зайцев", "AlexSmirnov", 1, 12_000, OrderStatus::Cancelled),
];

pub fn orders() -> Vec<RecentOrder> {
    ORDERS
        .iter()
        .filter_map(|&(id, year, month, day, client, seller, items, amount, status)| {
            Some(RecentOrder {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(year, month, day)?,
                client: client.to_string(),
                seller: seller.to_string(),
                items,
                amount,
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OrderHistory, SalesAggregator};

    #[test]
    fn seed_reproduces_dashboard_figures() {
        let agg = SalesAggregator::new(transactions());

        assert_eq!(agg.summary().transaction_count, SEED.len());
        assert_eq!(agg.summary().total_amount, 90_000);

        let days = agg.by_day();
        assert_eq!(
            days.labels(),
            vec!["2024-02-10", "2024-02-11", "2024-02-12", "2024-02-13", "2024-02-14"]
        );
        assert_eq!(days.values(), vec![15_000, 18_000, 12_000, 20_000, 25_000]);

        assert_eq!(agg.by_channel().values(), vec![60.0, 40.0]);

        let hours = agg.by_hour_bucket();
        assert_eq!(hours.labels(), vec!["9:00", "11:00", "13:00", "15:00", "17:00", "19:00"]);
        assert_eq!(hours.values(), vec![18_000, 15_000, 20_000, 13_000, 14_000, 10_000]);

        let week = agg.by_weekday();
        assert_eq!(week.labels(), vec!["Monday", "Tuesday", "Wednesday", "Saturday", "Sunday"]);
        assert_eq!(week.values(), vec![12_000, 20_000, 25_000, 15_000, 18_000]);
    }

    #[test]
    fn seed_reproduces_profile_figures() {
        let history = OrderHistory::new(orders());
        assert_eq!(history.orders().len(), ORDERS.len());

        let recent: Vec<_> = history
            .recent_for("AlexSmirnov", 3)
            .into_iter()
            .map(|o| (o.id, o.status))
            .collect();
        assert_eq!(
            recent,
            vec![
                ("ORD-7651".to_string(), OrderStatus::Completed),
                ("ORD-7650".to_string(), OrderStatus::Completed),
                ("ORD-7642".to_string(), OrderStatus::Processing),
            ]
        );

        let monthly = history.monthly_sales_for("AlexSmirnov");
        assert_eq!(monthly.labels(), vec!["2025-01", "2025-02", "2025-03"]);
        assert_eq!(monthly.values(), vec![120_000, 135_000, 110_000]);
    }
}
