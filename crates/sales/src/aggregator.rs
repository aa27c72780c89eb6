use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::Serialize;

use crate::buckets::HourBuckets;
use crate::series::DerivedSeries;
use crate::transaction::{SalesChannel, SalesTransaction};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub transaction_count: usize,
    pub total_amount: u64,
}

/// Grouped views over a fixed transaction set.
///
/// Each `by_*` method is independent and deterministic. Grouped series
/// (`by_day`, `by_weekday`, `by_hour_bucket`, `by_month`) only contain buckets
/// that have data; `by_channel` always lists every channel because it drives
/// a fixed legend.
#[derive(Debug, Clone)]
pub struct SalesAggregator {
    transactions: Vec<SalesTransaction>,
    buckets: HourBuckets,
}

impl SalesAggregator {
    pub fn new(transactions: Vec<SalesTransaction>) -> Self {
        Self::with_buckets(transactions, HourBuckets::default())
    }

    pub fn with_buckets(transactions: Vec<SalesTransaction>, buckets: HourBuckets) -> Self {
        tracing::debug!(
            transactions = transactions.len(),
            opening = buckets.opening(),
            closing = buckets.closing(),
            "sales aggregator loaded"
        );
        Self {
            transactions,
            buckets,
        }
    }

    pub fn transactions(&self) -> &[SalesTransaction] {
        &self.transactions
    }

    pub fn buckets(&self) -> HourBuckets {
        self.buckets
    }

    /// Daily totals, oldest date first. Label: `YYYY-MM-DD`.
    pub fn by_day(&self) -> DerivedSeries<u64> {
        let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for tx in &self.transactions {
            let sum = days.entry(tx.timestamp.date()).or_default();
            *sum = sum.saturating_add(tx.amount);
        }

        days.into_iter()
            .map(|(date, sum)| (date.format("%Y-%m-%d").to_string(), sum))
            .collect()
    }

    /// Totals per weekday, Monday first, whatever order the input is in.
    pub fn by_weekday(&self) -> DerivedSeries<u64> {
        let mut week: [Option<u64>; 7] = [None; 7];
        for tx in &self.transactions {
            let slot = &mut week[tx.timestamp.weekday().num_days_from_monday() as usize];
            *slot = Some(slot.unwrap_or(0).saturating_add(tx.amount));
        }

        WEEK.iter()
            .zip(week)
            .filter_map(|(day, sum)| sum.map(|s| (weekday_label(*day), s)))
            .collect()
    }

    /// Totals per opening-hours bucket, earliest bucket first. Label: `H:00`.
    ///
    /// Sales outside opening hours are not counted here.
    pub fn by_hour_bucket(&self) -> DerivedSeries<u64> {
        let mut slots: BTreeMap<u32, u64> = BTreeMap::new();
        let mut outside = 0usize;
        for tx in &self.transactions {
            match self.buckets.bucket_of(tx.timestamp.hour()) {
                Some(start) => {
                    let sum = slots.entry(start).or_default();
                    *sum = sum.saturating_add(tx.amount);
                }
                None => outside += 1,
            }
        }
        if outside > 0 {
            tracing::debug!(outside, "transactions outside opening hours skipped");
        }

        slots
            .into_iter()
            .map(|(start, sum)| (HourBuckets::label(start), sum))
            .collect()
    }

    /// Share of the total per channel, in percent, in declared channel order.
    ///
    /// Shares sum to 100 when anything was sold; all zero otherwise.
    pub fn by_channel(&self) -> DerivedSeries<f64> {
        let mut sums: BTreeMap<SalesChannel, u64> =
            SalesChannel::ALL.iter().map(|c| (*c, 0)).collect();
        for tx in &self.transactions {
            let sum = sums.entry(tx.channel).or_default();
            *sum = sum.saturating_add(tx.amount);
        }
        let total = sums.values().fold(0u64, |acc, s| acc.saturating_add(*s));

        SalesChannel::ALL
            .iter()
            .map(|channel| {
                let sum = sums.get(channel).copied().unwrap_or(0);
                let share = if total == 0 {
                    0.0
                } else {
                    sum as f64 / total as f64 * 100.0
                };
                (channel.as_str(), share)
            })
            .collect()
    }

    /// Monthly totals, oldest month first. Label: `YYYY-MM`.
    pub fn by_month(&self) -> DerivedSeries<u64> {
        let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
        for tx in &self.transactions {
            let key = (tx.timestamp.year(), tx.timestamp.month());
            let sum = months.entry(key).or_default();
            *sum = sum.saturating_add(tx.amount);
        }

        months
            .into_iter()
            .map(|((year, month), sum)| (format!("{year:04}-{month:02}"), sum))
            .collect()
    }

    pub fn summary(&self) -> SalesSummary {
        SalesSummary {
            transaction_count: self.transactions.len(),
            total_amount: self
                .transactions
                .iter()
                .fold(0u64, |acc, tx| acc.saturating_add(tx.amount)),
        }
    }
}
