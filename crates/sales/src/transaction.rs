use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where a sale happened.
///
/// Declaration order is the display order of the channel chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesChannel {
    Online,
    Offline,
}

impl SalesChannel {
    /// Every channel, in declared order.
    pub const ALL: [SalesChannel; 2] = [SalesChannel::Online, SalesChannel::Offline];

    pub fn as_str(self) -> &'static str {
        match self {
            SalesChannel::Online => "online",
            SalesChannel::Offline => "offline",
        }
    }
}

impl core::fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTransaction {
    /// Shop wall-clock time.
    pub timestamp: NaiveDateTime,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    pub channel: SalesChannel,
}

impl SalesTransaction {
    pub fn new(timestamp: NaiveDateTime, amount: u64, channel: SalesChannel) -> Self {
        Self {
            timestamp,
            amount,
            channel,
        }
    }
}
