use serde::Serialize;

use goldline_core::{ValidationError, ViolationKind, Violations};

/// Fixed hour-of-day buckets covering the shop's opening hours.
///
/// Buckets start at `opening` and every `width` hours after, the last one
/// ending at `closing` (it may be shorter than `width`). Hours outside
/// `[opening, closing)` belong to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBuckets {
    opening: u32,
    closing: u32,
    width: u32,
}

impl Default for HourBuckets {
    /// 9:00 to 21:00 in two-hour steps.
    fn default() -> Self {
        Self {
            opening: 9,
            closing: 21,
            width: 2,
        }
    }
}

impl HourBuckets {
    pub fn new(opening: u32, closing: u32, width: u32) -> Result<Self, ValidationError> {
        let mut v = Violations::new();
        v.check(opening <= 23, "opening_hour", ViolationKind::OutOfRange { min: 0, max: 23 })
            .check(
                opening < closing && closing <= 24,
                "closing_hour",
                ViolationKind::OutOfRange {
                    min: opening as usize + 1,
                    max: 24,
                },
            )
            .check(width > 0, "bucket_hours", ViolationKind::NotPositive);
        v.into_result()?;

        Ok(Self {
            opening,
            closing,
            width,
        })
    }

    pub fn opening(&self) -> u32 {
        self.opening
    }

    pub fn closing(&self) -> u32 {
        self.closing
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bucket start hours, ascending.
    pub fn starts(&self) -> impl Iterator<Item = u32> {
        (self.opening..self.closing).step_by(self.width as usize)
    }

    /// Start hour of the bucket containing `hour`.
    pub fn bucket_of(&self, hour: u32) -> Option<u32> {
        if hour < self.opening || hour >= self.closing {
            return None;
        }
        Some(self.opening + (hour - self.opening) / self.width * self.width)
    }

    /// "9:00", "11:00", ...
    pub fn label(start: u32) -> String {
        format!("{start}:00")
    }
}
