use chrono::{DateTime, Days, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Calendar unit used when walking a [`TimeFrame`] back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarUnit {
    Day,
    Month,
}

/// User-selectable lookback window for the earnings chart.
///
/// Each frame pairs a magnitude with a calendar unit; the visible series
/// is everything dated at or after `now - magnitude units`. `All` is an
/// 18-month lookback, comfortably past the oldest data the app charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    OneDay,
    OneWeek,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    All,
}

impl TimeFrame {
    /// Short label for frame pickers ("1D", "1W", ...).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::OneDay => "1D",
            TimeFrame::OneWeek => "1W",
            TimeFrame::OneMonth => "1M",
            TimeFrame::ThreeMonths => "3M",
            TimeFrame::SixMonths => "6M",
            TimeFrame::OneYear => "1Y",
            TimeFrame::All => "ALL",
        }
    }

    /// How many calendar units this frame looks back.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        match self {
            TimeFrame::OneDay => 1,
            TimeFrame::OneWeek => 7,
            TimeFrame::OneMonth => 1,
            TimeFrame::ThreeMonths => 3,
            TimeFrame::SixMonths => 6,
            TimeFrame::OneYear => 12,
            TimeFrame::All => 18,
        }
    }

    /// The calendar unit the magnitude is counted in.
    #[must_use]
    pub fn unit(&self) -> CalendarUnit {
        match self {
            TimeFrame::OneDay | TimeFrame::OneWeek => CalendarUnit::Day,
            TimeFrame::OneMonth
            | TimeFrame::ThreeMonths
            | TimeFrame::SixMonths
            | TimeFrame::OneYear
            | TimeFrame::All => CalendarUnit::Month,
        }
    }

    /// Compute the inclusive cutoff for this frame: `now - magnitude units`.
    ///
    /// Month subtraction follows calendar rules (same day-of-month where
    /// possible, clamped at month end), not a fixed 30-day approximation.
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        let cutoff = match self.unit() {
            CalendarUnit::Day => now.checked_sub_days(Days::new(u64::from(self.magnitude()))),
            CalendarUnit::Month => now.checked_sub_months(Months::new(self.magnitude())),
        };
        cutoff.ok_or_else(|| {
            CoreError::DateOutOfRange(format!(
                "cannot subtract {} from {now}",
                self.label()
            ))
        })
    }

    /// All frames in picker order.
    #[must_use]
    pub fn all_frames() -> [TimeFrame; 7] {
        [
            TimeFrame::OneDay,
            TimeFrame::OneWeek,
            TimeFrame::OneMonth,
            TimeFrame::ThreeMonths,
            TimeFrame::SixMonths,
            TimeFrame::OneYear,
            TimeFrame::All,
        ]
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
