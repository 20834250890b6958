use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-relative display figures for the chart header.
///
/// The core computes these — the frontend just renders them. With no
/// selection active, only `balance` is populated (the account balance);
/// while a point is highlighted, all four fields describe that point
/// relative to the start of the visible series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsStats {
    /// Headline balance: the selected point's amount, or the externally
    /// supplied account balance when nothing is selected
    pub balance: Option<f64>,

    /// Selected amount minus the first visible amount
    pub delta_amount: Option<f64>,

    /// Delta as a percentage of the selected amount (0 when the selected
    /// amount is zero)
    pub delta_percent: Option<f64>,

    /// Date of the highlighted sample
    pub date: Option<DateTime<Utc>>,
}

impl EarningsStats {
    /// Stats with no selection active.
    #[must_use]
    pub fn baseline(current_balance: Option<f64>) -> Self {
        Self {
            balance: current_balance,
            delta_amount: None,
            delta_percent: None,
            date: None,
        }
    }
}

/// Whole-series summary figures: lifetime and trailing-month earnings.
///
/// `None` fields mean the corresponding span held no data, and the
/// frontend omits the line entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Last amount minus first amount over the full series
    pub total_earnings: Option<f64>,

    /// Total earnings as a percentage of the last amount
    pub total_earnings_percent: Option<f64>,

    /// Last amount minus first amount over the trailing one-month window
    pub last_month_earnings: Option<f64>,

    /// Trailing-month earnings as a percentage of the last amount
    pub last_month_earnings_percent: Option<f64>,
}

impl EarningsSummary {
    /// Summary for a series with no data anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_earnings: None,
            total_earnings_percent: None,
            last_month_earnings: None,
            last_month_earnings_percent: None,
        }
    }
}
