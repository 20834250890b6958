use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::earning::Earning;
use crate::models::stats::{EarningsStats, EarningsSummary};
use crate::models::timeframe::TimeFrame;

/// Derives the header figures shown above the chart: balance,
/// delta-from-start, percentage delta, and the highlighted date.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Stats with no point highlighted: just the account balance.
    #[must_use]
    pub fn baseline(&self, current_balance: Option<f64>) -> EarningsStats {
        EarningsStats::baseline(current_balance)
    }

    /// Stats while `point` is highlighted over `visible`.
    ///
    /// `visible` must be non-empty; callers guard (selection cannot occur
    /// over an empty chart) and the façade no-ops instead of calling in.
    ///
    /// The percentage divides by the *selected* amount, not the initial
    /// one. That matches the shipped behavior and is kept as-is; a zero
    /// selected amount yields 0 rather than a division by zero.
    #[must_use]
    pub fn on_select(&self, visible: &[Earning], point: &Earning) -> EarningsStats {
        debug_assert!(!visible.is_empty(), "selection over an empty series");

        let initial = &visible[0];
        let delta_amount = point.amount - initial.amount;
        let delta_percent = if point.amount == 0.0 {
            0.0
        } else {
            (delta_amount / point.amount) * 100.0
        };

        EarningsStats {
            balance: Some(point.amount),
            delta_amount: Some(delta_amount),
            delta_percent: Some(delta_percent),
            date: Some(point.date),
        }
    }

    /// Stats after the highlight is released: back to the account balance.
    #[must_use]
    pub fn on_deselect(&self, current_balance: Option<f64>) -> EarningsStats {
        EarningsStats::baseline(current_balance)
    }

    /// Lifetime and trailing-one-month earnings over the full series.
    ///
    /// Each span's figure is its last amount minus its first; percentages
    /// use the same selected-amount denominator as [`Self::on_select`] so
    /// the header and summary never disagree on convention. Spans with no
    /// data report `None`.
    pub fn summary(
        &self,
        all: &[Earning],
        now: DateTime<Utc>,
    ) -> Result<EarningsSummary, CoreError> {
        let (total_earnings, total_earnings_percent) = span_delta(all.first(), all.last());

        let cutoff = TimeFrame::OneMonth.cutoff_from(now)?;
        let last_month: Vec<&Earning> = all.iter().filter(|e| e.date >= cutoff).collect();
        let (last_month_earnings, last_month_earnings_percent) =
            span_delta(last_month.first().copied(), last_month.last().copied());

        Ok(EarningsSummary {
            total_earnings,
            total_earnings_percent,
            last_month_earnings,
            last_month_earnings_percent,
        })
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

fn span_delta(first: Option<&Earning>, last: Option<&Earning>) -> (Option<f64>, Option<f64>) {
    match (first, last) {
        (Some(first), Some(last)) => {
            let delta = last.amount - first.amount;
            let percent = if last.amount == 0.0 {
                0.0
            } else {
                (delta / last.amount) * 100.0
            };
            (Some(delta), Some(percent))
        }
        _ => (None, None),
    }
}
