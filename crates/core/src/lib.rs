pub mod errors;
pub mod models;
pub mod sample;
pub mod services;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use errors::CoreError;
use models::{
    earning::Earning,
    stats::{EarningsStats, EarningsSummary},
    timeframe::TimeFrame,
};
use services::{
    format_service::FormatService, series_service::SeriesService, stats_service::StatsService,
};

/// Number of points in the synthetic starter series.
const SAMPLE_POINTS: u32 = 30;

/// Main entry point for the Earnings Tracker core library.
///
/// Owns the full earnings series, the active time frame, and the user's
/// point selection; exposes the visible series and every derived figure
/// the chart frontend displays. All methods are synchronous — mutations
/// arrive one at a time from the input layer, and the visible series is
/// recomputed before the mutator returns, so readers never observe a
/// half-applied state.
#[must_use]
pub struct EarningsTracker {
    all_earnings: Vec<Earning>,
    time_frame: TimeFrame,
    /// Cached subsequence for the active frame, refreshed on load and
    /// frame change.
    visible: Vec<Earning>,
    selection: Option<Earning>,
    /// Externally supplied account balance, independent of the charted
    /// series. Shown whenever no point is highlighted.
    current_balance: Option<f64>,
    series_service: SeriesService,
    stats_service: StatsService,
    format_service: FormatService,
}

impl std::fmt::Debug for EarningsTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EarningsTracker")
            .field("points", &self.all_earnings.len())
            .field("time_frame", &self.time_frame)
            .field("visible", &self.visible.len())
            .field("selected", &self.selection.is_some())
            .finish()
    }
}

impl EarningsTracker {
    /// Create a tracker with no data. Every frame shows an empty chart
    /// until [`load`](Self::load) is called.
    pub fn create_new() -> Self {
        Self::build(Vec::new(), None)
    }

    /// Create a tracker seeded with a synthetic 30-day series, balance
    /// taken from the latest sample. Useful for demos and frontend work
    /// before a real backend is wired up.
    pub fn with_sample_data() -> Self {
        let points = sample::generate_sample_earnings(SAMPLE_POINTS, Utc::now());
        let balance = points.last().map(|e| e.amount);
        Self::build(points, balance)
    }

    // ── Series Loading ──────────────────────────────────────────────

    /// Replace the full series wholesale. Accepts any input (including
    /// empty); clears the selection, re-derives the visible series, and
    /// seeds the balance from the last point.
    pub fn load(&mut self, points: Vec<Earning>) {
        debug!("load: replacing series with {} points", points.len());
        self.current_balance = points.last().map(|e| e.amount);
        self.all_earnings = points;
        self.selection = None;
        self.refresh_visible();
    }

    /// Like [`load`](Self::load), but rejects a series whose dates are
    /// not non-decreasing.
    pub fn load_validated(&mut self, points: Vec<Earning>) -> Result<(), CoreError> {
        self.series_service.validate_order(&points)?;
        self.load(points);
        Ok(())
    }

    /// Set or clear the externally supplied account balance.
    pub fn set_current_balance(&mut self, balance: Option<f64>) {
        self.current_balance = balance;
    }

    // ── Time Frame ──────────────────────────────────────────────────

    /// Switch the active lookback frame and recompute the visible series
    /// synchronously. Every frame value is valid; re-selecting the
    /// current frame leaves the visible content equal.
    pub fn select_time_frame(&mut self, frame: TimeFrame) {
        self.time_frame = frame;
        self.refresh_visible();
    }

    /// The active lookback frame.
    #[must_use]
    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    /// The subsequence of the series inside the active frame's lookback,
    /// in original order. Empty when nothing falls inside the window.
    #[must_use]
    pub fn visible_series(&self) -> &[Earning] {
        &self.visible
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Highlight a point (the gesture layer supplies the nearest point to
    /// the touch). No-op when the visible series is empty — selection
    /// cannot occur over an empty chart, so a stray call is ignored.
    pub fn select_point(&mut self, point: Earning) {
        if self.visible.is_empty() {
            debug!("select_point ignored: visible series is empty");
            return;
        }
        self.selection = Some(point);
    }

    /// Release the highlight; stats fall back to the account balance.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The currently highlighted point, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Earning> {
        self.selection.as_ref()
    }

    // ── Stats ───────────────────────────────────────────────────────

    /// Selection-aware header figures: baseline balance when nothing is
    /// highlighted, point-relative deltas while a point is.
    #[must_use]
    pub fn current_stats(&self) -> EarningsStats {
        match &self.selection {
            Some(point) => self.stats_service.on_select(&self.visible, point),
            None => self.stats_service.baseline(self.current_balance),
        }
    }

    /// Lifetime and trailing-one-month earnings over the full series.
    pub fn summary(&self) -> Result<EarningsSummary, CoreError> {
        self.stats_service.summary(&self.all_earnings, Utc::now())
    }

    // ── Formatted Display Values ────────────────────────────────────

    /// Headline balance as currency text, or `None` when no balance is
    /// known (renders as empty).
    #[must_use]
    pub fn balance_formatted(&self) -> Option<String> {
        self.current_stats()
            .balance
            .map(|b| self.format_service.format_amount(b))
    }

    /// Delta-from-start as currency text; zero when nothing is selected.
    #[must_use]
    pub fn earnings_at_formatted(&self) -> String {
        let delta = self.current_stats().delta_amount.unwrap_or(0.0);
        self.format_service.format_amount(delta)
    }

    /// Percentage delta in brackets, e.g. `(12.34%)`; zero when nothing
    /// is selected.
    #[must_use]
    pub fn earnings_at_percentage_formatted(&self) -> String {
        let percent = self.current_stats().delta_percent.unwrap_or(0.0);
        self.format_service.format_percentage_with_brackets(percent)
    }

    /// Highlighted date as `5 Jan 2026`; today's date when nothing is
    /// selected.
    #[must_use]
    pub fn earnings_date_formatted(&self) -> String {
        let date = self.current_stats().date.unwrap_or_else(Utc::now);
        self.format_service.format_date(date)
    }

    /// Trailing-month line with suffix, e.g. `$120.00 (9.80%) Past 30 days`.
    /// `None` when the trailing month holds no data.
    #[must_use]
    pub fn earnings_display_text(&self) -> Option<String> {
        let summary = self.summary().ok()?;
        let amount = summary.last_month_earnings?;
        let percent = summary.last_month_earnings_percent?;
        Some(format!(
            "{} {} Past 30 days",
            self.format_service.format_amount(amount),
            self.format_service.format_percentage_with_brackets(percent)
        ))
    }

    /// Trailing-month line prefixed with `+`, or `None` without data.
    #[must_use]
    pub fn last_month_earnings_text(&self) -> Option<String> {
        let summary = self.summary().ok()?;
        let amount = summary.last_month_earnings?;
        let percent = summary.last_month_earnings_percent?;
        Some(format!(
            "+{} {}",
            self.format_service.format_amount(amount),
            self.format_service.format_percentage_with_brackets(percent)
        ))
    }

    /// Lifetime line prefixed with `+`, or `None` without data.
    #[must_use]
    pub fn total_earnings_text(&self) -> Option<String> {
        let summary = self.summary().ok()?;
        let amount = summary.total_earnings?;
        let percent = summary.total_earnings_percent?;
        Some(format!(
            "+{} {}",
            self.format_service.format_amount(amount),
            self.format_service.format_percentage_with_brackets(percent)
        ))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export the full series as a JSON string for the frontend or a
    /// backend sync layer.
    pub fn export_series_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.all_earnings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize series: {e}")))
    }

    /// Replace the series from a JSON string (backend-supplied data).
    /// Returns the number of points loaded.
    pub fn import_series_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let points: Vec<Earning> = serde_json::from_str(json)?;
        let count = points.len();
        self.load(points);
        Ok(count)
    }

    // ── Convenience Helpers ─────────────────────────────────────────

    /// Total number of points in the full series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.all_earnings.len()
    }

    /// Date of the earliest point in the full series.
    #[must_use]
    pub fn earliest_date(&self) -> Option<DateTime<Utc>> {
        self.all_earnings.first().map(|e| e.date)
    }

    /// Date of the latest point in the full series.
    #[must_use]
    pub fn latest_date(&self) -> Option<DateTime<Utc>> {
        self.all_earnings.last().map(|e| e.date)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn refresh_visible(&mut self) {
        match self
            .series_service
            .visible_series(&self.all_earnings, self.time_frame, Utc::now())
        {
            Ok(visible) => self.visible = visible,
            Err(e) => {
                // Unreachable for any real clock; degrade to an empty chart.
                warn!("visible series recompute failed: {e}");
                self.visible.clear();
            }
        }
    }

    fn build(points: Vec<Earning>, current_balance: Option<f64>) -> Self {
        let mut tracker = Self {
            all_earnings: points,
            time_frame: TimeFrame::default(),
            visible: Vec::new(),
            selection: None,
            current_balance,
            series_service: SeriesService::new(),
            stats_service: StatsService::new(),
            format_service: FormatService::new(),
        };
        tracker.refresh_visible();
        tracker
    }
}
