use chrono::{DateTime, Utc};
use log::debug;

use crate::errors::CoreError;
use crate::models::earning::Earning;
use crate::models::timeframe::TimeFrame;

/// Computes the visible subsequence of the earnings series for a time frame.
///
/// The filter is pure in `now` so window behavior is deterministic under
/// test; the façade passes the wall clock.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Filter `all` down to the points dated at or after the frame's cutoff.
    ///
    /// The cutoff comparison is inclusive and the original order is
    /// preserved. An empty input, or a window no point survives, yields an
    /// empty vector — never an error.
    pub fn visible_series(
        &self,
        all: &[Earning],
        frame: TimeFrame,
        now: DateTime<Utc>,
    ) -> Result<Vec<Earning>, CoreError> {
        let cutoff = frame.cutoff_from(now)?;
        let visible: Vec<Earning> = all
            .iter()
            .filter(|e| e.date >= cutoff)
            .cloned()
            .collect();

        debug!(
            "visible_series: frame={frame} cutoff={cutoff} kept {}/{} points",
            visible.len(),
            all.len()
        );

        Ok(visible)
    }

    /// Check that a series is ordered by non-decreasing date.
    /// Used by the strict load path; the plain load accepts any input.
    pub fn validate_order(&self, points: &[Earning]) -> Result<(), CoreError> {
        for pair in points.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(CoreError::ValidationError(format!(
                    "series is not date-ordered: {} precedes {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        Ok(())
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
