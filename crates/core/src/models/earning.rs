use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single earnings sample: one (date, amount) point on the chart.
///
/// Points are immutable once created — the owning series is replaced
/// wholesale on reload, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earning {
    /// Unique identifier
    pub id: Uuid,

    /// Timestamp of the sample. The stored series is expected to be
    /// non-decreasing by date, but may be sparse.
    pub date: DateTime<Utc>,

    /// Earned amount at this sample. May be negative or zero.
    pub amount: f64,
}

impl Earning {
    pub fn new(date: DateTime<Utc>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
        }
    }

    /// Value equality ignoring the generated id. Useful when comparing
    /// a point against an independently constructed copy.
    #[must_use]
    pub fn same_sample(&self, other: &Earning) -> bool {
        self.date == other.date && self.amount == other.amount
    }
}
