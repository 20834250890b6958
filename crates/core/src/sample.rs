use chrono::{DateTime, Days, Utc};
use rand::Rng;

use crate::models::earning::Earning;

/// Generate a synthetic daily earnings series ending at `now`.
///
/// Amounts are a random base in 100..1000 plus a sine-modulated wobble,
/// which gives the chart a plausible shape without real data. The output
/// is date-ordered, one point per day.
#[must_use]
pub fn generate_sample_earnings(total_points: u32, now: DateTime<Utc>) -> Vec<Earning> {
    let mut rng = rand::thread_rng();
    let mut earnings = Vec::with_capacity(total_points as usize);

    for index in 0..total_points {
        let days_back = u64::from(total_points - index);
        let date = match now.checked_sub_days(Days::new(days_back)) {
            Some(d) => d,
            None => continue,
        };
        let base: f64 = rng.gen_range(100.0..1000.0);
        let wobble: f64 = rng.gen_range(0.0..100.0);
        let amount = base + wobble * (f64::from(index) * std::f64::consts::PI / 10.0).sin();
        earnings.push(Earning::new(date, amount));
    }

    earnings
}
