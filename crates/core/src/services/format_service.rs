use chrono::{DateTime, Utc};

/// Turns raw stats into the strings the frontend shows. Pure projection,
/// no state and no branching beyond sign handling.
pub struct FormatService;

impl FormatService {
    pub fn new() -> Self {
        Self
    }

    /// Currency-style amount: `$1,234.56`, minus sign ahead of the symbol.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = format!("{:.2}", amount.abs());
        let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
        format!("{sign}${}.{frac}", group_thousands(whole))
    }

    /// Percentage fixed to two decimals: `12.34%`.
    #[must_use]
    pub fn format_percentage(&self, value: f64) -> String {
        format!("{value:.2}%")
    }

    /// Percentage wrapped in parentheses: `(12.34%)`.
    #[must_use]
    pub fn format_percentage_with_brackets(&self, value: f64) -> String {
        format!("({value:.2}%)")
    }

    /// Day month year, e.g. `5 Jan 2026`.
    #[must_use]
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        date.format("%-d %b %Y").to_string()
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
