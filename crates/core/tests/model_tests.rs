use chrono::{DateTime, TimeZone, Utc};
use earnings_tracker_core::models::earning::Earning;
use earnings_tracker_core::models::stats::{EarningsStats, EarningsSummary};
use earnings_tracker_core::models::timeframe::{CalendarUnit, TimeFrame};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  TimeFrame
// ═══════════════════════════════════════════════════════════════════

mod time_frame {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(TimeFrame::OneDay.label(), "1D");
        assert_eq!(TimeFrame::OneWeek.label(), "1W");
        assert_eq!(TimeFrame::OneMonth.label(), "1M");
        assert_eq!(TimeFrame::ThreeMonths.label(), "3M");
        assert_eq!(TimeFrame::SixMonths.label(), "6M");
        assert_eq!(TimeFrame::OneYear.label(), "1Y");
        assert_eq!(TimeFrame::All.label(), "ALL");
    }

    #[test]
    fn display_matches_label() {
        for frame in TimeFrame::all_frames() {
            assert_eq!(frame.to_string(), frame.label());
        }
    }

    #[test]
    fn magnitudes() {
        assert_eq!(TimeFrame::OneDay.magnitude(), 1);
        assert_eq!(TimeFrame::OneWeek.magnitude(), 7);
        assert_eq!(TimeFrame::OneMonth.magnitude(), 1);
        assert_eq!(TimeFrame::ThreeMonths.magnitude(), 3);
        assert_eq!(TimeFrame::SixMonths.magnitude(), 6);
        assert_eq!(TimeFrame::OneYear.magnitude(), 12);
        assert_eq!(TimeFrame::All.magnitude(), 18);
    }

    #[test]
    fn day_frames_use_day_unit() {
        assert_eq!(TimeFrame::OneDay.unit(), CalendarUnit::Day);
        assert_eq!(TimeFrame::OneWeek.unit(), CalendarUnit::Day);
    }

    #[test]
    fn month_frames_use_month_unit() {
        assert_eq!(TimeFrame::OneMonth.unit(), CalendarUnit::Month);
        assert_eq!(TimeFrame::ThreeMonths.unit(), CalendarUnit::Month);
        assert_eq!(TimeFrame::SixMonths.unit(), CalendarUnit::Month);
        assert_eq!(TimeFrame::OneYear.unit(), CalendarUnit::Month);
        assert_eq!(TimeFrame::All.unit(), CalendarUnit::Month);
    }

    #[test]
    fn default_is_one_month() {
        assert_eq!(TimeFrame::default(), TimeFrame::OneMonth);
    }

    #[test]
    fn all_frames_in_picker_order() {
        let frames = TimeFrame::all_frames();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0], TimeFrame::OneDay);
        assert_eq!(frames[6], TimeFrame::All);
    }

    #[test]
    fn cutoff_one_week() {
        let now = utc(2025, 6, 15);
        let cutoff = TimeFrame::OneWeek.cutoff_from(now).unwrap();
        assert_eq!(cutoff, utc(2025, 6, 8));
    }

    #[test]
    fn cutoff_one_month_same_day() {
        let now = utc(2025, 6, 15);
        let cutoff = TimeFrame::OneMonth.cutoff_from(now).unwrap();
        assert_eq!(cutoff, utc(2025, 5, 15));
    }

    #[test]
    fn cutoff_one_month_clamps_at_month_end() {
        // March 31 minus one calendar month lands on Feb 28, not "31 days back"
        let now = utc(2025, 3, 31);
        let cutoff = TimeFrame::OneMonth.cutoff_from(now).unwrap();
        assert_eq!(cutoff, utc(2025, 2, 28));
    }

    #[test]
    fn cutoff_one_year_crosses_year_boundary() {
        let now = utc(2025, 6, 15);
        let cutoff = TimeFrame::OneYear.cutoff_from(now).unwrap();
        assert_eq!(cutoff, utc(2024, 6, 15));
    }

    #[test]
    fn cutoff_all_is_eighteen_months() {
        let now = utc(2025, 6, 15);
        let cutoff = TimeFrame::All.cutoff_from(now).unwrap();
        assert_eq!(cutoff, utc(2023, 12, 15));
    }

    #[test]
    fn serde_roundtrip_json() {
        for frame in TimeFrame::all_frames() {
            let json = serde_json::to_string(&frame).unwrap();
            let back: TimeFrame = serde_json::from_str(&json).unwrap();
            assert_eq!(frame, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Earning
// ═══════════════════════════════════════════════════════════════════

mod earning {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let date = utc(2025, 1, 15);
        let e = Earning::new(date, 250.5);
        assert_eq!(e.date, date);
        assert_eq!(e.amount, 250.5);
    }

    #[test]
    fn new_assigns_unique_ids() {
        let date = utc(2025, 1, 15);
        let a = Earning::new(date, 100.0);
        let b = Earning::new(date, 100.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn same_sample_ignores_id() {
        let date = utc(2025, 1, 15);
        let a = Earning::new(date, 100.0);
        let b = Earning::new(date, 100.0);
        assert!(a.same_sample(&b));
    }

    #[test]
    fn same_sample_detects_amount_difference() {
        let date = utc(2025, 1, 15);
        let a = Earning::new(date, 100.0);
        let b = Earning::new(date, 101.0);
        assert!(!a.same_sample(&b));
    }

    #[test]
    fn negative_and_zero_amounts_are_valid() {
        let e = Earning::new(utc(2025, 1, 15), -42.0);
        assert_eq!(e.amount, -42.0);
        let z = Earning::new(utc(2025, 1, 16), 0.0);
        assert_eq!(z.amount, 0.0);
    }

    #[test]
    fn serde_roundtrip_json() {
        let e = Earning::new(utc(2025, 1, 15), 314.15);
        let json = serde_json::to_string(&e).unwrap();
        let back: Earning = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  EarningsStats / EarningsSummary
// ═══════════════════════════════════════════════════════════════════

mod stats {
    use super::*;

    #[test]
    fn baseline_carries_balance_only() {
        let s = EarningsStats::baseline(Some(1234.0));
        assert_eq!(s.balance, Some(1234.0));
        assert_eq!(s.delta_amount, None);
        assert_eq!(s.delta_percent, None);
        assert_eq!(s.date, None);
    }

    #[test]
    fn baseline_without_balance_is_all_none() {
        let s = EarningsStats::baseline(None);
        assert_eq!(s.balance, None);
        assert_eq!(s.delta_amount, None);
    }

    #[test]
    fn empty_summary_is_all_none() {
        let s = EarningsSummary::empty();
        assert_eq!(s.total_earnings, None);
        assert_eq!(s.total_earnings_percent, None);
        assert_eq!(s.last_month_earnings, None);
        assert_eq!(s.last_month_earnings_percent, None);
    }

    #[test]
    fn stats_serde_roundtrip() {
        let s = EarningsStats {
            balance: Some(200.0),
            delta_amount: Some(100.0),
            delta_percent: Some(50.0),
            date: Some(utc(2025, 1, 15)),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: EarningsStats = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
