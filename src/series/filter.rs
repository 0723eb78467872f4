//! Date-window filtering.

use chrono::NaiveDate;

use crate::domain::DegreeDaysResult;

/// Keep results with `start <= date <= end`, preserving order.
///
/// An inverted or empty window simply yields nothing.
pub fn filter_by_period(results: &[DegreeDaysResult], start: NaiveDate, end: NaiveDate) -> Vec<DegreeDaysResult> {
    results
        .iter()
        .filter(|r| (start..=end).contains(&r.date()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_days() -> Vec<DegreeDaysResult> {
        (1..=10)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
                DegreeDaysResult::compute(date, 50.0 + d as f64, 30.0, 65.0)
            })
            .collect()
    }

    #[test]
    fn single_day_window() {
        let day5 = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let out = filter_by_period(&ten_days(), day5, day5);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date(), day5);
    }

    #[test]
    fn bounds_are_inclusive_and_order_kept() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 6).unwrap();
        let out = filter_by_period(&ten_days(), start, end);
        let days: Vec<u32> = out.iter().map(|r| chrono::Datelike::day(&r.date())).collect();
        assert_eq!(days, vec![3, 4, 5, 6]);
    }

    #[test]
    fn window_outside_data_is_empty() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(filter_by_period(&ten_days(), start, end).is_empty());
        assert!(filter_by_period(&ten_days(), end, start).is_empty());
    }
}
