//! Formatted terminal output.
//!
//! We keep formatting code in one place so the computation modules stay clean
//! and output changes are localized.

use crate::domain::{DegreeDayField, DegreeDaysResult, QueryConfig};
use crate::models::LinearModel;
use crate::report::{DegreeDaySummary, FittedDay};

/// Header block describing what was queried.
pub fn format_query_header(query: &QueryConfig) -> String {
    let mut out = String::new();
    out.push_str("=== hdd - Heating/Cooling Degree Days ===\n");
    out.push_str(&format!("Location: ({:.4}, {:.4})\n", query.lat, query.lon));
    out.push_str(&format!("Window: {} .. {}\n", query.start, query.end));
    out.push_str(&format!("Source: {}\n", query.source.display_name()));
    out.push_str(&format!("Base: {:.1}°F\n", query.base_temp));
    out
}

/// Per-day table of temperatures and degree days.
pub fn format_degree_days_table(results: &[DegreeDaysResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
        "date", "high_F", "low_F", "mean_F", "HDD", "CDD"
    ));
    out.push_str(&format!(
        "{:-<10} {:-<8} {:-<8} {:-<8} {:-<8} {:-<8}\n",
        "", "", "", "", "", ""
    ));
    for r in results {
        out.push_str(&format!(
            "{:<10} {:>8.1} {:>8.1} {:>8.1} {:>8.2} {:>8.2}\n",
            r.date().to_string(),
            r.high_temp(),
            r.low_temp(),
            r.mean_temp(),
            r.hdd(),
            r.cdd()
        ));
    }
    out
}

pub fn format_summary(summary: Option<&DegreeDaySummary>) -> String {
    let Some(s) = summary else {
        return "No complete days in the requested window.\n".to_string();
    };
    format!(
        "Days: {} ({} .. {}) | total HDD={:.1} | total CDD={:.1} | mean={:.1}°F\n",
        s.days, s.first, s.last, s.total_hdd, s.total_cdd, s.mean_temp
    )
}

/// Regression summary plus the per-day fit table.
pub fn format_regression(model: &LinearModel, field: DegreeDayField, column: &str, fitted: &[FittedDay]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nRegression: {column} ~ {}\n", field.label()));
    out.push_str(&format!(
        "- slope: {:.4} {column}/{}\n- intercept: {:.4} {column}\n- R²: {:.4} | RMSE: {:.4} | n={}\n\n",
        model.slope,
        field.label(),
        model.intercept,
        model.r_squared,
        model.rmse,
        model.n
    ));

    out.push_str(&format!(
        "{:<10} {:>8} {:>12} {:>12} {:>12}\n",
        "date",
        field.label(),
        truncate(column, 12),
        "fitted",
        "residual"
    ));
    out.push_str(&format!("{:-<10} {:-<8} {:-<12} {:-<12} {:-<12}\n", "", "", "", "", ""));
    for day in fitted {
        out.push_str(&format!(
            "{:<10} {:>8.2} {:>12.2} {:>12.2} {:>12.2}\n",
            day.date.to_string(),
            day.degree_days,
            day.energy,
            day.fitted,
            day.residual
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn table_has_one_line_per_day() {
        let results = vec![
            DegreeDaysResult::compute(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 70.0, 50.0, 65.0),
            DegreeDaysResult::compute(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 80.0, 60.0, 65.0),
        ];
        let table = format_degree_days_table(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("2024-01-01"));
        assert!(lines[2].ends_with("5.00     0.00"));
    }

    #[test]
    fn empty_summary_message() {
        assert!(format_summary(None).starts_with("No complete days"));
    }

    #[test]
    fn truncate_long_column_names() {
        assert_eq!(truncate("kwh", 12), "kwh");
        assert_eq!(truncate("electricity_kwh_total", 8), "electri.");
    }
}
