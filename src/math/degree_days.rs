//! Heating/cooling degree-day formula.
//!
//! ```text
//! mean = (high + low) / 2
//! hdd  = max(0, base - mean)
//! cdd  = max(0, mean - base)
//! ```
//!
//! All computation happens in °F. The checked variant takes an explicit unit
//! flag so Celsius callers have to say so.

use crate::domain::TempUnit;
use crate::error::DegreeDayError;
use crate::math::celsius_to_fahrenheit;

/// Plausible range (°F) for a daily high or low.
pub const PLAUSIBLE_MIN_F: f64 = -100.0;
pub const PLAUSIBLE_MAX_F: f64 = 150.0;

pub fn mean_temperature(high: f64, low: f64) -> f64 {
    (high + low) / 2.0
}

/// Returns `(hdd, cdd)`; at most one of them is positive.
pub fn degree_days(high: f64, low: f64, base_temp: f64) -> (f64, f64) {
    let mean = mean_temperature(high, low);
    let hdd = (base_temp - mean).max(0.0);
    let cdd = (mean - base_temp).max(0.0);
    (hdd, cdd)
}

/// Unit-aware variant with a sanity check.
///
/// With [`TempUnit::Celsius`], `high`, `low` and `base_temp` are converted to
/// °F first. The (converted) high and low must then fall within
/// [`PLAUSIBLE_MIN_F`, `PLAUSIBLE_MAX_F`], otherwise the input most likely
/// carries the wrong unit or a sentinel value.
pub fn degree_days_checked(
    high: f64,
    low: f64,
    base_temp: f64,
    unit: TempUnit,
) -> Result<(f64, f64), DegreeDayError> {
    let (high, low, base_temp) = match unit {
        TempUnit::Fahrenheit => (high, low, base_temp),
        TempUnit::Celsius => (
            celsius_to_fahrenheit(high),
            celsius_to_fahrenheit(low),
            celsius_to_fahrenheit(base_temp),
        ),
    };

    check_plausible(high, low)?;
    Ok(degree_days(high, low, base_temp))
}

/// Reject a °F high/low pair outside [`PLAUSIBLE_MIN_F`, `PLAUSIBLE_MAX_F`].
pub fn check_plausible(high: f64, low: f64) -> Result<(), DegreeDayError> {
    let plausible = |t: f64| (PLAUSIBLE_MIN_F..=PLAUSIBLE_MAX_F).contains(&t);
    if plausible(high) && plausible(low) {
        Ok(())
    } else {
        Err(DegreeDayError::SuspiciousTemperature { high, low })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn heating_day() {
        let (hdd, cdd) = degree_days(70.0, 50.0, 65.0);
        assert!(close(hdd, 5.0));
        assert_eq!(cdd, 0.0);
    }

    #[test]
    fn cooling_day() {
        let (hdd, cdd) = degree_days(80.0, 60.0, 65.0);
        assert_eq!(hdd, 0.0);
        assert!(close(cdd, 5.0));
    }

    #[test]
    fn base_point_is_zero_both_ways() {
        assert_eq!(degree_days(65.0, 65.0, 65.0), (0.0, 0.0));
    }

    #[test]
    fn never_both_positive() {
        for high in (-20..=110).step_by(7) {
            for spread in [0, 3, 12, 30] {
                let high = high as f64;
                let low = high - spread as f64;
                let (hdd, cdd) = degree_days(high, low, 65.0);
                assert!(hdd >= 0.0 && cdd >= 0.0);
                assert!(!(hdd > 0.0 && cdd > 0.0), "high={high} low={low}");
            }
        }
    }

    #[test]
    fn celsius_inputs_are_converted() {
        // 25C/15C -> 77F/59F, mean 68F; base 18.3C -> 64.94F.
        let (hdd, cdd) = degree_days_checked(25.0, 15.0, 18.3, TempUnit::Celsius).unwrap();
        assert_eq!(hdd, 0.0);
        assert!(close(cdd, 68.0 - 64.94));
    }

    #[test]
    fn fahrenheit_passes_through() {
        let checked = degree_days_checked(70.0, 50.0, 65.0, TempUnit::Fahrenheit).unwrap();
        assert_eq!(checked, degree_days(70.0, 50.0, 65.0));
    }

    #[test]
    fn rejects_implausible_values() {
        // A Kelvin reading mislabelled as Celsius.
        let err = degree_days_checked(300.0, 280.0, 18.3, TempUnit::Celsius).unwrap_err();
        assert!(matches!(err, DegreeDayError::SuspiciousTemperature { .. }));

        let err = degree_days_checked(70.0, -9999.0, 65.0, TempUnit::Fahrenheit).unwrap_err();
        assert!(matches!(err, DegreeDayError::SuspiciousTemperature { low, .. } if low == -9999.0));
    }

    #[test]
    fn plausibility_bounds_are_inclusive() {
        assert!(check_plausible(PLAUSIBLE_MAX_F, PLAUSIBLE_MIN_F).is_ok());
        assert!(check_plausible(150.5, 60.0).is_err());
        assert!(check_plausible(f64::NAN, 60.0).is_err());
    }
}
