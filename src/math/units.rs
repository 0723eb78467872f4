//! Fahrenheit/Celsius conversion.
//!
//! Any finite or infinite input is accepted; plausibility checks belong to
//! [`crate::math::degree_days_checked`].

/// `(t - 32) × 5/9`
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// `t × 9/5 + 32`
pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert!((fahrenheit_to_celsius(32.0)).abs() < 1e-12);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 1e-12);
        assert!((celsius_to_fahrenheit(-40.0) - -40.0).abs() < 1e-12);
        assert!((celsius_to_fahrenheit(37.0) - 98.6).abs() < 1e-9);
    }

    #[test]
    fn conversions_invert_each_other() {
        for &x in &[-459.67, -100.0, -40.0, 0.0, 18.3, 65.0, 150.0, 1.0e6] {
            let back = celsius_to_fahrenheit(fahrenheit_to_celsius(x));
            assert!((back - x).abs() < 1e-9 * x.abs().max(1.0), "round-trip of {x} gave {back}");
        }
    }
}
