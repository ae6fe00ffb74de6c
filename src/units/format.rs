//! Display rounding for ingredient amounts

/// Round an amount for display
///
/// Rounds to two decimals, half away from zero, then snaps to the nearest
/// whole number when within 0.01 of it. The result is for presentation only.
pub fn format_amount(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.round();

    if (rounded - whole).abs() < 0.01 {
        // Avoid printing "-0"
        if whole == 0.0 {
            return 0.0;
        }
        return whole;
    }

    rounded
}

/// Render an amount and unit as "<amount> <unit>"
///
/// Whole numbers are printed without a decimal point.
pub fn format_quantity(amount: f64, unit: &str) -> String {
    let formatted = format_amount(amount);

    let number = if formatted.fract() == 0.0 && formatted.abs() < i64::MAX as f64 {
        format!("{}", formatted as i64)
    } else {
        format!("{}", formatted)
    };

    if unit.trim().is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}
