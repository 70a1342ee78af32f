//! Numeric rendering shared by the AST printer and the token dump.
//!
//! Both tools render real literals the way C's `%g` conversion does with its default precision of six significant
//! digits. Golden files depend on this exact text, so the rule lives in one place.

/// Default number of significant digits used by [`format_general`].
pub const GENERAL_PRECISION: usize = 6;

/// Render `value` in C `%g` style with six significant digits.
///
/// ## Examples
/// ```rust
/// use dlang_core::numeric::format_general;
///
/// assert_eq!(format_general(1.5), "1.5");
/// assert_eq!(format_general(3.14159265), "3.14159");
/// assert_eq!(format_general(1e20), "1e+20");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
pub fn format_general(value: f64) -> String {
    format_general_with_precision(value, GENERAL_PRECISION)
}

/// Render `value` in C `%g` style with `precision` significant digits.
///
/// ## Notes
/// - A precision of `0` is treated as `1`, as in C.
/// - Scientific notation is chosen when the decimal exponent is below `-4` or at least `precision`; the exponent
///   always carries a sign and at least two digits.
/// - Trailing zeros (and a dangling decimal point) are removed in both notations.
pub fn format_general_with_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to the requested significant digits first; the exponent of the rounded value decides the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
