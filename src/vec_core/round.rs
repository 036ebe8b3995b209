/// Rounds `value` to `places` decimal digits.
///
/// Works on the exact binary value, ties go to even. So `1.005` (really
/// `1.00499999...`) becomes `1.0` while `2.345` (really `2.34500...03`)
/// becomes `2.35`. Non-finite values are returned untouched.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // float formatting is correctly rounded, scaling by 10^n is not
    let text = format!("{:.*}", places, value);
    text.parse::<f64>().unwrap_or(value)
}
