/// Check whether an amount is positive and within bounds
///
/// An amount is valid when it is finite (not NaN, not infinite), strictly
/// greater than zero, and at most `max_amount`. A `max_amount` of `None`
/// means unbounded above.
pub fn is_valid_amount(amount: f64, max_amount: Option<f64>) -> bool {
    let max = max_amount.unwrap_or(f64::INFINITY);
    amount.is_finite() && amount > 0.0 && amount <= max
}
