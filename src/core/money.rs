use rust_decimal::Decimal;

/// Decimal places kept for percentages and per-capacity ratios.
/// Money amounts themselves are never rounded.
pub const RATIO_SCALE: u32 = 2;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `numerator / denominator`, or zero when the denominator is zero.
/// A quotient too large for `Decimal` saturates at the bound of its sign.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Rounded ratio, zero when the denominator is zero
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    safe_div(numerator, denominator).round_dp(RATIO_SCALE)
}

/// `numerator` as a rounded percentage of `denominator` (0 if denominator is 0)
pub fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    safe_div(numerator, denominator)
        .saturating_mul(HUNDRED)
        .round_dp(RATIO_SCALE)
}

/// Apply a whole-number percentage (e.g. 20 for 20%) to an amount.
///
/// Multiplies first for exactness; when the intermediate product does not
/// fit, divides first instead, saturating at the `Decimal` bounds.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    match amount.checked_mul(percent) {
        Some(product) => product / HUNDRED,
        None => (amount / HUNDRED).saturating_mul(percent),
    }
}

/// Saturating sum of amounts
pub fn total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Integer counts promoted for ratio arithmetic
pub fn count(value: i64) -> Decimal {
    Decimal::from(value)
}
