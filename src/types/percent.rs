use rust_decimal::{Decimal, RoundingStrategy};

const PERCENT_PLACES: u32 = 1;
const RATIO_PLACES: u32 = 2;

/// `part / whole * 100`, rounded half away from zero to one decimal place.
/// A zero `whole` yields zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return fixed(Decimal::ZERO, PERCENT_PLACES);
    }

    fixed(part / whole * Decimal::ONE_HUNDRED, PERCENT_PLACES)
}

/// Relative change from `previous` to `current` in percent.
///
/// From a zero baseline any growth reads as `100` and no growth as `0`.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        let change = if current.is_zero() { Decimal::ZERO } else { Decimal::ONE_HUNDRED };
        return fixed(change, PERCENT_PLACES);
    }

    fixed((current - previous) / previous * Decimal::ONE_HUNDRED, PERCENT_PLACES)
}

/// Ratio of two counts rounded to two decimal places, zero when `denominator` is zero.
pub fn ratio(numerator: usize, denominator: usize) -> Decimal {
    if denominator == 0 {
        return fixed(Decimal::ZERO, RATIO_PLACES);
    }

    fixed(Decimal::from(numerator) / Decimal::from(denominator), RATIO_PLACES)
}

/// Rounds to `places` and pins the scale so serialized figures always carry that many digits.
fn fixed(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}
