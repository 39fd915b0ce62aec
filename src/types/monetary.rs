use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: usize = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES as u32);

/// A monetary amount stored as a whole number of cents.
///
/// Every value is an exact multiple of `0.01`, so sums and averages built from
/// `Monetary` values stay reproducible to the cent.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(i64);

impl Monetary {
    pub fn new() -> Self {
        Monetary(0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Rounds a decimal amount half away from zero to the nearest cent.
    pub fn from_decimal(value: Decimal) -> Result<Self, MonetaryError> {
        let cents = value
            .round_dp_with_strategy(DECIMAL_PLACES as u32, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::from(SCALE))
            .ok_or(MonetaryError::Overflow)?;

        i64::try_from(cents)
            .map(Monetary)
            .map_err(|_| MonetaryError::Overflow)
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES as u32)
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    /// Adds every amount, failing instead of wrapping when the total leaves the `i64` cent range.
    pub fn checked_sum<I>(amounts: I) -> Result<Monetary, MonetaryError>
    where
        I: IntoIterator<Item = Monetary>,
    {
        amounts.into_iter().try_fold(Monetary::new(), |total, amount| {
            total.checked_add(amount).ok_or(MonetaryError::Overflow)
        })
    }

    /// Splits the amount evenly across `parts`, rounded to cents. Zero parts yield zero.
    pub fn average(self, parts: usize) -> Result<Monetary, MonetaryError> {
        if parts == 0 {
            return Ok(Monetary::new());
        }

        Monetary::from_decimal(self.to_decimal() / Decimal::from(parts))
    }
}

#[cfg(test)]
impl Monetary {
    pub fn from_cents(cents: i64) -> Self {
        Monetary(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let integer = abs / SCALE;
        let fraction = abs % SCALE;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (integer_part, fraction_part) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None)
        };

        if fraction_part.is_some_and(|fraction| fraction.contains('.')) {
            return Err(MonetaryError::InvalidFormat("Value has more than one decimal point".to_string()));
        }

        let integer: i64 = integer_part.parse().map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value has an invalid integer part: {:?}", error))
        })?;

        let fraction: i64 = match fraction_part {
            Some(fraction) if !fraction.is_empty() => {
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MonetaryError::InvalidFormat("Value has an invalid fraction part".to_string()));
                }

                if fraction.len() > DECIMAL_PLACES {
                    return Err(MonetaryError::InvalidFormat("Value has too many decimal places".to_string()));
                }

                let padded = format!("{:0<width$}", fraction, width = DECIMAL_PLACES);

                padded.parse()?
            }
            _ => 0
        };

        let sign = if value.starts_with('-') { -1 } else { 1 };
        let result = integer.checked_mul(SCALE)
            .and_then(|v| v.checked_add(sign * fraction))
            .ok_or(MonetaryError::Overflow)?;

        Ok(Monetary(result))
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
