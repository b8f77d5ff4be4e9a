//! Unit price of a line item.
//!
//! Prices arrive from JavaScript clients as JSON numbers (or strings holding
//! one) and are stored as doubles. They are not validated: zero and negative
//! prices are kept as given.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient::{MAX_EXACT_INTEGER, parse_number};

/// A unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// The price as a double.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// The price as an integer, when it has no fractional part.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // range checked against MAX_EXACT_INTEGER
    pub fn as_integer(self) -> Option<i64> {
        (self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER)
            .then_some(self.0 as i64)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_integer() {
            Some(whole) => write!(f, "{whole}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Integral prices serialize as integers (`3`, not `3.0`), matching how a
/// JavaScript client renders the number it sent.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string holding one")
    }

    #[allow(clippy::cast_precision_loss)] // same rounding as a JavaScript number
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        Ok(Price(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        Ok(Price(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Price, E> {
        Ok(Price(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Price, E> {
        parse_number(value)
            .map(Price)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}
