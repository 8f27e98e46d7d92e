//! Field decoders for hand-edited data.
//!
//! Reference catalogs and item entries are written by people, so a field of
//! the wrong shape degrades to a default instead of rejecting its record.

use serde::de::{Deserialize, Deserializer, Error, IgnoredAny};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Decodes `T`, falling back to `T::default()` when the value has another shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => value,
        Lenient::Other(_) => T::default(),
    })
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Finite value of a number or a numeric string.
    pub(crate) fn as_number(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Decodes a number, accepting numeric strings such as `"5"`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?
        .as_number()
        .ok_or_else(|| D::Error::custom("expected a finite number"))
}
