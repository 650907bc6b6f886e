//! Lenient decoders for backend numbers.
//!
//! Decimal fields arrive as JSON numbers or as decimal strings (`"125.50"`),
//! depending on the serializer. Both decode to `f64`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn to_f64<E: serde::de::Error>(value: NumberOrString) -> Result<f64, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid decimal `{s}`"))),
    }
}

/// `f64` from a number, a decimal string, or `null` (as zero).
pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => to_f64(value),
        None => Ok(0.0),
    }
}

/// `Option<f64>` from a number, a decimal string, or `null`.
pub fn optional_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(to_f64)
        .transpose()
}
