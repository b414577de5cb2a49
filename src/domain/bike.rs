// src/domain/bike.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog record as served by `GET /api/bikes/`.
///
/// Only `id` is required. Every other attribute may be missing upstream and is
/// kept as `None`; filters on a missing attribute never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mileage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub year: Option<i32>,

    // Categorical (filterable)
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fuel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: Option<String>,

    // Display only
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub specs: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    /// Raw image reference from the API. After loading this always holds an
    /// absolute URL (see `catalog::images`).
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub booked: bool,
}

impl Bike {
    /// A bike with only an id; handy for building fixtures field by field.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            price: None,
            mileage: None,
            year: None,
            brand: None,
            category: None,
            fuel: None,
            color: None,
            model: None,
            specs: None,
            owner: None,
            location: None,
            image: None,
            booked: false,
        }
    }
}

/// Accepts a JSON number or a numeric string ("45000.00"). Anything else,
/// including `null` and non-numeric strings, becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32))
}

/// Strings pass through; numbers and booleans are stringified (a backend may
/// send a brand as a foreign-key id). `null`, arrays and objects are `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// `true`, a non-zero number, or the strings "true"/"1". Everything else,
/// `null` included, is not booked.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        _ => false,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
