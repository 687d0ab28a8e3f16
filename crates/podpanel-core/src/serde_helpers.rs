//! Lenient deserializers for backend payloads
//!
//! The backend is allowed to omit or null out collections, and catalog prices
//! may arrive as either integers or floats.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional amount in minor currency units, rounding floats.
pub fn minor_units<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "minor_units")]
        price: Option<i64>,
    }

    #[test]
    fn test_null_collection_becomes_empty() {
        let p: Probe = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert!(p.items.is_empty());
        assert_eq!(p.price, None);
    }

    #[test]
    fn test_float_price_is_rounded() {
        let p: Probe = serde_json::from_str(r#"{"price": 1249.6}"#).unwrap();
        assert_eq!(p.price, Some(1250));
    }

    #[test]
    fn test_integer_price_kept() {
        let p: Probe = serde_json::from_str(r#"{"price": 2399}"#).unwrap();
        assert_eq!(p.price, Some(2399));
    }
}
