//! Permissive numeric fields for request bodies.
//!
//! Form input arrives as numbers or strings. Anything that doesn't parse
//! becomes 0 (required fields) or `None` (optional fields) instead of a 4xx.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn as_f64(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn to_u32(n: f64) -> u32 {
    if n <= 0.0 {
        0
    } else {
        n.trunc().min(u32::MAX as f64) as u32
    }
}

pub fn u32_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(as_f64(&v).map(to_u32).unwrap_or(0))
}

pub fn f64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(as_f64(&v).map(|n| n.max(0.0)).unwrap_or(0.0))
}

pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(as_f64(&v).filter(|n| *n >= 0.0).map(to_u32))
}

pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(as_f64(&v).filter(|n| *n >= 0.0))
}

/// Blank strings read as `None`.
pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<String>::deserialize(d)?;
    Ok(v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "super::u32_or_zero")]
        count: u32,
        #[serde(default, deserialize_with = "super::f64_or_zero")]
        grams: f64,
        #[serde(default, deserialize_with = "super::opt_u32")]
        rate: Option<u32>,
        #[serde(default, deserialize_with = "super::opt_string")]
        note: Option<String>,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).expect("lenient form never rejects")
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let f = parse(r#"{"count":"350","grams":"12.5","rate":" 72 "}"#);
        assert_eq!(f.count, 350);
        assert_eq!(f.grams, 12.5);
        assert_eq!(f.rate, Some(72));
    }

    #[test]
    fn garbage_becomes_zero_or_none() {
        let f = parse(r#"{"count":"lots","grams":true,"rate":"","note":"   "}"#);
        assert_eq!(f.count, 0);
        assert_eq!(f.grams, 0.0);
        assert_eq!(f.rate, None);
        assert_eq!(f.note, None);
    }

    #[test]
    fn missing_fields_default() {
        let f = parse("{}");
        assert_eq!(f.count, 0);
        assert_eq!(f.rate, None);
    }

    #[test]
    fn fractions_truncate_and_negatives_clamp() {
        let f = parse(r#"{"count":99.9,"grams":-3,"rate":-1}"#);
        assert_eq!(f.count, 99);
        assert_eq!(f.grams, 0.0);
        assert_eq!(f.rate, None);
    }

    #[test]
    fn oversized_numbers_saturate() {
        let f = parse(r#"{"count":"1e20","rate":4294967296}"#);
        assert_eq!(f.count, u32::MAX);
        assert_eq!(f.rate, Some(u32::MAX));
        let f = parse(r#"{"count":1e300,"grams":"1e400"}"#);
        assert_eq!(f.count, u32::MAX);
        // "1e400" parses to infinity, which is not a usable number
        assert_eq!(f.grams, 0.0);
    }
}
