//! Persisted cart document codec.
//!
//! The document is a JSON array of line objects with fields in the order
//! `name`, `unitPrice`, `quantity`. Prices are written as decimal strings so
//! that a stored cart decodes to exactly the values it was encoded from.
//!
//! Decoding is lenient about *entries* and strict about the *document*:
//! anything that is not a JSON array is malformed, while individual entries
//! that cannot be trusted are dropped during normalization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tandoor_core::DishName;
use thiserror::Error;
use tracing::warn;

use crate::cart::LineItem;

/// The stored bytes are not a cart document.
#[derive(Debug, Error)]
#[error("malformed cart document: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// One entry as written to storage.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredLineRef<'a> {
    name: &'a str,
    unit_price: Decimal,
    quantity: u32,
}

/// One entry as read from storage, before normalization.
///
/// Accepts the `dish`/`price` names written by earlier versions of the site
/// and numeric as well as string prices.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLine {
    #[serde(alias = "dish")]
    name: String,
    #[serde(alias = "price")]
    unit_price: Decimal,
    quantity: i64,
}

/// Encode lines into the persisted document.
///
/// # Errors
///
/// Returns an error only if serialization itself fails, which cannot happen
/// for well-formed lines; the `Result` mirrors `serde_json`.
pub fn encode(lines: &[LineItem]) -> Result<Vec<u8>, serde_json::Error> {
    let stored: Vec<StoredLineRef<'_>> = lines
        .iter()
        .map(|line| StoredLineRef {
            name: line.name(),
            unit_price: line.unit_price(),
            quantity: line.quantity(),
        })
        .collect();
    serde_json::to_vec(&stored)
}

/// Decode and normalize a persisted document.
///
/// Normalization drops entries that are not objects or lack a field, entries
/// with a blank name, a negative price or a quantity below one, and merges
/// repeated names into their first occurrence (quantities summed, first
/// price kept). The result always satisfies the cart invariants.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are not a JSON array.
pub fn decode(bytes: &[u8]) -> Result<Vec<LineItem>, DecodeError> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let total = raw.len();

    let mut lines: Vec<LineItem> = Vec::with_capacity(total);
    for value in raw {
        let Ok(stored) = serde_json::from_value::<StoredLine>(value) else {
            continue;
        };
        let Ok(name) = DishName::parse(&stored.name) else {
            continue;
        };
        if stored.unit_price < Decimal::ZERO {
            continue;
        }
        let Ok(quantity) = u32::try_from(stored.quantity) else {
            continue;
        };
        if quantity == 0 {
            continue;
        }

        match lines.iter_mut().find(|line| line.name() == name.as_str()) {
            Some(existing) => existing.add_quantity(quantity),
            None => lines.push(LineItem::new(name, stored.unit_price.normalize(), quantity)),
        }
    }

    let kept = lines.len();
    if kept < total {
        warn!(
            entries = total,
            lines = kept,
            "Normalized persisted cart (dropped or merged entries)"
        );
    }
    Ok(lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(name: &str, price: Decimal, quantity: u32) -> LineItem {
        LineItem::new(DishName::parse(name).unwrap(), price, quantity)
    }

    #[test]
    fn test_encode_field_order_and_string_prices() {
        let lines = vec![line("Naan", Decimal::from(40), 2)];
        let json = String::from_utf8(encode(&lines).unwrap()).unwrap();
        assert_eq!(json, r#"[{"name":"Naan","unitPrice":"40","quantity":2}]"#);
    }

    #[test]
    fn test_roundtrip_preserves_order_and_values() {
        let lines = vec![
            line("Paneer Tikka", Decimal::from(250), 2),
            line("Masala Chai", Decimal::new(4550, 2).normalize(), 1),
            line("Naan", Decimal::from(40), 7),
        ];
        let decoded = decode(&encode(&lines).unwrap()).unwrap();
        assert_eq!(decoded, lines);
    }

    #[test]
    fn test_roundtrip_empty() {
        let decoded = decode(&encode(&[]).unwrap()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_non_array_is_malformed() {
        assert!(decode(b"{\"name\":\"Naan\"}").is_err());
        assert!(decode(b"not json").is_err());
        assert!(decode(b"").is_err());
        assert!(decode(b"null").is_err());
    }

    #[test]
    fn test_accepts_legacy_field_names_and_numbers() {
        let doc = br#"[{"dish":"Dal","price":150,"quantity":3}]"#;
        let decoded = decode(doc).unwrap();
        assert_eq!(decoded, vec![line("Dal", Decimal::from(150), 3)]);
    }

    #[test]
    fn test_drops_untrustworthy_entries() {
        let doc = br#"[
            {"name":"","unitPrice":"10","quantity":1},
            {"name":"Lassi","unitPrice":"-5","quantity":1},
            {"name":"Kulfi","unitPrice":"60","quantity":0},
            {"name":"Raita","unitPrice":"30","quantity":-2},
            {"name":"Pickle","unitPrice":"10"},
            42,
            {"name":"Naan","unitPrice":"40","quantity":1}
        ]"#;
        let decoded = decode(doc).unwrap();
        assert_eq!(decoded, vec![line("Naan", Decimal::from(40), 1)]);
    }

    #[test]
    fn test_merges_duplicate_names_keeping_first_price() {
        let doc = br#"[
            {"name":"Naan","unitPrice":"40","quantity":1},
            {"name":"Dal","unitPrice":"150","quantity":1},
            {"name":"Naan","unitPrice":"45","quantity":2}
        ]"#;
        let decoded = decode(doc).unwrap();
        assert_eq!(
            decoded,
            vec![
                line("Naan", Decimal::from(40), 3),
                line("Dal", Decimal::from(150), 1),
            ]
        );
    }
}
