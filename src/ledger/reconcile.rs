//! Normalization of historical order lines.
//!
//! Orders saved by older clients carry lines in several shapes: some have a
//! numeric `price`, some only a `total` and a `quantity`, some have numbers
//! stored as strings or missing altogether. [`reconcile`] maps all of them
//! onto the canonical [`OrderLine`] without ever failing; bad fields fall back
//! to safe defaults so an edit session can always open.

use crate::ledger::quantity::coerce_quantity;
use crate::ledger::OrderLines;
use crate::model::OrderLine;
use serde_json::{Map, Value};
use tracing::debug;

/// Reconciles loosely typed order lines into canonical lines.
///
/// Anything other than a JSON array reconciles to an empty collection. The
/// incoming `total` is only used to derive a missing price and is otherwise
/// recomputed as `price * quantity`.
pub fn reconcile(details: &Value) -> OrderLines {
    let Some(entries) = details.as_array() else {
        debug!(kind = kind_of(details), "Order details are not a sequence");
        return OrderLines::default();
    };

    let empty = Map::new();
    entries
        .iter()
        .map(|entry| reconcile_line(entry.as_object().unwrap_or(&empty)))
        .collect()
}

fn reconcile_line(fields: &Map<String, Value>) -> OrderLine {
    let quantity = coerce_quantity(fields.get("quantity"));
    let price = match as_number(fields.get("price")) {
        Some(price) => price,
        None => derive_price(fields.get("total"), quantity),
    };
    OrderLine::new(item_name(fields.get("item")), quantity, price)
}

fn derive_price(total: Option<&Value>, quantity: u32) -> f64 {
    let price = as_number(total).map_or(f64::NAN, |total| total / f64::from(quantity));
    if price.is_finite() {
        price
    } else {
        0.0
    }
}

/// A JSON number, or a string that starts with a finite number.
fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => leading_number(s).filter(|f| f.is_finite()),
        _ => None,
    }
}

/// The longest decimal number at the start of `raw`, ignoring leading
/// whitespace and whatever trails it: `"12abc"` reads as 12, `"1e3 units"`
/// as 1000.
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent..]);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn item_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
