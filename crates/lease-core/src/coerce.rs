//! Loose value conversions
//!
//! Browser clients send whatever their form widgets hold: numbers as strings,
//! strings as numbers, sometimes arrays. These helpers convert a JSON value
//! the same way a browser runtime would when it stringifies, numifies or
//! tests a value for truthiness, so that the normalized record matches what
//! existing clients already expect.

use serde_json::Value;

/// Whether a value counts as "set" under loose truthiness rules
///
/// `null`, `false`, `0` and the empty string are falsy; every array and
/// object is truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convert a value to its display string
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => number_to_string(f),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Convert a value to a number, yielding NaN when it has no numeric reading
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) => string_to_number(&to_display_string(value)),
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a numeric string literal
///
/// Accepts surrounding whitespace, signed decimals with optional exponent,
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. The empty string is 0.
pub fn string_to_number(input: &str) -> f64 {
    let s = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // Rust's float parser also accepts "inf" and "nan", which are not numbers here
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars || !s.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

/// Format a number in shortest round-trip form
///
/// Integral values print without a fraction; magnitudes at or above 1e21 or
/// below 1e-6 switch to exponent notation (`1e+21`, `1.5e-7`).
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", n);
    }

    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}
