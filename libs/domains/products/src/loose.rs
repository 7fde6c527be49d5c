//! Lenient readings of loosely-typed JSON request values.
//!
//! Clients send prices as `"19.99"` or `19.99`, stock as `"3 units"` or `3`,
//! and the catalog has always accepted all of them. These helpers define that
//! acceptance in one place:
//!
//! - a value is *truthy* unless it is `null`, `false`, `0`, or `""`
//! - integers are read from the leading digits of a string (`"5abc"` is 5)
//! - decimals are read from the leading decimal literal (`"10.5kg"` is 10.5)

use serde_json::Value;

/// Whether a value counts as "provided".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads an integer from the start of `input`.
///
/// Leading whitespace and a single sign are accepted, then as many decimal
/// digits as follow. Returns `None` when no digit is found. Values beyond the
/// `i64` range saturate.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen_digit = false;
    let mut magnitude: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Reads a decimal number from the start of `input`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction (`"3."`, `".5"` and `"3.5"` all count), an optional exponent, or
/// the literal `Infinity`. Returns `None` when nothing numeric leads the string.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Integer reading of a request value: numbers are truncated, strings go
/// through [`parse_int`], everything else has no integer reading.
pub fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

/// Decimal reading of a request value: numbers as-is, strings through
/// [`parse_float`], everything else has no decimal reading.
pub fn float_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(-2.5), json!("0"), json!(" "), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_parse_int_reads_leading_digits() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  7"), Some(7));
        assert_eq!(parse_int("5abc"), Some(5));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+8"), Some(8));
        assert_eq!(parse_int("12.9"), Some(12));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(" - 3"), None);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_float_reads_leading_literal() {
        assert_eq!(parse_float("10"), Some(10.0));
        assert_eq!(parse_float("10.5kg"), Some(10.5));
        assert_eq!(parse_float(" .5"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("-1.25"), Some(-1.25));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_float_rejects_non_numeric() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("-"), None);
    }

    #[test]
    fn test_value_readings() {
        assert_eq!(int_from_value(&json!(4)), Some(4));
        assert_eq!(int_from_value(&json!(4.8)), Some(4));
        assert_eq!(int_from_value(&json!("9 left")), Some(9));
        assert_eq!(int_from_value(&json!(true)), None);
        assert_eq!(float_from_value(&json!("19.99")), Some(19.99));
        assert_eq!(float_from_value(&json!(5)), Some(5.0));
        assert_eq!(float_from_value(&json!(null)), None);
    }
}
