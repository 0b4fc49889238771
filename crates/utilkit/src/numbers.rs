//! Number helpers.

use serde_json::Value;

use crate::error::{Result, UtilError};

/// Whether the value is a JSON number.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Decimal mark and thousands separator for [`to_currency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub decimal: String,
    pub separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            separator: ",".to_string(),
        }
    }
}

/// Render a number as a currency amount with two fraction digits.
///
/// Numeric strings (`"1234.5"`) are parsed first. Exact half-cent ties round
/// away from zero, so `0.125` renders as `0.13`.
///
/// ```
/// use serde_json::json;
/// use utilkit::{to_currency, CurrencyFormat};
///
/// let text = to_currency(&json!(1234567.891), &CurrencyFormat::default()).unwrap();
/// assert_eq!(text, "1,234,567.89");
/// ```
///
/// # Errors
///
/// Returns [`UtilError::NotANumber`] for anything that is not a finite number
/// or a string holding one.
pub fn to_currency(value: &Value, format: &CurrencyFormat) -> Result<String> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
    .ok_or_else(|| UtilError::NotANumber(value.to_string()))?;

    let sign = if amount < 0.0 { "-" } else { "" };
    let (whole, fraction) = round_cents(amount.abs());

    Ok(format!(
        "{sign}{}{}{fraction}",
        group_thousands(&whole, &format.separator),
        format.decimal
    ))
}

/// Enough fraction digits to print any finite `f64` exactly (1074 at most).
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Whole and two-digit fraction parts of a non-negative amount, rounded to
/// the nearest cent with ties going up.
///
/// The decision is made on the exact binary value: `0.125` is a true tie and
/// becomes `0.13`, while `1.005` is stored as `1.00499...` and stays `1.00`.
fn round_cents(magnitude: f64) -> (String, String) {
    let exact = format!("{magnitude:.EXACT_FRACTION_DIGITS$}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), "00"));
    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let text = |bytes: &[u8]| bytes.iter().map(|&b| char::from(b)).collect::<String>();
    (text(&digits[..split]), text(&digits[split..]))
}

/// Add one to a run of ASCII digits, growing it on carry out.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
