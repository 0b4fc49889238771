//! String helpers.

use rand::Rng;
use serde_json::Value;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 11;

/// Whether the value is a JSON string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// A short random token of lowercase base-36 characters.
///
/// Not suitable for secrets.
pub fn random_string() -> String {
    random_string_with(&mut rand::thread_rng())
}

pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// `"foo-bar_baz qux"` → `"fooBarBazQux"`.
///
/// Runs of `-`, `_` and whitespace are removed and the character after each
/// run is upper-cased. Other characters keep their case.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for ch in input.trim().chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Upper-case the first letter of every whitespace-separated word.
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}
