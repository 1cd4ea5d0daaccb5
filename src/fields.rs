use serde_json::{Map, Value};

/// Returns the trimmed string at `key` when it holds non-whitespace text.
pub fn get_string<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match record.get(key) {
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        _ => None,
    }
}

/// Returns the integer at `key`.
///
/// JSON integers are taken as-is and strings made only of ASCII digits are
/// parsed. Booleans and floating point numbers (even whole ones such as
/// `5.0`) are never accepted. Any JSON integer from `i64::MIN` to `u64::MAX`
/// fits, as do digit strings up to 38 digits.
pub fn get_int(record: &Map<String, Value>, key: &str) -> Option<i128> {
    match record.get(key) {
        Some(Value::Bool(_)) => None,
        Some(Value::Number(number)) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from)),
        Some(Value::String(text)) => parse_digits(text.trim()),
        _ => None,
    }
}

fn parse_digits(text: &str) -> Option<i128> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
