use serde_json::Value as JsonValue;

/// Check that an item has a non-empty string `name` and a numeric
/// `quantity` strictly greater than zero.
///
/// Any other fields are ignored.
pub fn validate_item(item: &JsonValue) -> bool {
    let name_ok = item
        .get("name")
        .and_then(JsonValue::as_str)
        .is_some_and(|name| !name.is_empty());

    let quantity_ok = item
        .get("quantity")
        .and_then(JsonValue::as_f64)
        .is_some_and(|quantity| quantity > 0.0);

    name_ok && quantity_ok
}

/// Resolve the final path segment of an item URL to a position in a list of
/// length `len`.
///
/// The segment is read like a lenient integer parse: leading whitespace and
/// an optional sign are accepted, then the longest run of decimal digits is
/// taken and anything after it is ignored (`"1abc"` and `"1.5"` are both 1).
///
/// Returns `None` when there are no leading digits, the value is negative, or
/// it is past the end of the list.
pub fn parse_index(path: &str, len: usize) -> Option<usize> {
    let segment = path.rsplit('/').next().unwrap_or(path).trim_start();

    let (negative, unsigned) = match segment.as_bytes().first() {
        Some(b'-') => (true, &segment[1..]),
        Some(b'+') => (false, &segment[1..]),
        _ => (false, segment),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // "-0" is zero, any other negative value is out of range
    if negative && digits.bytes().any(|b| b != b'0') {
        return None;
    }

    // A digit run too long for usize is past the end of any list
    let index = digits.parse::<usize>().ok()?;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_item() {
        assert!(validate_item(&json!({"name": "milk", "quantity": 2})));
        assert!(validate_item(&json!({"name": "flour", "quantity": 0.5})));
    }

    #[test]
    fn test_extra_fields_are_allowed() {
        assert!(validate_item(&json!({
            "name": "eggs",
            "quantity": 12,
            "unit": "pcs",
            "notes": {"organic": true}
        })));
    }

    #[test]
    fn test_rejects_empty_or_missing_name() {
        assert!(!validate_item(&json!({"name": "", "quantity": 5})));
        assert!(!validate_item(&json!({"quantity": 5})));
        assert!(!validate_item(&json!({"name": null, "quantity": 5})));
    }

    #[test]
    fn test_rejects_non_string_name() {
        assert!(!validate_item(&json!({"name": 42, "quantity": 1})));
    }

    #[test]
    fn test_rejects_bad_quantity() {
        assert!(!validate_item(&json!({"name": "milk", "quantity": 0})));
        assert!(!validate_item(&json!({"name": "milk", "quantity": -3})));
        assert!(!validate_item(&json!({"name": "milk", "quantity": "2"})));
        assert!(!validate_item(&json!({"name": "milk"})));
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(!validate_item(&json!(null)));
        assert!(!validate_item(&json!(5)));
        assert!(!validate_item(&json!([{"name": "milk", "quantity": 1}])));
    }

    #[test]
    fn test_parse_index_in_range() {
        assert_eq!(parse_index("0", 1), Some(0));
        assert_eq!(parse_index("2", 3), Some(2));
    }

    #[test]
    fn test_parse_index_uses_last_segment() {
        assert_eq!(parse_index("nested/1", 2), Some(1));
    }

    #[test]
    fn test_parse_index_out_of_range() {
        assert_eq!(parse_index("0", 0), None);
        assert_eq!(parse_index("3", 3), None);
        assert_eq!(parse_index("-1", 3), None);
        assert_eq!(parse_index("-12abc", 20), None);
        assert_eq!(parse_index("99999999999999999999999", 3), None);
    }

    #[test]
    fn test_parse_index_reads_leading_digits() {
        assert_eq!(parse_index("1abc", 3), Some(1));
        assert_eq!(parse_index("1.5", 3), Some(1));
        assert_eq!(parse_index("007", 8), Some(7));
        assert_eq!(parse_index("+2", 3), Some(2));
        assert_eq!(parse_index(" 1", 3), Some(1));
        assert_eq!(parse_index("-0", 3), Some(0));
    }

    #[test]
    fn test_parse_index_not_a_number() {
        assert_eq!(parse_index("abc", 3), None);
        assert_eq!(parse_index("", 3), None);
        assert_eq!(parse_index("-", 3), None);
        assert_eq!(parse_index("+x1", 3), None);
        assert_eq!(parse_index(".5", 3), None);
    }
}
