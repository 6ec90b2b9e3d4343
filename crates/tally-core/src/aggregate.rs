//! Recursive aggregation over a decoded JSON document.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};
use serde_json::Value;

use crate::numeric;

/// Sums every numeric quantity reachable in `value` into one unbounded
/// integer.
///
/// Object keys are scanned for embedded numeric tokens exactly like string
/// values; booleans and nulls contribute zero. Fractional numbers are
/// truncated toward zero (3.99 adds 3, -3.99 adds -3), and 64-bit integers
/// are taken exactly. The function is total: nothing in a well-formed value
/// tree can make it fail.
///
/// The walk uses an explicit worklist, so nesting depth is bounded by heap
/// rather than call-stack space.
pub fn aggregate(value: &Value) -> BigInt {
    let mut total = BigInt::zero();
    let mut pending = vec![value];

    while let Some(node) = pending.pop() {
        match node {
            Value::Null | Value::Bool(_) => {}
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    total += i;
                } else if let Some(u) = n.as_u64() {
                    total += u;
                } else if let Some(i) = n.as_f64().and_then(BigInt::from_f64) {
                    total += i;
                }
            }
            Value::String(s) => total += numeric::sum_tokens(s),
            Value::Array(items) => pending.extend(items.iter()),
            Value::Object(map) => {
                for (key, val) in map {
                    total += numeric::sum_tokens(key);
                    pending.push(val);
                }
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use num_bigint::BigInt;
    use serde_json::{json, Value};

    #[test]
    fn sums_number_trees() {
        let cases: Vec<(&str, Value, i64)> = vec![
            ("empty string", json!(""), 0),
            ("integer", json!(123), 123),
            ("float truncates", json!(3.14), 3),
            ("negative float truncates toward zero", json!(-3.99), -3),
            ("string tokens", json!("-1 1 2 3.14 0x4"), 9),
            ("array", json!([1, 2, 3]), 6),
            ("nested array", json!([1, [2, 3]]), 6),
            ("map", json!({"a": 1, "b": 2, "c": 3}), 6),
            ("nested map", json!({"a": 1, "b": {"c": 2, "d": 3}}), 6),
            ("empty array", json!([]), 0),
            ("empty map", json!({}), 0),
            ("bool and null", json!([true, false, null]), 0),
            ("tiny exponents cancel", json!([1E-10, -2E-10]), 0),
            ("string tokens across elements", json!(["1 2", "3.14 0x4"]), 10),
            ("keys are scanned too", json!({"a 1": -1, "b 2": -2}), 0),
            ("no numeric tokens", json!({"a": "b", "c": "d"}), 0),
            ("deep nesting", json!([[[2]]]), 2),
        ];

        for (name, input, expected) in cases {
            assert_eq!(aggregate(&input), BigInt::from(expected), "{name}");
        }
    }

    #[test]
    fn string_tokens_are_arbitrary_precision() {
        // Both out-of-64-bit-range tokens cancel; no wraparound.
        let input = json!(["-9223372036854775808 9223372036854775808 1"]);
        assert_eq!(aggregate(&input), BigInt::from(1));
    }

    #[test]
    fn total_grows_past_64_bits() {
        let token = "9223372036854775808"; // 2^63
        let input = json!([token, token, token, token]);
        let expected = (BigInt::from(u64::MAX / 2) + 1u32) * 4u32;
        assert_eq!(aggregate(&input), expected);
    }

    #[test]
    fn integer_literals_keep_full_precision() {
        // i64::MAX is not representable as f64; the decoded integer must be
        // consumed exactly, not via a float roundtrip.
        let input = json!([i64::MAX, 1]);
        assert_eq!(
            aggregate(&input),
            BigInt::from(i64::MAX) + 1u32,
        );
        let input = json!(u64::MAX);
        assert_eq!(aggregate(&input), BigInt::from(u64::MAX));
    }

    #[test]
    fn order_of_elements_does_not_matter() {
        let forward = json!([1, "2 3", {"k 4": 5}, -6.9]);
        let backward = json!([-6.9, {"k 4": 5}, "2 3", 1]);
        assert_eq!(aggregate(&forward), aggregate(&backward));
        assert_eq!(aggregate(&forward), BigInt::from(9));
    }

    #[test]
    fn top_level_scalars() {
        assert_eq!(aggregate(&json!(true)), BigInt::from(0));
        assert_eq!(aggregate(&json!(null)), BigInt::from(0));
        assert_eq!(aggregate(&json!("0x10")), BigInt::from(16));
    }
}
