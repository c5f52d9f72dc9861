//! Conversions between [`HostValue`] and the native types the `numeric`
//! routines take and return.
//!
//! Extraction checks only the shape each native actually reads. Array
//! lengths and numeric ranges are never validated.

use crate::error::BridgeError;
use crate::value::HostValue;
use numeric::Summary;

/// Positional argument `index` of `function`, or `MissingArgument`.
pub fn arg<'a>(
    function: &str,
    args: &'a [HostValue],
    index: usize,
) -> Result<&'a HostValue, BridgeError> {
    args.get(index).ok_or_else(|| BridgeError::MissingArgument {
        function: function.to_string(),
        index,
    })
}

/// A host number truncated toward zero.
///
/// Out-of-range values saturate at the `i64` bounds and NaN becomes 0,
/// which is what `f64 as i64` does.
pub fn to_int(value: &HostValue) -> Result<i64, BridgeError> {
    value
        .as_f64()
        .map(|n| n as i64)
        .ok_or_else(|| BridgeError::TypeMismatch {
            expected: "number",
            got: value.kind().to_string(),
        })
}

/// A host array whose elements are all numbers.
pub fn to_numbers(value: &HostValue) -> Result<Vec<f64>, BridgeError> {
    let items = value.as_array().ok_or_else(|| BridgeError::TypeMismatch {
        expected: "array",
        got: value.kind().to_string(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or_else(|| BridgeError::ElementMismatch {
                index,
                expected: "number",
                got: item.kind().to_string(),
            })
        })
        .collect()
}

pub fn int_arg(function: &str, args: &[HostValue], index: usize) -> Result<i64, BridgeError> {
    to_int(arg(function, args, index)?)
}

pub fn numbers_arg(
    function: &str,
    args: &[HostValue],
    index: usize,
) -> Result<Vec<f64>, BridgeError> {
    to_numbers(arg(function, args, index)?)
}

// --- Results ---

/// An integer as the host's numeric type. Precision is lost above 2^53.
pub fn from_int(n: i64) -> HostValue {
    HostValue::Number(n as f64)
}

/// An integer as decimal digits, exact over the whole `i64` range.
pub fn from_int_text(n: i64) -> HostValue {
    HostValue::Text(n.to_string())
}

pub fn from_ints(values: &[i64]) -> HostValue {
    HostValue::Array(values.iter().map(|&n| from_int(n)).collect())
}

/// `{ mean, stdDev, count }`. `stdDev` carries the population variance.
pub fn from_summary(summary: &Summary) -> HostValue {
    HostValue::object([
        ("mean", HostValue::Number(summary.mean)),
        ("stdDev", HostValue::Number(summary.variance)),
        ("count", HostValue::Number(summary.count as f64)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int_truncates() {
        assert_eq!(to_int(&HostValue::Number(7.9)), Ok(7));
        assert_eq!(to_int(&HostValue::Number(-7.9)), Ok(-7));
    }

    #[test]
    fn test_to_int_saturates_and_zeroes_nan() {
        assert_eq!(to_int(&HostValue::Number(1e300)), Ok(i64::MAX));
        assert_eq!(to_int(&HostValue::Number(f64::NEG_INFINITY)), Ok(i64::MIN));
        assert_eq!(to_int(&HostValue::Number(f64::NAN)), Ok(0));
    }

    #[test]
    fn test_to_int_rejects_text() {
        let err = to_int(&HostValue::text("10")).unwrap_err();
        assert_eq!(
            err,
            BridgeError::TypeMismatch {
                expected: "number",
                got: "string".into()
            }
        );
    }

    #[test]
    fn test_to_numbers_reports_element_index() {
        let value = HostValue::Array(vec![HostValue::Number(1.0), HostValue::Bool(true)]);
        match to_numbers(&value) {
            Err(BridgeError::ElementMismatch { index, got, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(got, "boolean");
            }
            other => panic!("expected element mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_to_numbers_rejects_scalar() {
        assert!(matches!(
            to_numbers(&HostValue::Number(3.0)),
            Err(BridgeError::TypeMismatch { expected: "array", .. })
        ));
    }

    #[test]
    fn test_arg_missing() {
        let err = arg("goFibonacci", &[], 0).unwrap_err();
        assert_eq!(err.to_string(), "fibonacci() is missing argument 0");
    }

    #[test]
    fn test_from_int_text_is_exact() {
        assert_eq!(from_int_text(i64::MAX), HostValue::text("9223372036854775807"));
    }

    #[test]
    fn test_from_summary_field_names() {
        let summary = Summary {
            mean: 5.0,
            variance: 4.0,
            count: 8,
        };
        let obj = from_summary(&summary);
        assert_eq!(obj.get("mean"), Some(&HostValue::Number(5.0)));
        assert_eq!(obj.get("stdDev"), Some(&HostValue::Number(4.0)));
        assert_eq!(obj.get("count"), Some(&HostValue::Number(8.0)));
    }
}
