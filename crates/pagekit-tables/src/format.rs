//! Human-readable cell formatting

use crate::value::{ToIso8601, Value};

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Formats a cell for display
///
/// * Integers below 1,000 are written plainly, below 1,000,000 with comma
///   grouping, then as `N.N million` or `N.N billion`.
/// * Floats get two decimals below 10, one below 100, none below 1,000,
///   comma grouping below 1,000,000, then the same million and billion
///   suffixes.
/// * Dates and times use ISO-8601; values falling exactly on midnight are
///   shortened to the date.
/// * Text passes through unchanged.
///
/// Thresholds compare the signed value, so every negative number lands in
/// the first bucket.
///
/// ```
/// use pagekit_tables::{Value, format_value};
///
/// assert_eq!(format_value(&Value::Float(3.14159)), "3.14");
/// assert_eq!(format_value(&Value::Int(12_345)), "12,345");
/// assert_eq!(format_value(&Value::Int(2_500_000)), "2.5 million");
/// ```
pub fn format_value(value: &Value) -> String {
	tracing::trace!(kind = value.kind(), "formatting cell");
	match value {
		Value::Text(s) => s.clone(),
		Value::Int(v) => format_int(i128::from(*v)),
		Value::UInt(v) => format_int(i128::from(*v)),
		Value::Float(v) => format_float(*v),
		Value::Date(v) => shorten_midnight(v.to_iso8601()),
		Value::DateTime(v) => shorten_midnight(v.to_iso8601()),
		Value::Time(v) => shorten_midnight(v.to_iso8601()),
		Value::Timestamp(v) => shorten_midnight(v.to_iso8601()),
		Value::Bool(_) | Value::Null => value.to_string(),
	}
}

fn format_int(v: i128) -> String {
	if v < 1_000 {
		v.to_string()
	} else if v < 1_000_000 {
		group_thousands(&v.to_string())
	} else if v < 1_000_000_000 {
		format!("{:.1} million", v as f64 / MILLION)
	} else {
		format!("{:.1} billion", v as f64 / BILLION)
	}
}

fn format_float(v: f64) -> String {
	if v < 10.0 {
		format!("{:.2}", v)
	} else if v < 100.0 {
		format!("{:.1}", v)
	} else if v < 1_000.0 {
		format!("{:.0}", v)
	} else if v < MILLION {
		group_thousands(&format!("{:.0}", v))
	} else if v < BILLION {
		format!("{:.1} million", v / MILLION)
	} else if v.is_nan() {
		// NaN fails every comparison above
		"nan billion".to_string()
	} else {
		format!("{:.1} billion", v / BILLION)
	}
}

fn shorten_midnight(iso: String) -> String {
	if iso.contains("T00:00:00") {
		iso.chars().take(10).collect()
	} else {
		iso
	}
}

/// Inserts a comma between every group of three digits
///
/// `digits` is an optionally signed run of ASCII digits.
pub(crate) fn group_thousands(digits: &str) -> String {
	let (sign, digits) = match digits.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", digits),
	};
	let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
	out.push_str(sign);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, NaiveDate, NaiveTime};
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::Int(7), "7")]
	#[case(Value::Int(42), "42")]
	#[case(Value::Int(999), "999")]
	#[case(Value::Int(1_000), "1,000")]
	#[case(Value::Int(12_345), "12,345")]
	#[case(Value::Int(999_999), "999,999")]
	#[case(Value::Int(2_500_000), "2.5 million")]
	#[case(Value::Int(3_200_000_000), "3.2 billion")]
	#[case(Value::UInt(45_000), "45,000")]
	#[case(Value::Int(-2000), "-2000")]
	fn test_format_int(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(format_value(&value), expected);
	}

	#[rstest]
	#[case(3.14159, "3.14")]
	#[case(42.5, "42.5")]
	#[case(42.56, "42.6")]
	#[case(123.456, "123")]
	#[case(12_345.6, "12,346")]
	#[case(7_260_000.0, "7.3 million")]
	#[case(4_820_000_000.0, "4.8 billion")]
	#[case(-2000.5, "-2000.50")]
	#[case(f64::NAN, "nan billion")]
	#[case(f64::INFINITY, "inf billion")]
	#[case(f64::NEG_INFINITY, "-inf")]
	fn test_format_float(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_value(&Value::Float(value)), expected);
	}

	#[rstest]
	fn test_format_text_passthrough() {
		assert_eq!(format_value(&Value::from("abc")), "abc");
		assert_eq!(format_value(&Value::from("<b>1,000</b>")), "<b>1,000</b>");
	}

	#[rstest]
	fn test_format_bool_and_null() {
		assert_eq!(format_value(&Value::Bool(true)), "true");
		assert_eq!(format_value(&Value::Null), "");
	}

	#[rstest]
	fn test_format_midnight_shortened() {
		let midnight = NaiveDate::from_ymd_opt(2023, 5, 1)
			.unwrap()
			.and_hms_opt(0, 0, 0)
			.unwrap();
		assert_eq!(format_value(&Value::DateTime(midnight)), "2023-05-01");

		let offset = FixedOffset::west_opt(5 * 3600).unwrap();
		let ts = midnight.and_local_timezone(offset).unwrap();
		assert_eq!(format_value(&Value::Timestamp(ts)), "2023-05-01");
	}

	#[rstest]
	fn test_format_non_midnight_kept() {
		let afternoon = NaiveDate::from_ymd_opt(2023, 5, 1)
			.unwrap()
			.and_hms_opt(13, 45, 0)
			.unwrap();
		assert_eq!(format_value(&Value::DateTime(afternoon)), "2023-05-01T13:45:00");

		let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
		assert_eq!(format_value(&Value::Date(date)), "2024-02-29");

		let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
		assert_eq!(format_value(&Value::Time(time)), "00:00:00");
	}

	#[rstest]
	#[case("0", "0")]
	#[case("123", "123")]
	#[case("1234", "1,234")]
	#[case("123456", "123,456")]
	#[case("1234567", "1,234,567")]
	#[case("-98765", "-98,765")]
	fn test_group_thousands(#[case] digits: &str, #[case] expected: &str) {
		assert_eq!(group_thousands(digits), expected);
	}

	proptest! {
		#[test]
		fn prop_grouping_preserves_digits(n in 0u64..u64::MAX) {
			let grouped = group_thousands(&n.to_string());
			prop_assert_eq!(grouped.replace(',', ""), n.to_string());
			for part in grouped.split(',').skip(1) {
				prop_assert_eq!(part.len(), 3);
			}
		}

		#[test]
		fn prop_small_ints_plain(n in i64::MIN..1_000i64) {
			prop_assert_eq!(format_value(&Value::Int(n)), n.to_string());
		}
	}
}
