//! Cell values

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// A single table cell
///
/// Cells keep their native type so that [`format_value`](crate::format_value)
/// can pick a representation per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Free text, rendered unchanged
	Text(String),
	/// Signed integer
	Int(i64),
	/// Unsigned integer
	UInt(u64),
	/// Floating point number
	Float(f64),
	/// Boolean flag
	Bool(bool),
	/// Calendar date
	Date(NaiveDate),
	/// Date and time without an offset
	DateTime(NaiveDateTime),
	/// Time of day
	Time(NaiveTime),
	/// Date and time with a fixed UTC offset
	Timestamp(DateTime<FixedOffset>),
	/// Missing value
	Null,
}

impl Value {
	/// Short name of the value's kind, used in log output
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Text(_) => "text",
			Value::Int(_) => "int",
			Value::UInt(_) => "uint",
			Value::Float(_) => "float",
			Value::Bool(_) => "bool",
			Value::Date(_) => "date",
			Value::DateTime(_) => "datetime",
			Value::Time(_) => "time",
			Value::Timestamp(_) => "timestamp",
			Value::Null => "null",
		}
	}

	/// Returns `true` for [`Value::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl fmt::Display for Value {
	/// Plain representation with no number grouping or date truncation
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Text(s) => f.write_str(s),
			Value::Int(v) => write!(f, "{}", v),
			Value::UInt(v) => write!(f, "{}", v),
			Value::Float(v) => write!(f, "{}", v),
			Value::Bool(v) => write!(f, "{}", v),
			Value::Date(v) => f.write_str(&v.to_iso8601()),
			Value::DateTime(v) => f.write_str(&v.to_iso8601()),
			Value::Time(v) => f.write_str(&v.to_iso8601()),
			Value::Timestamp(v) => f.write_str(&v.to_iso8601()),
			Value::Null => Ok(()),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(value.into())
				}
			}
		)*
	};
}

impl_from! {
	String => Text,
	&str => Text,
	i64 => Int,
	i32 => Int,
	u64 => UInt,
	u32 => UInt,
	f64 => Float,
	f32 => Float,
	bool => Bool,
	NaiveDate => Date,
	NaiveDateTime => DateTime,
	NaiveTime => Time,
	DateTime<FixedOffset> => Timestamp,
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

/// ISO-8601 text form of a temporal value
///
/// Fractional seconds are written as six digits and only when non-zero.
/// Offsets are written as `+HH:MM`.
pub trait ToIso8601 {
	/// Renders the value in ISO-8601 form
	fn to_iso8601(&self) -> String;
}

fn time_part<T: Timelike>(time: &T) -> String {
	let micros = time.nanosecond() % 1_000_000_000 / 1_000;
	if micros == 0 {
		format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
	} else {
		format!(
			"{:02}:{:02}:{:02}.{:06}",
			time.hour(),
			time.minute(),
			time.second(),
			micros
		)
	}
}

impl ToIso8601 for NaiveDate {
	fn to_iso8601(&self) -> String {
		self.format("%Y-%m-%d").to_string()
	}
}

impl ToIso8601 for NaiveTime {
	fn to_iso8601(&self) -> String {
		time_part(self)
	}
}

impl ToIso8601 for NaiveDateTime {
	fn to_iso8601(&self) -> String {
		format!("{}T{}", self.date().to_iso8601(), time_part(self))
	}
}

impl ToIso8601 for DateTime<FixedOffset> {
	fn to_iso8601(&self) -> String {
		format!(
			"{}{}",
			self.naive_local().to_iso8601(),
			self.format("%:z")
		)
	}
}
