//! Escaping helpers for untrusted values
//!
//! Components insert their field values into markup without escaping, so a
//! value can carry intentional markup (see [`crate::Html`]). Values that come
//! from users should be passed through these helpers before a component is
//! built from them.

use std::borrow::Cow;

/// Escapes text placed between tags (`&`, `<`, `>`)
///
/// # Examples
///
/// ```
/// use pagekit_components::escape::escape_text;
///
/// assert_eq!(escape_text("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
	html_escape::encode_text(text)
}

/// Escapes a value placed inside a double-quoted attribute
///
/// # Examples
///
/// ```
/// use pagekit_components::escape::escape_attribute;
///
/// assert_eq!(
///     escape_attribute(r#"x" onclick="alert(1)"#),
///     "x&quot; onclick=&quot;alert(1)"
/// );
/// ```
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
	html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("<script>alert('x')</script>", "&lt;script&gt;alert('x')&lt;/script&gt;")]
	#[case("Tom & Jerry", "Tom &amp; Jerry")]
	#[case("", "")]
	fn test_escape_text(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_text(input), expected);
	}

	#[rstest]
	fn test_escape_text_borrows_clean_input() {
		assert!(matches!(escape_text("clean"), Cow::Borrowed(_)));
	}

	#[rstest]
	fn test_escape_attribute_quotes() {
		assert_eq!(escape_attribute("a\"b"), "a&quot;b");
		assert_eq!(escape_attribute("a<b"), "a&lt;b");
	}
}
