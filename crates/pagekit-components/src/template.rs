//! Template substitution
//!
//! Every component renders by handing a fixed template and its field values to
//! [`render_template`]. Keeping the substitution in one place means an
//! escaping layer can be introduced here without touching each component.

/// Substitutes `{key}` placeholders in `template` with the matching values
///
/// The template is scanned once from left to right. A brace sequence whose
/// content is not one of the given keys (CSS blocks, script bodies, unknown
/// names) is copied through unchanged, and substituted values are never
/// rescanned, so a value that itself contains `{key}` text is inserted as-is.
///
/// Values are inserted verbatim; no HTML escaping is applied. Callers that
/// render untrusted input should pass it through [`crate::escape`] first.
///
/// # Examples
///
/// ```
/// use pagekit_components::template::render_template;
///
/// let template = r#"<a class="{classes}" href="{url}">{text}</a>"#;
/// let args = [("classes", "btn"), ("url", "/home"), ("text", "Home")];
/// assert_eq!(
///     render_template(template, &args),
///     r#"<a class="btn" href="/home">Home</a>"#
/// );
///
/// // Braces that are not placeholders survive
/// assert_eq!(render_template("a { color: red }", &[]), "a { color: red }");
/// ```
pub fn render_template(template: &str, args: &[(&str, &str)]) -> String {
	let extra: usize = args.iter().map(|(_, value)| value.len()).sum();
	let mut result = String::with_capacity(template.len() + extra);
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		result.push_str(&rest[..open]);
		let after_open = &rest[open + 1..];

		let substituted = after_open.find('}').and_then(|close| {
			let key = &after_open[..close];
			args.iter()
				.find(|(name, _)| *name == key)
				.map(|(_, value)| (*value, close))
		});

		match substituted {
			Some((value, close)) => {
				result.push_str(value);
				rest = &after_open[close + 1..];
			}
			None => {
				result.push('{');
				rest = after_open;
			}
		}
	}
	result.push_str(rest);
	result
}
