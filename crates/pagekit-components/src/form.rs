//! Form container and its input fields

use crate::component::{Component, Container, Node, impl_container};
use crate::content::{Image, Link};
use crate::template::render_template;

const FORM_TEMPLATE: &str = concat!(
	r#"<form class="max-w-full" style="width: 500px" action="{action}" method="{method}">"#,
	"\n    {children} \n</form>"
);

const FORM_TEXT_TEMPLATE: &str = r#"<div class="mb-6">
    <label for="{name}" class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">{label}</label>
    <input type="text" name="{name}" class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500" placeholder="{placeholder}" required>
</div>"#;

const FORM_EMAIL_TEMPLATE: &str = r#"<div class="mb-6">
    <label for="{name}" class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">{label}</label>
    <input type="email" name="{name}" class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500" placeholder="{placeholder}" required>
</div>"#;

const TEXT_AREA_TEMPLATE: &str = r#"<div class="mb-6">
    <label for="{name}" class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">{label}</label>
    <textarea name="{name}" rows="4" class="block p-2.5 w-full text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500" placeholder="{placeholder}"></textarea>
</div>"#;

const FORM_SUBMIT_TEMPLATE: &str = r#"<button type="submit" class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800">{label}</button>"#;

/// HTML form
///
/// The method attribute is written as given; it defaults to `GET`.
///
/// ```
/// use pagekit_components::{Component, Form};
///
/// let mut form = Form::new("/subscribe").method("POST");
/// form.add_form_email("Email", "email", "you@example.com")
///     .add_form_submit("Subscribe");
///
/// let html = form.render();
/// assert!(html.starts_with(r#"<form class="max-w-full" style="width: 500px" action="/subscribe" method="POST">"#));
/// assert!(html.contains(r#"type="email""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
	action: String,
	method: String,
	children: Vec<Node>,
}

impl Form {
	/// Creates an empty `GET` form posting to `action`
	pub fn new(action: impl Into<String>) -> Self {
		Self {
			action: action.into(),
			method: "GET".to_string(),
			children: Vec::new(),
		}
	}

	/// Sets the form method
	pub fn method(mut self, method: impl Into<String>) -> Self {
		self.method = method.into();
		self
	}

	/// Appends a [`Link`]
	pub fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.add(Link::new(text, url))
	}

	/// Appends an [`Image`]
	pub fn add_image(&mut self, url: impl Into<String>, alt: impl Into<String>) -> &mut Self {
		self.add(Image::new(url, alt))
	}

	/// Appends a text input
	pub fn add_form_text(
		&mut self,
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> &mut Self {
		self.add(FormText::new(label, name, placeholder))
	}

	/// Appends an email input
	///
	/// `FormEmail::default()` passed to [`add`](Container::add) gives the
	/// stock `Your E-mail` field.
	pub fn add_form_email(
		&mut self,
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> &mut Self {
		self.add(FormEmail::new(label, name, placeholder))
	}

	/// Appends a text area
	pub fn add_text_area(
		&mut self,
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> &mut Self {
		self.add(TextArea::new(label, name, placeholder))
	}

	/// Appends a submit button
	pub fn add_form_submit(&mut self, label: impl Into<String>) -> &mut Self {
		self.add(FormSubmit::new().label(label))
	}
}

impl Component for Form {
	fn name(&self) -> &'static str {
		"form"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			FORM_TEMPLATE,
			&[
				("action", self.action.as_str()),
				("method", self.method.as_str()),
				("children", children.as_str()),
			],
		)
	}
}

impl_container!(Form);

/// Labelled single-line text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormText {
	label: String,
	name: String,
	placeholder: String,
}

impl FormText {
	/// Creates a text input
	pub fn new(
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			name: name.into(),
			placeholder: placeholder.into(),
		}
	}
}

impl Component for FormText {
	fn name(&self) -> &'static str {
		"form_text"
	}

	fn render(&self) -> String {
		render_template(
			FORM_TEXT_TEMPLATE,
			&[
				("name", self.name.as_str()),
				("label", self.label.as_str()),
				("placeholder", self.placeholder.as_str()),
			],
		)
	}
}

/// Labelled email input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEmail {
	label: String,
	name: String,
	placeholder: String,
}

impl FormEmail {
	/// Creates an email input
	pub fn new(
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			name: name.into(),
			placeholder: placeholder.into(),
		}
	}
}

impl Default for FormEmail {
	fn default() -> Self {
		Self::new("Your E-mail", "email", "")
	}
}

impl Component for FormEmail {
	fn name(&self) -> &'static str {
		"form_email"
	}

	fn render(&self) -> String {
		render_template(
			FORM_EMAIL_TEMPLATE,
			&[
				("name", self.name.as_str()),
				("label", self.label.as_str()),
				("placeholder", self.placeholder.as_str()),
			],
		)
	}
}

/// Labelled multi-line text area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
	label: String,
	name: String,
	placeholder: String,
}

impl TextArea {
	/// Creates a text area
	pub fn new(
		label: impl Into<String>,
		name: impl Into<String>,
		placeholder: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			name: name.into(),
			placeholder: placeholder.into(),
		}
	}
}

impl Default for TextArea {
	fn default() -> Self {
		Self::new("Your Message", "message", "Leave a comment...")
	}
}

impl Component for TextArea {
	fn name(&self) -> &'static str {
		"text_area"
	}

	fn render(&self) -> String {
		render_template(
			TEXT_AREA_TEMPLATE,
			&[
				("name", self.name.as_str()),
				("label", self.label.as_str()),
				("placeholder", self.placeholder.as_str()),
			],
		)
	}
}

/// Submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmit {
	label: String,
}

impl FormSubmit {
	/// Creates a submit button labelled `Submit`
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the button label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for FormSubmit {
	fn default() -> Self {
		Self {
			label: "Submit".to_string(),
		}
	}
}

impl Component for FormSubmit {
	fn name(&self) -> &'static str {
		"form_submit"
	}

	fn render(&self) -> String {
		render_template(FORM_SUBMIT_TEMPLATE, &[("label", self.label.as_str())])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_form() {
		assert_eq!(
			Form::new("/search").render(),
			"<form class=\"max-w-full\" style=\"width: 500px\" action=\"/search\" method=\"GET\">\n     \n</form>"
		);
	}

	#[rstest]
	fn test_form_children_in_order() {
		let mut form = Form::new("/contact");
		form.add_form_text("Name", "name", "Jane")
			.add(FormEmail::default())
			.add_text_area("Message", "message", "")
			.add_form_submit("Send");

		let names: Vec<_> = form.children().iter().map(Component::name).collect();
		assert_eq!(names, ["form_text", "form_email", "text_area", "form_submit"]);

		let html = form.render();
		let text_pos = html.find("type=\"text\"").unwrap();
		let email_pos = html.find("type=\"email\"").unwrap();
		let area_pos = html.find("<textarea").unwrap();
		let submit_pos = html.find("type=\"submit\"").unwrap();
		assert!(text_pos < email_pos && email_pos < area_pos && area_pos < submit_pos);
	}

	#[rstest]
	fn test_form_text_fields() {
		let html = FormText::new("Your name", "full_name", "Jane Doe").render();
		assert!(html.contains("<label for=\"full_name\""));
		assert!(html.contains(">Your name</label>"));
		assert!(html.contains("name=\"full_name\""));
		assert!(html.contains("placeholder=\"Jane Doe\" required>"));
	}

	#[rstest]
	fn test_form_email_defaults() {
		let html = FormEmail::default().render();
		assert!(html.contains(">Your E-mail</label>"));
		assert!(html.contains("name=\"email\""));
		assert!(html.contains("placeholder=\"\" required>"));
	}

	#[rstest]
	fn test_text_area_defaults() {
		let html = TextArea::default().render();
		assert!(html.contains(">Your Message</label>"));
		assert!(html.contains("<textarea name=\"message\" rows=\"4\""));
		assert!(html.contains("placeholder=\"Leave a comment...\"></textarea>"));
	}

	#[rstest]
	#[case(FormSubmit::new(), "Submit")]
	#[case(FormSubmit::new().label("Send"), "Send")]
	fn test_form_submit_label(#[case] button: FormSubmit, #[case] label: &str) {
		assert!(button.render().ends_with(&format!(">{}</button>", label)));
	}

	#[rstest]
	fn test_form_link_and_image() {
		let mut form = Form::new("/");
		form.add_link("Terms", "/terms").add_image("/logo.png", "Logo");
		assert_eq!(form.children()[0], Node::Link(Link::new("Terms", "/terms")));
		assert_eq!(form.children()[1], Node::Image(Image::new("/logo.png", "Logo")));
	}
}
