//! Content leaves: text, media, callouts and code blocks
//!
//! Leaves hold only scalar fields set at construction and render straight from
//! a fixed template.

use crate::component::Component;
use crate::template::render_template;

const ALERT_TEMPLATE: &str = r#"<div class="text-center py-4 lg:px-4">
<div class="p-2 bg-{color}-800 items-center text-{color}-100 leading-none lg:rounded-full flex lg:inline-flex" role="alert">
    <span class="flex rounded-full bg-{color}-500 uppercase px-2 py-1 text-xs font-bold mr-3">{badge}</span>
    <span class="font-semibold mr-2 text-left flex-auto">{text}</span>            
</div>
</div>"#;

const CODE_TEMPLATE: &str = r#"<div class="mx-auto my-10 max-w-3xl">
    <div class="flex h-11 w-full items-center justify-start space-x-1.5 rounded-t-lg bg-gray-900 px-3">
        <span class="h-3 w-3 rounded-full bg-red-400"></span>
        <span class="h-3 w-3 rounded-full bg-yellow-400"></span>
        <span class="h-3 w-3 rounded-full bg-green-400"></span>
        <code class="pl-5 text-lime-500">{header}</code>
    </div>
    <div class="w-full border-t-0 bg-gray-700 pb-5">
        <code class="text-gray-500">&gt&gt&gt</code>
        <code class="text-white">{value}</code>
    </div>
</div>"#;

const CODE_EDITOR_TEMPLATE: &str = r#"<style type="text/css" media="screen">
#editorContainer {
    width: calc( 100vw - 40px );
    height: 500px;
    max-height: calc( 80vh - 60px );
    position: relative;
    background-color: red;
}
#editor { 
    position: absolute;
    top: 0;
    right: 0;
    bottom: 0;
    left: 0;
}
</style>

<div id="editorContainer">
    <div id="editor">{value}</div> 
</div>
<script src="https://cdn.jsdelivr.net/gh/ajaxorg/ace-builds/src-noconflict/ace.js" type="text/javascript" charset="utf-8"></script>
<script>
    var editor = ace.edit("editor");
    editor.setTheme("ace/theme/monokai");
    editor.session.setMode("ace/mode/{language}");

    const savedCode = localStorage.getItem('code');

    if (savedCode) {
        editor.setValue(savedCode);
    }
</script>"#;

const DIVIDER_TEMPLATE: &str = r#"<hr class="my-5 border-gray-300 w-full">"#;

const HEADER_TEMPLATE: &str = r#"<p class="mb-4 text-4xl font-extrabold leading-none tracking-tight text-gray-900 md:text-5xl lg:text-{size}xl dark:text-white">{text}</p>"#;

const HERO_TEMPLATE: &str = r##"<section class="bg-white">
    <div class="grid max-w-screen-xl px-4 py-8 mx-auto lg:gap-8 xl:gap-0 lg:py-16 lg:grid-cols-12">
        <div class="mr-auto place-self-center lg:col-span-7">
            <h1 class="max-w-2xl mb-4 text-4xl font-extrabold tracking-tight leading-none md:text-5xl xl:text-6xl">{title}</h1>
            <p class="max-w-2xl mb-6 font-light text-gray-500 lg:mb-8 md:text-lg lg:text-xl">{subtitle}</p>
            <a href="#" class="inline-flex items-center justify-center px-5 py-3 mr-3 text-base font-medium text-center text-white rounded-lg bg-{color}-700 hover:bg-{color}-800 focus:ring-4 focus:ring-{color}-300">
                Button 1                        
            </a>
            <a href="#" class="inline-flex items-center justify-center px-5 py-3 text-base font-medium text-center text-gray-900 border border-gray-300 rounded-lg hover:bg-gray-100 focus:ring-4 focus:ring-gray-100">
                Button 2
            </a> 
        </div>
        <div class="hidden lg:mt-0 lg:col-span-5 lg:flex">
            <img src="{image}" >
        </div>                
    </div>
</section>"##;

const IMAGE_TEMPLATE: &str = r#"<img class="max-w-fit h-auto rounded-lg" src="{url}" alt="{alt}">"#;

const LINK_TEMPLATE: &str = r#"<p class="text-gray-500 dark:text-gray-400">
    <a href="{url}" class="inline-flex items-center font-medium text-blue-600 dark:text-blue-500 hover:underline">
    {text}
    <svg aria-hidden="true" class="w-5 h-5 ml-1" fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path fill-rule="evenodd" d="M12.293 5.293a1 1 0 011.414 0l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414-1.414L14.586 11H3a1 1 0 110-2h11.586l-2.293-2.293a1 1 0 010-1.414z" clip-rule="evenodd"></path></svg>
    </a>
</p>"#;

const PLAIN_LINK_TEMPLATE: &str = r#"<a class="{classes}" href="{url}">{text}</a>"#;

const SECTION_TEMPLATE: &str = r#"<span id={id}></span>"#;

const TEXT_TEMPLATE: &str = r#"<p class="mb-6 text-lg font-normal text-gray-500 lg:text-xl sm:px-16 xl:px-48 dark:text-gray-400">{value}</p>"#;

/// Default accent color for alerts and heroes
pub const DEFAULT_COLOR: &str = "indigo";

/// Default heading size (`lg:text-5xl`)
pub const DEFAULT_HEADER_SIZE: u32 = 5;

/// Rounded banner with an optional badge
///
/// ```
/// use pagekit_components::{Alert, Component};
///
/// let html = Alert::new("Saved").badge("OK").color("green").render();
/// assert!(html.contains("bg-green-800"));
/// assert!(html.contains(">OK</span>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	text: String,
	badge: String,
	color: String,
}

impl Alert {
	/// Creates an alert with no badge in the default color
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			badge: String::new(),
			color: DEFAULT_COLOR.to_string(),
		}
	}

	/// Sets the badge label
	pub fn badge(mut self, badge: impl Into<String>) -> Self {
		self.badge = badge.into();
		self
	}

	/// Sets the Tailwind color family (e.g. `red`, `emerald`)
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = color.into();
		self
	}
}

impl Component for Alert {
	fn name(&self) -> &'static str {
		"alert"
	}

	fn render(&self) -> String {
		render_template(
			ALERT_TEMPLATE,
			&[
				("color", self.color.as_str()),
				("badge", self.badge.as_str()),
				("text", self.text.as_str()),
			],
		)
	}
}

/// Terminal-styled code snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
	value: String,
	header: String,
}

impl Code {
	/// Creates a code block without a header
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			header: String::new(),
		}
	}

	/// Sets the header shown in the title bar
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}
}

impl Component for Code {
	fn name(&self) -> &'static str {
		"code"
	}

	fn render(&self) -> String {
		render_template(
			CODE_TEMPLATE,
			&[("header", self.header.as_str()), ("value", self.value.as_str())],
		)
	}
}

/// Embedded Ace editor
///
/// The editor restores previously saved content from `localStorage` under the
/// `code` key when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEditor {
	value: String,
	language: String,
}

impl CodeEditor {
	/// Creates a Python editor holding `value`
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			language: "python".to_string(),
		}
	}

	/// Sets the Ace language mode
	pub fn language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}
}

impl Component for CodeEditor {
	fn name(&self) -> &'static str {
		"code_editor"
	}

	fn render(&self) -> String {
		render_template(
			CODE_EDITOR_TEMPLATE,
			&[("value", self.value.as_str()), ("language", self.language.as_str())],
		)
	}
}

/// Horizontal rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Divider;

impl Divider {
	/// Creates a divider
	pub fn new() -> Self {
		Self
	}
}

impl Component for Divider {
	fn name(&self) -> &'static str {
		"divider"
	}

	fn render(&self) -> String {
		DIVIDER_TEMPLATE.to_string()
	}
}

/// Large heading
///
/// `size` selects the `lg:text-{size}xl` class and is written in plain decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
	text: String,
	size: u32,
}

impl Header {
	/// Creates a heading with the default size
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			size: DEFAULT_HEADER_SIZE,
		}
	}

	/// Sets the heading size
	pub fn size(mut self, size: u32) -> Self {
		self.size = size;
		self
	}
}

impl Component for Header {
	fn name(&self) -> &'static str {
		"header"
	}

	fn render(&self) -> String {
		let size = self.size.to_string();
		render_template(HEADER_TEMPLATE, &[("size", size.as_str()), ("text", self.text.as_str())])
	}
}

/// Landing section with a title, subtitle, two buttons and an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
	title: String,
	subtitle: String,
	image: String,
	color: String,
}

impl Hero {
	/// Creates a hero with only a title
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: String::new(),
			image: String::new(),
			color: DEFAULT_COLOR.to_string(),
		}
	}

	/// Sets the subtitle
	pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = subtitle.into();
		self
	}

	/// Sets the image URL
	pub fn image(mut self, image: impl Into<String>) -> Self {
		self.image = image.into();
		self
	}

	/// Sets the button color family
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = color.into();
		self
	}
}

impl Component for Hero {
	fn name(&self) -> &'static str {
		"hero"
	}

	fn render(&self) -> String {
		render_template(
			HERO_TEMPLATE,
			&[
				("title", self.title.as_str()),
				("subtitle", self.subtitle.as_str()),
				("color", self.color.as_str()),
				("image", self.image.as_str()),
			],
		)
	}
}

/// Pre-rendered markup inserted as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html {
	value: String,
}

impl Html {
	/// Wraps raw markup
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Returns the wrapped markup
	pub fn as_str(&self) -> &str {
		&self.value
	}
}

impl Component for Html {
	fn name(&self) -> &'static str {
		"html"
	}

	fn render(&self) -> String {
		self.value.clone()
	}
}

/// Rounded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
	url: String,
	alt: String,
}

impl Image {
	/// Creates an image
	pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			alt: alt.into(),
		}
	}
}

impl Component for Image {
	fn name(&self) -> &'static str {
		"image"
	}

	fn render(&self) -> String {
		render_template(IMAGE_TEMPLATE, &[("url", self.url.as_str()), ("alt", self.alt.as_str())])
	}
}

/// Paragraph holding a link with a trailing arrow icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
	text: String,
	url: String,
}

impl Link {
	/// Creates a link
	pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			url: url.into(),
		}
	}
}

impl Component for Link {
	fn name(&self) -> &'static str {
		"link"
	}

	fn render(&self) -> String {
		render_template(LINK_TEMPLATE, &[("url", self.url.as_str()), ("text", self.text.as_str())])
	}
}

/// Bare anchor with caller-supplied classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainLink {
	text: String,
	url: String,
	classes: String,
}

impl PlainLink {
	/// Creates an anchor with no classes
	pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			url: url.into(),
			classes: String::new(),
		}
	}

	/// Sets the `class` attribute
	pub fn classes(mut self, classes: impl Into<String>) -> Self {
		self.classes = classes.into();
		self
	}
}

impl Component for PlainLink {
	fn name(&self) -> &'static str {
		"plain_link"
	}

	fn render(&self) -> String {
		render_template(
			PLAIN_LINK_TEMPLATE,
			&[
				("classes", self.classes.as_str()),
				("url", self.url.as_str()),
				("text", self.text.as_str()),
			],
		)
	}
}

/// Invisible anchor marking the start of a page section
///
/// Only `id` is rendered. `name` and `level` describe the section for callers
/// that build a table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	id: String,
	name: String,
	level: u32,
}

impl Section {
	/// Creates a top-level section anchor
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			level: 1,
		}
	}

	/// Sets the outline level
	pub fn level(mut self, level: u32) -> Self {
		self.level = level;
		self
	}

	/// Returns the anchor id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the section title
	pub fn title(&self) -> &str {
		&self.name
	}

	/// Returns the outline level
	pub fn outline_level(&self) -> u32 {
		self.level
	}
}

impl Component for Section {
	fn name(&self) -> &'static str {
		"section"
	}

	fn render(&self) -> String {
		render_template(SECTION_TEMPLATE, &[("id", self.id.as_str())])
	}
}

/// Body paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	value: String,
}

impl Text {
	/// Creates a paragraph
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}
}

impl Component for Text {
	fn name(&self) -> &'static str {
		"text"
	}

	fn render(&self) -> String {
		render_template(TEXT_TEMPLATE, &[("value", self.value.as_str())])
	}
}
