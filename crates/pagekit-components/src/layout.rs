//! Page and card containers
//!
//! [`Page`] is the usual root of a component tree; [`Card`] groups content
//! inside it. Both share the [`ContentContainer`] builder surface.

use crate::component::{Component, Container, Node, impl_container};
use crate::content::{
	Alert, Code, CodeEditor, Divider, Header, Hero, Html, Image, Link, PlainLink, Section, Text,
};
use crate::embed::github_embed;
use crate::form::Form;
use crate::navigation::{Footer, Navbar, Sidebar};
use crate::template::render_template;
use pagekit_conf::SiteSettings;

const PAGE_TEMPLATE: &str =
	"<div class=\"container px-5 py-24 mx-auto max-w-fit\">\n    {children} \n</div>";

const CARD_TEMPLATE: &str = concat!(
	r#"<div class="block max-w-sm p-6 bg-white border border-gray-200 rounded-lg shadow-md hover:bg-gray-100 dark:bg-gray-800 dark:border-gray-700 dark:hover:bg-gray-700 {classes}">"#,
	"\n    {children} \n</div>"
);

/// Builder surface shared by containers that hold general page content
///
/// Each method appends one node built from its arguments and returns the same
/// container. Container kinds are passed fully built.
pub trait ContentContainer: Container + Sized {
	/// Appends raw markup
	fn add_html(&mut self, value: impl Into<String>) -> &mut Self {
		self.add(Html::new(value))
	}

	/// Appends a paragraph
	fn add_text(&mut self, value: impl Into<String>) -> &mut Self {
		self.add(Text::new(value))
	}

	/// Appends a [`Link`]
	fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.add(Link::new(text, url))
	}

	/// Appends a [`PlainLink`]
	fn add_plain_link(
		&mut self,
		text: impl Into<String>,
		url: impl Into<String>,
		classes: impl Into<String>,
	) -> &mut Self {
		self.add(PlainLink::new(text, url).classes(classes))
	}

	/// Appends an [`Image`]
	fn add_image(&mut self, url: impl Into<String>, alt: impl Into<String>) -> &mut Self {
		self.add(Image::new(url, alt))
	}

	/// Appends a [`Header`] of the given size
	fn add_header(&mut self, text: impl Into<String>, size: u32) -> &mut Self {
		self.add(Header::new(text).size(size))
	}

	/// Appends a nested [`Card`]
	fn add_card(&mut self, card: Card) -> &mut Self {
		self.add(card)
	}

	/// Appends an [`Alert`]
	fn add_alert(
		&mut self,
		text: impl Into<String>,
		badge: impl Into<String>,
		color: impl Into<String>,
	) -> &mut Self {
		self.add(Alert::new(text).badge(badge).color(color))
	}

	/// Appends a [`Hero`]
	fn add_hero(
		&mut self,
		title: impl Into<String>,
		subtitle: impl Into<String>,
		image: impl Into<String>,
		color: impl Into<String>,
	) -> &mut Self {
		self.add(
			Hero::new(title)
				.subtitle(subtitle)
				.image(image)
				.color(color),
		)
	}

	/// Appends a [`Divider`]
	fn add_divider(&mut self) -> &mut Self {
		self.add(Divider::new())
	}

	/// Appends a [`Form`]
	fn add_form(&mut self, form: Form) -> &mut Self {
		self.add(form)
	}

	/// Appends an embedded view of a file hosted on GitHub
	fn add_github_embed(&mut self, url: &str) -> &mut Self {
		self.add(github_embed(url))
	}
}

/// Root container of a page
///
/// `render` produces the page body only. [`render_layout`](Page::render_layout)
/// additionally wraps it in the site navbar and footer when `auto_navbar` and
/// `auto_footer` are set (both default to `true`).
///
/// ```
/// use pagekit_components::{Component, ContentContainer, Page};
///
/// let mut page = Page::new("Home");
/// page.add_header("Welcome", 3).add_text("Hello there");
///
/// let html = page.render();
/// assert!(html.starts_with("<div class=\"container px-5 py-24 mx-auto max-w-fit\">"));
/// assert!(html.contains("Welcome</p>\n<p class=\"mb-6"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
	title: String,
	auto_navbar: bool,
	auto_footer: bool,
	children: Vec<Node>,
}

impl Page {
	/// Creates an empty page
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			auto_navbar: true,
			auto_footer: true,
			children: Vec::new(),
		}
	}

	/// Returns the page title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Sets whether [`render_layout`](Page::render_layout) adds the site navbar
	pub fn auto_navbar(mut self, enabled: bool) -> Self {
		self.auto_navbar = enabled;
		self
	}

	/// Sets whether [`render_layout`](Page::render_layout) adds the site footer
	pub fn auto_footer(mut self, enabled: bool) -> Self {
		self.auto_footer = enabled;
		self
	}

	/// Appends a [`Code`] block
	pub fn add_code(&mut self, value: impl Into<String>, header: impl Into<String>) -> &mut Self {
		self.add(Code::new(value).header(header))
	}

	/// Appends a [`Section`] anchor
	pub fn add_section(
		&mut self,
		id: impl Into<String>,
		name: impl Into<String>,
		level: u32,
	) -> &mut Self {
		self.add(Section::new(id, name).level(level))
	}

	/// Appends a [`Navbar`]
	pub fn add_navbar(&mut self, navbar: Navbar) -> &mut Self {
		self.add(navbar)
	}

	/// Appends a [`Footer`]
	pub fn add_footer(&mut self, footer: Footer) -> &mut Self {
		self.add(footer)
	}

	/// Appends a [`Sidebar`]
	pub fn add_sidebar(&mut self, sidebar: Sidebar) -> &mut Self {
		self.add(sidebar)
	}

	/// Appends a [`CodeEditor`]
	pub fn add_code_editor(
		&mut self,
		value: impl Into<String>,
		language: impl Into<String>,
	) -> &mut Self {
		self.add(CodeEditor::new(value).language(language))
	}

	/// Collects every [`Section`] in the tree, depth-first in render order
	pub fn outline(&self) -> Vec<&Section> {
		let mut sections = Vec::new();
		collect_sections(&self.children, &mut sections);
		sections
	}

	/// Renders the page between the site navbar and footer
	///
	/// Pieces are joined with a newline. With both `auto_navbar` and
	/// `auto_footer` disabled this is identical to [`Component::render`].
	pub fn render_layout(&self, settings: &SiteSettings) -> String {
		tracing::debug!(
			title = %self.title,
			children = self.children.len(),
			auto_navbar = self.auto_navbar,
			auto_footer = self.auto_footer,
			"rendering page layout"
		);

		let mut parts = Vec::with_capacity(3);
		if self.auto_navbar {
			parts.push(Navbar::from_settings(settings).render());
		}
		parts.push(self.render());
		if self.auto_footer {
			parts.push(Footer::from_settings(settings).render());
		}
		parts.join("\n")
	}
}

fn collect_sections<'a>(nodes: &'a [Node], sections: &mut Vec<&'a Section>) {
	for node in nodes {
		match node {
			Node::Section(section) => sections.push(section),
			Node::Page(page) => collect_sections(&page.children, sections),
			Node::Card(card) => collect_sections(&card.children, sections),
			Node::Form(form) => collect_sections(form.children(), sections),
			Node::Navbar(navbar) => collect_sections(navbar.children(), sections),
			Node::Footer(footer) => collect_sections(footer.children(), sections),
			Node::FooterCategory(category) => collect_sections(category.children(), sections),
			Node::Sidebar(sidebar) => collect_sections(sidebar.children(), sections),
			Node::SidebarCategory(category) => collect_sections(category.children(), sections),
			_ => {}
		}
	}
}

impl Component for Page {
	fn name(&self) -> &'static str {
		"page"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(PAGE_TEMPLATE, &[("children", children.as_str())])
	}
}

/// Bordered content card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
	classes: String,
	children: Vec<Node>,
}

impl Card {
	/// Creates an empty card
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets extra classes appended to the card's own
	pub fn classes(mut self, classes: impl Into<String>) -> Self {
		self.classes = classes.into();
		self
	}
}

impl Component for Card {
	fn name(&self) -> &'static str {
		"card"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			CARD_TEMPLATE,
			&[
				("classes", self.classes.as_str()),
				("children", children.as_str()),
			],
		)
	}
}

impl_container!(Page, Card);

impl ContentContainer for Page {}
impl ContentContainer for Card {}
