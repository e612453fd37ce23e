//! Site chrome: navbar, sidebar and footer containers with their links

use crate::component::{Component, Container, Node, impl_container};
use crate::content::{Link, PlainLink};
use crate::template::render_template;
use pagekit_conf::SiteSettings;

const NAVBAR_TEMPLATE: &str = concat!(
	r#"<header class="text-white body-font">
    <div class="gradient-background mx-auto flex flex-wrap p-5 flex-col md:flex-row items-center">
        <a href="/" class="flex title-font font-bold items-center text-gray-100 mb-4 md:mb-0"><img class="object-scale-down h-10" src="{logo}"><span class="ml-3 text-4xl">{title}</span></a>
        <nav class="md:ml-auto flex flex-wrap items-center text-base justify-center">
          <button onclick="toggleDarkMode()" type="button" class="mx-3 px-3 py-2 text-xs font-medium text-center text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 bg-gradient-to-br from-purple-600 to-blue-500 group-hover:from-purple-600 group-hover:to-blue-500">
            Dark Mode
          </button>            
            {children}"#,
	" \n",
	r#"        </nav>
        <button class="inline-flex items-center bg-gray-100 text-black border-0 py-1 px-3 focus:outline-none hover:bg-gray-200 rounded text-base mt-4 md:mt-0">Sign In<svg fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" class="w-4 h-4 ml-1" viewBox="0 0 24 24"><path d="M5 12h14M12 5l7 7-7 7"></path></svg></button>
    </div>
</header>"#
);

const SIDEBAR_TEMPLATE: &str = concat!(
	r#"<aside class="hidden md:block flex w-72 flex-col space-y-2 bg-slate-200 p-2 h-screen sticky top-0">
    <div class="sticky top-0">
        {children}"#,
	" \n",
	r#"    </div>
</aside>"#
);

const SIDEBAR_CATEGORY_TEMPLATE: &str = concat!(
	r#"<div class="mb-8">
    <h2 class="text-lg font-medium text-gray-900 tracking-wider uppercase mb-3">{title}</h2>
    <ul class="ml-5 list-none">
        {children}"#,
	" \n",
	r#"    </ul>
</div>"#
);

const FOOTER_TEMPLATE: &str = concat!(
	r#"<footer class="text-gray-600 body-font">
    <div class="container px-5 py-24 mx-auto flex md:items-center lg:items-start md:flex-row md:flex-nowrap flex-wrap flex-col">
        <div class="w-64 flex-shrink-0 md:mx-0 mx-auto text-center md:text-left">
            <a class="flex title-font font-medium items-center md:justify-start justify-center text-gray-900"><img class="object-scale-down h-10" src="{logo}"><span class="ml-3 text-xl">{title}</span></a>
            <p class="mt-2 text-sm text-gray-500">{subtitle}</p>
        </div>
        <div class="flex-grow flex flex-wrap md:pl-20 -mb-10 md:mt-0 mt-10 md:text-left text-center">
            {children}"#,
	" \n",
	r#"        </div>
    </div>
</footer>"#
);

const FOOTER_CATEGORY_TEMPLATE: &str = concat!(
	r#"<div class="lg:w-1/4 md:w-1/2 w-full px-4">
    <h2 class="title-font font-medium text-gray-900 tracking-widest text-sm mb-3 uppercase">{title}</h2>
    <nav class="list-none mb-10">
        {children}"#,
	" \n",
	r#"    </nav>
</div>"#
);

const LIST_LINK_TEMPLATE: &str =
	r#"<li><a href="{url}" class="text-gray-600 hover:text-gray-800">{title}</a></li>"#;

const NAV_LINK_CLASSES: &str = "mr-5 hover:text-gray-300";

/// Top navigation bar with the site logo, a dark-mode toggle and links
#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
	title: String,
	logo: String,
	children: Vec<Node>,
}

impl Navbar {
	/// Creates a navbar without a logo
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			logo: String::new(),
			children: Vec::new(),
		}
	}

	/// Builds the navbar described by site settings
	///
	/// Each configured navigation link becomes a [`PlainLink`].
	pub fn from_settings(settings: &SiteSettings) -> Self {
		let mut navbar = Self::new(settings.name.as_str()).logo(settings.logo.as_str());
		for link in &settings.nav_links {
			navbar.add(PlainLink::new(link.text.as_str(), link.url.as_str()).classes(NAV_LINK_CLASSES));
		}
		navbar
	}

	/// Sets the logo URL
	pub fn logo(mut self, logo: impl Into<String>) -> Self {
		self.logo = logo.into();
		self
	}

	/// Appends a [`Link`]
	pub fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.add(Link::new(text, url))
	}

	/// Appends a [`PlainLink`] with the given classes
	pub fn add_plain_link(
		&mut self,
		text: impl Into<String>,
		url: impl Into<String>,
		classes: impl Into<String>,
	) -> &mut Self {
		self.add(PlainLink::new(text, url).classes(classes))
	}
}

impl Component for Navbar {
	fn name(&self) -> &'static str {
		"navbar"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			NAVBAR_TEMPLATE,
			&[
				("logo", self.logo.as_str()),
				("title", self.title.as_str()),
				("children", children.as_str()),
			],
		)
	}
}

/// Sticky side navigation holding link categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sidebar {
	children: Vec<Node>,
}

impl Sidebar {
	/// Creates an empty sidebar
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a [`SidebarCategory`]
	pub fn add_sidebar_category(&mut self, category: SidebarCategory) -> &mut Self {
		self.add(category)
	}
}

impl Component for Sidebar {
	fn name(&self) -> &'static str {
		"sidebar"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(SIDEBAR_TEMPLATE, &[("children", children.as_str())])
	}
}

/// Titled list of sidebar links
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarCategory {
	title: String,
	children: Vec<Node>,
}

impl SidebarCategory {
	/// Creates an empty category
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			children: Vec::new(),
		}
	}

	/// Appends a [`SidebarLink`]
	pub fn add_sidebar_link(&mut self, title: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.add(SidebarLink::new(title, url))
	}
}

impl Component for SidebarCategory {
	fn name(&self) -> &'static str {
		"sidebar_category"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			SIDEBAR_CATEGORY_TEMPLATE,
			&[("title", self.title.as_str()), ("children", children.as_str())],
		)
	}
}

/// List item link inside a [`SidebarCategory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
	title: String,
	url: String,
}

impl SidebarLink {
	/// Creates a sidebar link
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
		}
	}
}

impl Component for SidebarLink {
	fn name(&self) -> &'static str {
		"sidebar_link"
	}

	fn render(&self) -> String {
		render_template(
			LIST_LINK_TEMPLATE,
			&[("url", self.url.as_str()), ("title", self.title.as_str())],
		)
	}
}

/// Page footer with the site identity and link columns
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
	title: String,
	subtitle: String,
	logo: String,
	children: Vec<Node>,
}

impl Footer {
	/// Creates a footer with only a title
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: String::new(),
			logo: String::new(),
			children: Vec::new(),
		}
	}

	/// Builds the footer described by site settings
	///
	/// The tagline becomes the subtitle and every configured category becomes
	/// a [`FooterCategory`] of [`FooterLink`]s, in configuration order.
	pub fn from_settings(settings: &SiteSettings) -> Self {
		let mut footer = Self::new(settings.name.as_str())
			.subtitle(settings.tagline.as_str())
			.logo(settings.logo.as_str());
		for category in &settings.footer_categories {
			let mut column = FooterCategory::new(category.title.as_str());
			for link in &category.links {
				column.add_footer_link(link.text.as_str(), link.url.as_str());
			}
			footer.add_footer_category(column);
		}
		footer
	}

	/// Sets the line under the title
	pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = subtitle.into();
		self
	}

	/// Sets the logo URL
	pub fn logo(mut self, logo: impl Into<String>) -> Self {
		self.logo = logo.into();
		self
	}

	/// Appends a [`FooterCategory`]
	pub fn add_footer_category(&mut self, category: FooterCategory) -> &mut Self {
		self.add(category)
	}
}

impl Component for Footer {
	fn name(&self) -> &'static str {
		"footer"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			FOOTER_TEMPLATE,
			&[
				("logo", self.logo.as_str()),
				("title", self.title.as_str()),
				("subtitle", self.subtitle.as_str()),
				("children", children.as_str()),
			],
		)
	}
}

/// Footer column: a heading over a list of links
#[derive(Debug, Clone, PartialEq)]
pub struct FooterCategory {
	title: String,
	children: Vec<Node>,
}

impl FooterCategory {
	/// Creates an empty column
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			children: Vec::new(),
		}
	}

	/// Appends a [`FooterLink`]
	pub fn add_footer_link(&mut self, title: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.add(FooterLink::new(title, url))
	}
}

impl Component for FooterCategory {
	fn name(&self) -> &'static str {
		"footer_category"
	}

	fn render(&self) -> String {
		let children = self.render_children();
		render_template(
			FOOTER_CATEGORY_TEMPLATE,
			&[("title", self.title.as_str()), ("children", children.as_str())],
		)
	}
}

/// List item link inside a [`FooterCategory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
	title: String,
	url: String,
}

impl FooterLink {
	/// Creates a footer link
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
		}
	}
}

impl Component for FooterLink {
	fn name(&self) -> &'static str {
		"footer_link"
	}

	fn render(&self) -> String {
		render_template(
			LIST_LINK_TEMPLATE,
			&[("url", self.url.as_str()), ("title", self.title.as_str())],
		)
	}
}

impl_container!(Navbar, Sidebar, SidebarCategory, Footer, FooterCategory);

#[cfg(test)]
mod tests {
	use super::*;
	use pagekit_conf::FooterCategorySettings;
	use rstest::rstest;

	#[rstest]
	fn test_empty_sidebar() {
		assert_eq!(
			Sidebar::new().render(),
			"<aside class=\"hidden md:block flex w-72 flex-col space-y-2 bg-slate-200 p-2 h-screen sticky top-0\">\n    <div class=\"sticky top-0\">\n         \n    </div>\n</aside>"
		);
	}

	#[rstest]
	fn test_sidebar_nesting() {
		let mut docs = SidebarCategory::new("Docs");
		docs.add_sidebar_link("Intro", "#intro")
			.add_sidebar_link("Usage", "#usage");
		let mut sidebar = Sidebar::new();
		sidebar.add_sidebar_category(docs);

		let html = sidebar.render();
		assert!(html.contains(">Docs</h2>"));
		assert!(html.contains(
			"<li><a href=\"#intro\" class=\"text-gray-600 hover:text-gray-800\">Intro</a></li>\n<li><a href=\"#usage\""
		));
	}

	#[rstest]
	fn test_footer_link_and_sidebar_link_share_markup() {
		assert_eq!(
			FooterLink::new("About", "/about").render(),
			SidebarLink::new("About", "/about").render()
		);
	}

	#[rstest]
	fn test_footer_category_wraps_links() {
		let mut category = FooterCategory::new("Company");
		category.add_footer_link("About", "/about");
		let html = category.render();
		assert!(html.starts_with("<div class=\"lg:w-1/4 md:w-1/2 w-full px-4\">"));
		assert!(html.contains("uppercase\">Company</h2>"));
		assert!(html.contains("        <li><a href=\"/about\""));
		assert!(html.ends_with("</li> \n    </nav>\n</div>"));
	}

	#[rstest]
	fn test_footer_fields() {
		let html = Footer::new("Acme").subtitle("Since 1999").logo("/logo.svg").render();
		assert!(html.contains("src=\"/logo.svg\"><span class=\"ml-3 text-xl\">Acme</span>"));
		assert!(html.contains("<p class=\"mt-2 text-sm text-gray-500\">Since 1999</p>"));
	}

	#[rstest]
	fn test_navbar_links() {
		let mut navbar = Navbar::new("Acme");
		navbar
			.add_plain_link("Docs", "/docs", "mr-5")
			.add_link("Blog", "/blog");

		let html = navbar.render();
		assert!(html.contains("<span class=\"ml-3 text-4xl\">Acme</span>"));
		assert!(html.contains("toggleDarkMode()"));
		assert!(html.contains("Dark Mode\n          </button>            \n"));
		let docs = html.find("<a class=\"mr-5\" href=\"/docs\">Docs</a>").unwrap();
		let blog = html.find("<a href=\"/blog\"").unwrap();
		assert!(docs < blog);
	}

	#[rstest]
	fn test_navbar_from_settings() {
		let settings = SiteSettings::new("Acme")
			.logo("/logo.svg")
			.nav_link("Docs", "/docs");
		let navbar = Navbar::from_settings(&settings);

		assert_eq!(navbar.children().len(), 1);
		assert_eq!(
			navbar.children()[0],
			Node::PlainLink(PlainLink::new("Docs", "/docs").classes(NAV_LINK_CLASSES))
		);
		assert!(navbar.render().contains("src=\"/logo.svg\""));
	}

	#[rstest]
	fn test_footer_from_settings() {
		let settings = SiteSettings::new("Acme")
			.tagline("Tagline")
			.footer_category(FooterCategorySettings::new("Company").link("About", "/about"))
			.footer_category(FooterCategorySettings::new("Legal"));
		let footer = Footer::from_settings(&settings);

		assert_eq!(footer.children().len(), 2);
		let html = footer.render();
		assert!(html.contains(">Tagline</p>"));
		assert!(html.find(">Company</h2>").unwrap() < html.find(">Legal</h2>").unwrap());
		assert!(html.contains(">About</a></li>"));
	}
}
