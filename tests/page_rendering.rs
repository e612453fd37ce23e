//! End-to-end page rendering

use pagekit::components::embed::github_embed;
use pagekit::prelude::*;
use pagekit::{Alert, FormEmail, Node, Text};
use rstest::rstest;

const PAGE_OPEN: &str = "<div class=\"container px-5 py-24 mx-auto max-w-fit\">\n    ";
const PAGE_CLOSE: &str = " \n</div>";

#[rstest]
fn test_page_with_text_and_divider() {
	let mut page = Page::new("Plain");
	page.add_text("First").add_divider();

	assert_eq!(
		page.render(),
		format!(
			"{}{}\n{}{}",
			PAGE_OPEN,
			Text::new("First").render(),
			r#"<hr class="my-5 border-gray-300 w-full">"#,
			PAGE_CLOSE
		)
	);
}

#[rstest]
fn test_nested_containers_render_depth_first() {
	let mut form = Form::new("/contact").method("POST");
	form.add(FormEmail::default()).add_form_submit("Send");

	let mut inner = Card::new().classes("mt-4");
	inner.add_text("inner");

	let mut outer = Card::new();
	outer.add_text("outer").add_card(inner).add_form(form);

	let mut page = Page::new("Contact");
	page.add_card(outer);

	let html = page.render();
	let positions: Vec<usize> = ["outer", "inner", "Your E-mail", ">Send</button>"]
		.iter()
		.map(|needle| html.find(needle).unwrap())
		.collect();
	assert!(positions.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(html.matches("<form ").count(), 1);
	assert!(html.contains("method=\"POST\""));
}

#[rstest]
fn test_rendering_is_repeatable() {
	let mut page = Page::new("Twice");
	page.add_alert("Heads up", "New", "teal");
	let first = page.render();
	assert_eq!(first, page.render());

	page.add_text("more");
	let second = page.render();
	assert!(second.starts_with(&first[..first.len() - PAGE_CLOSE.len()]));
	assert!(second.ends_with(&format!("<p class=\"mb-6 text-lg font-normal text-gray-500 lg:text-xl sm:px-16 xl:px-48 dark:text-gray-400\">more</p>{}", PAGE_CLOSE)));
}

#[rstest]
fn test_values_are_not_escaped() {
	let mut page = Page::new("Raw");
	page.add_text("<b>bold</b> & {children}");
	assert!(page.render().contains("><b>bold</b> & {children}</p>"));
}

#[rstest]
fn test_layout_wraps_body() {
	let settings = SiteSettings::new("Acme")
		.logo("/logo.svg")
		.tagline("Tools for builders")
		.nav_link("Blog", "/blog")
		.footer_category(FooterCategorySettings::new("Company").link("About", "/about"));

	let mut page = Page::new("Home");
	page.add_hero("Acme", "Build faster", "/hero.png", "indigo");

	let html = page.render_layout(&settings);
	let body = page.render();
	assert!(html.starts_with("<header class=\"text-white body-font\">"));
	assert!(html.contains(&format!("</header>\n{}\n<footer", body)));
	assert!(html.contains(r#"<a class="mr-5 hover:text-gray-300" href="/blog">Blog</a>"#));
	assert!(html.contains(r#"<li><a href="/about" class="text-gray-600 hover:text-gray-800">About</a></li>"#));
	assert!(html.contains("Tools for builders"));
	assert!(html.ends_with("</footer>"));
}

#[rstest]
#[case(true, true, 1, 1)]
#[case(false, true, 0, 1)]
#[case(true, false, 1, 0)]
#[case(false, false, 0, 0)]
fn test_layout_flags(
	#[case] navbar: bool,
	#[case] footer: bool,
	#[case] headers: usize,
	#[case] footers: usize,
) {
	let page = Page::new("Flags").auto_navbar(navbar).auto_footer(footer);
	let html = page.render_layout(&SiteSettings::new("Acme"));
	assert_eq!(html.matches("<header ").count(), headers);
	assert_eq!(html.matches("<footer ").count(), footers);
}

#[rstest]
fn test_sidebar_and_outline() {
	let mut sidebar = Sidebar::new();
	let mut category = pagekit::SidebarCategory::new("Guide");
	category
		.add_sidebar_link("Install", "#install")
		.add_sidebar_link("Usage", "#usage");
	sidebar.add_sidebar_category(category);

	let mut page = Page::new("Docs");
	page.add_sidebar(sidebar)
		.add_section("install", "Install", 1)
		.add_text("cargo add pagekit")
		.add_section("usage", "Usage", 2);

	let html = page.render();
	assert!(html.contains("<span id=install></span>"));
	assert!(html.contains(r##"<li><a href="#usage" class="text-gray-600 hover:text-gray-800">Usage</a></li>"##));

	let outline: Vec<_> = page
		.outline()
		.into_iter()
		.map(|s| (s.id(), s.outline_level()))
		.collect();
	assert_eq!(outline, [("install", 1), ("usage", 2)]);
}

#[rstest]
fn test_generic_add_and_embed() {
	let mut page = Page::new("Mixed");
	page.add(Alert::new("Saved")).add(github_embed("https://github.com/a/b/blob/main/x.rs"));

	assert_eq!(page.children().len(), 2);
	assert!(matches!(page.children()[0], Node::Alert(_)));
	assert!(page.render().contains("target=https%3A//github.com/a/b/blob/main/x.rs&style=vs2015"));
}
