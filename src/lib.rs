//! # Pagekit
//!
//! Server-rendered HTML pages built from Tailwind-styled components.
//!
//! Pagekit assembles a page as a tree of components and renders it to an HTML
//! fragment in one pass. There is no client runtime; the output is plain
//! markup that relies on the Tailwind CSS stylesheet for its look.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - Table rendering and human-readable cell formatting
//!
//! ## Quick Example
//!
//! ```
//! use pagekit::prelude::*;
//!
//! let settings = SiteSettings::new("Acme")
//!     .nav_link("Docs", "/docs")
//!     .footer_category(FooterCategorySettings::new("Company").link("About", "/about"));
//!
//! let mut page = Page::new("Welcome");
//! page.add_header("Welcome to Acme", 2)
//!     .add_text("Everything you need, nothing you don't.")
//!     .add_divider();
//!
//! let html = page.render_layout(&settings);
//! assert!(html.contains("Welcome to Acme"));
//! assert!(html.contains(r#"href="/docs""#));
//! ```
//!
//! ## Crates
//!
//! - [`components`] - The component tree and every built-in component
//! - [`conf`] - Site settings loaded from TOML or JSON
//! - [`tables`] - Table rendering and cell formatting

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use pagekit_components as components;
pub use pagekit_conf as conf;
#[cfg(feature = "tables")]
pub use pagekit_tables as tables;

pub use pagekit_components::{
	Alert, Card, Code, CodeEditor, Component, Container, ContentContainer, Divider, Footer,
	FooterCategory, FooterLink, Form, FormEmail, FormSubmit, FormText, Header, Hero, Html, Image,
	Link, Navbar, Node, Page, PlainLink, Section, Sidebar, SidebarCategory, SidebarLink, Text,
	TextArea,
};
pub use pagekit_conf::{FooterCategorySettings, NavLink, SettingsError, SettingsFormat, SiteSettings};

#[cfg(feature = "tables")]
pub use pagekit_tables::{
	DataFrame, TableExt, TableSource, ToIso8601, Value, format_value, render_table,
};

/// Commonly used types and traits
pub mod prelude {
	pub use crate::{
		Card, Component, Container, ContentContainer, Form, Page, Section, Sidebar, SiteSettings,
		FooterCategorySettings,
	};
	pub use pagekit_components::embed::github_embed;

	#[cfg(feature = "tables")]
	pub use crate::{DataFrame, TableExt, TableSource, Value, format_value};
}
