//! # Pagekit Components
//!
//! Server-side HTML components styled with Tailwind CSS utility classes.
//!
//! A page is a tree of components. Leaves (text, images, alerts, form fields)
//! render straight from their fields; containers (pages, cards, forms, navbars,
//! sidebars, footers) render their children in insertion order, joined by
//! newlines, inside a fixed wrapper.
//!
//! ## Building a page
//!
//! ```
//! use pagekit_components::{Alert, Card, Component, Container, ContentContainer, Page};
//!
//! let mut card = Card::new();
//! card.add_header("Revenue", 4).add_text("Up 12% this quarter");
//!
//! let mut page = Page::new("Dashboard");
//! page.add_hero("Dashboard", "Q3 overview", "", "indigo")
//!     .add_card(card)
//!     .add(Alert::new("Numbers are preliminary").badge("Draft"));
//!
//! let html = page.render();
//! assert!(html.contains("Up 12% this quarter"));
//! ```
//!
//! ## Escaping
//!
//! Field values are inserted into markup verbatim so that intentional markup
//! can be embedded. Untrusted input must be sanitized with the helpers in
//! [`escape`] before it is handed to a component.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod component;
pub mod content;
pub mod embed;
pub mod escape;
pub mod form;
pub mod layout;
pub mod navigation;
pub mod template;

pub use component::{Component, Container, Node};
pub use content::{
	Alert, Code, CodeEditor, Divider, Header, Hero, Html, Image, Link, PlainLink, Section, Text,
};
pub use form::{Form, FormEmail, FormSubmit, FormText, TextArea};
pub use layout::{Card, ContentContainer, Page};
pub use navigation::{
	Footer, FooterCategory, FooterLink, Navbar, Sidebar, SidebarCategory, SidebarLink,
};
