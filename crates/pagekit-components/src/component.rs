//! Core component traits and the [`Node`] sum type

use crate::content::{
	Alert, Code, CodeEditor, Divider, Header, Hero, Html, Image, Link, PlainLink, Section, Text,
};
use crate::form::{Form, FormEmail, FormSubmit, FormText, TextArea};
use crate::layout::{Card, Page};
use crate::navigation::{
	Footer, FooterCategory, FooterLink, Navbar, Sidebar, SidebarCategory, SidebarLink,
};

/// Component trait - base interface for all UI components
///
/// Rendering is a pure function of the component's current fields: each call
/// recomputes the markup and nothing is cached between calls.
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to an HTML string
	fn render(&self) -> String;
}

/// A component that owns an ordered list of child nodes
///
/// Child order is display order. Builder methods mutate the container in place
/// and return `&mut Self` so calls can be chained:
///
/// ```
/// use pagekit_components::{Card, Component, Container, Text};
///
/// let mut card = Card::new();
/// card.add(Text::new("first")).add(Text::new("second"));
/// assert_eq!(card.children().len(), 2);
/// ```
///
/// [`add`](Container::add) accepts any node kind. The typed `add_*` methods on
/// each container only offer the kinds that belong to its family.
pub trait Container: Component {
	/// Returns the children in render order
	fn children(&self) -> &[Node];

	/// Returns the children for in-place modification
	fn children_mut(&mut self) -> &mut Vec<Node>;

	/// Appends a child of any kind and returns the same container
	fn add(&mut self, child: impl Into<Node>) -> &mut Self
	where
		Self: Sized,
	{
		self.children_mut().push(child.into());
		self
	}

	/// Appends a child and returns the container by value, for inline nesting
	///
	/// ```
	/// use pagekit_components::{Card, Container, Page, Text};
	///
	/// let mut page = Page::new("Home");
	/// page.add(Card::new().with_child(Text::new("inside")));
	/// ```
	fn with_child(mut self, child: impl Into<Node>) -> Self
	where
		Self: Sized,
	{
		self.children_mut().push(child.into());
		self
	}

	/// Appends every node from `children`, by value
	fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self
	where
		Self: Sized,
	{
		self.children_mut().extend(children);
		self
	}

	/// Renders all children, newline-joined in insertion order
	fn render_children(&self) -> String {
		self.children()
			.iter()
			.map(Component::render)
			.collect::<Vec<_>>()
			.join("\n")
	}
}

macro_rules! define_nodes {
	($($variant:ident),* $(,)?) => {
		/// Any component kind that can be placed in a container
		#[derive(Debug, Clone, PartialEq)]
		pub enum Node {
			$(
				#[allow(missing_docs)]
				$variant($variant),
			)*
		}

		impl Component for Node {
			fn name(&self) -> &'static str {
				match self {
					$(Self::$variant(inner) => inner.name(),)*
				}
			}

			fn render(&self) -> String {
				match self {
					$(Self::$variant(inner) => inner.render(),)*
				}
			}
		}

		$(
			impl From<$variant> for Node {
				fn from(component: $variant) -> Self {
					Self::$variant(component)
				}
			}
		)*
	};
}

define_nodes!(
	Alert,
	Card,
	Code,
	CodeEditor,
	Divider,
	Footer,
	FooterCategory,
	FooterLink,
	Form,
	FormEmail,
	FormSubmit,
	FormText,
	Header,
	Hero,
	Html,
	Image,
	Link,
	Navbar,
	Page,
	PlainLink,
	Section,
	Sidebar,
	SidebarCategory,
	SidebarLink,
	Text,
	TextArea,
);

/// Implements [`Container`] for a struct with a `children: Vec<Node>` field
macro_rules! impl_container {
	($($ty:ty),* $(,)?) => {
		$(
			impl $crate::component::Container for $ty {
				fn children(&self) -> &[$crate::component::Node] {
					&self.children
				}

				fn children_mut(&mut self) -> &mut Vec<$crate::component::Node> {
					&mut self.children
				}
			}
		)*
	};
}

pub(crate) use impl_container;
