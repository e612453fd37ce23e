//! Site settings for pagekit
//!
//! A page rendered with its automatic navbar and footer pulls its site
//! name, logo, navigation links and footer categories from [`SiteSettings`].
//! Settings are plain serde structs and can be loaded from TOML or JSON files.
//!
//! ```toml
//! name = "Acme Analytics"
//! logo = "/static/logo.svg"
//! tagline = "Numbers you can trust"
//!
//! [[nav_links]]
//! text = "Docs"
//! url = "/docs"
//!
//! [[footer_categories]]
//! title = "Company"
//! links = [{ text = "About", url = "/about" }]
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::{Result, SettingsError};
pub use settings::{FooterCategorySettings, NavLink, SettingsFormat, SiteSettings};
