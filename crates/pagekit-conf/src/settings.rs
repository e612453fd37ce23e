//! Site-wide settings shared by every page of a site

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single navigation link shown in the site navbar or a footer category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
	/// Link label
	pub text: String,
	/// Link target
	pub url: String,
}

impl NavLink {
	/// Creates a new navigation link
	pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			url: url.into(),
		}
	}
}

/// A titled group of links rendered as one footer column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterCategorySettings {
	/// Column heading
	pub title: String,
	/// Links listed under the heading
	pub links: Vec<NavLink>,
}

/// Settings used to decorate pages with a site navbar and footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Site name shown next to the logo
	pub name: String,
	/// Logo image URL
	pub logo: String,
	/// Short line shown under the name in the footer
	pub tagline: String,
	/// Links shown in the navbar
	pub nav_links: Vec<NavLink>,
	/// Footer link columns
	pub footer_categories: Vec<FooterCategorySettings>,
}

impl SiteSettings {
	/// Creates settings for a site with the given name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Sets the logo URL
	pub fn logo(mut self, logo: impl Into<String>) -> Self {
		self.logo = logo.into();
		self
	}

	/// Sets the footer tagline
	pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
		self.tagline = tagline.into();
		self
	}

	/// Appends a navbar link
	pub fn nav_link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
		self.nav_links.push(NavLink::new(text, url));
		self
	}

	/// Appends a footer category
	pub fn footer_category(mut self, category: FooterCategorySettings) -> Self {
		self.footer_categories.push(category);
		self
	}

	/// Parses settings from a TOML document
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Parses settings from a JSON document
	pub fn from_json_str(contents: &str) -> Result<Self> {
		serde_json::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))
	}

	/// Parses settings written in `format`
	pub fn parse(contents: &str, format: SettingsFormat) -> Result<Self> {
		match format {
			SettingsFormat::Toml => Self::from_toml_str(contents),
			SettingsFormat::Json => Self::from_json_str(contents),
		}
	}

	/// Loads settings from a `.toml` or `.json` file
	///
	/// The format is chosen from the extension before the file is read.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let format = SettingsFormat::from_path(&path)?;
		let settings = std::fs::read_to_string(&path)
			.map_err(|e| SettingsError::FileError(format!("{}: {}", path.display(), e)))
			.and_then(|contents| Self::parse(&contents, format))?;

		tracing::debug!(
			path = %path.display(),
			?format,
			nav_links = settings.nav_links.len(),
			footer_categories = settings.footer_categories.len(),
			"loaded site settings"
		);
		Ok(settings)
	}
}

/// On-disk encodings accepted by [`SiteSettings::from_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
	/// `.toml`
	Toml,
	/// `.json`
	Json,
}

impl SettingsFormat {
	/// Picks the format from a file extension, ignoring ASCII case
	pub fn from_extension(extension: &str) -> Option<Self> {
		[("toml", Self::Toml), ("json", Self::Json)]
			.into_iter()
			.find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
			.map(|(_, format)| format)
	}

	fn from_path(path: &Path) -> Result<Self> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
			.ok_or_else(|| {
				SettingsError::UnsupportedFormat(format!(
					"{} (expected .toml or .json)",
					path.display()
				))
			})
	}
}

impl FooterCategorySettings {
	/// Creates an empty footer category
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			links: Vec::new(),
		}
	}

	/// Appends a link to the category
	pub fn link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
		self.links.push(NavLink::new(text, url));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	const SAMPLE_TOML: &str = r#"
name = "Acme"
logo = "/logo.svg"

[[nav_links]]
text = "Docs"
url = "/docs"

[[footer_categories]]
title = "Company"
links = [{ text = "About", url = "/about" }]
"#;

	#[rstest]
	fn test_from_toml_str() {
		let settings = SiteSettings::from_toml_str(SAMPLE_TOML).unwrap();

		assert_eq!(settings.name, "Acme");
		assert_eq!(settings.logo, "/logo.svg");
		assert_eq!(settings.tagline, "");
		assert_eq!(settings.nav_links, vec![NavLink::new("Docs", "/docs")]);
		assert_eq!(
			settings.footer_categories,
			vec![FooterCategorySettings::new("Company").link("About", "/about")]
		);
	}

	#[rstest]
	fn test_empty_toml_uses_defaults() {
		let settings = SiteSettings::from_toml_str("").unwrap();
		assert_eq!(settings, SiteSettings::default());
	}

	#[rstest]
	fn test_from_json_str() {
		let settings =
			SiteSettings::from_json_str(r#"{"name": "Acme", "tagline": "hello"}"#).unwrap();
		assert_eq!(settings, SiteSettings::new("Acme").tagline("hello"));
	}

	#[rstest]
	fn test_invalid_toml_is_parse_error() {
		let result = SiteSettings::from_toml_str("name = ");
		assert!(matches!(result, Err(SettingsError::ParseError(_))));
	}

	#[rstest]
	fn test_builder_methods() {
		let settings = SiteSettings::new("Acme")
			.logo("/logo.png")
			.nav_link("Home", "/")
			.nav_link("Blog", "/blog");

		assert_eq!(settings.logo, "/logo.png");
		assert_eq!(settings.nav_links.len(), 2);
		assert_eq!(settings.nav_links[1].url, "/blog");
	}

	#[rstest]
	#[case("site.toml", SAMPLE_TOML)]
	#[case("site.json", r#"{"name": "Acme", "logo": "/logo.svg"}"#)]
	fn test_from_file(#[case] file_name: &str, #[case] contents: &str) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(file_name);
		std::fs::File::create(&path)
			.unwrap()
			.write_all(contents.as_bytes())
			.unwrap();

		let settings = SiteSettings::from_file(&path).unwrap();
		assert_eq!(settings.name, "Acme");
		assert_eq!(settings.logo, "/logo.svg");
	}

	#[rstest]
	fn test_from_file_unsupported_extension() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("site.yaml");
		std::fs::write(&path, "name: Acme").unwrap();

		let result = SiteSettings::from_file(&path);
		assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
	}

	#[rstest]
	#[case("toml", Some(SettingsFormat::Toml))]
	#[case("JSON", Some(SettingsFormat::Json))]
	#[case("yaml", None)]
	#[case("", None)]
	fn test_format_from_extension(#[case] ext: &str, #[case] expected: Option<SettingsFormat>) {
		assert_eq!(SettingsFormat::from_extension(ext), expected);
	}

	#[rstest]
	fn test_parse_dispatches_on_format() {
		let toml = SiteSettings::parse(r#"name = "Acme""#, SettingsFormat::Toml).unwrap();
		let json = SiteSettings::parse(r#"{"name": "Acme"}"#, SettingsFormat::Json).unwrap();
		assert_eq!(toml, json);
		assert!(matches!(
			SiteSettings::parse(r#"name = "Acme""#, SettingsFormat::Json),
			Err(SettingsError::ParseError(_))
		));
	}

	#[rstest]
	fn test_unsupported_extension_checked_before_read() {
		let dir = tempfile::tempdir().unwrap();
		let result = SiteSettings::from_file(dir.path().join("missing.ini"));
		assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
	}

	#[rstest]
	fn test_from_file_missing() {
		let dir = tempfile::tempdir().unwrap();
		let result = SiteSettings::from_file(dir.path().join("missing.toml"));
		assert!(matches!(result, Err(SettingsError::FileError(_))));
	}
}
