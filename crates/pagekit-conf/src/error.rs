//! Error types for pagekit-conf

use thiserror::Error;

/// Error raised while loading site settings
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("File error: {0}")]
	FileError(String),

	/// The settings content is not valid for its format
	#[error("Parse error: {0}")]
	ParseError(String),

	/// The file extension is neither `.toml` nor `.json`
	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
