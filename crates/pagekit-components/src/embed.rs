//! Third-party widget embeds

use crate::content::Html;
use crate::template::render_template;

const GITHUB_EMBED_TEMPLATE: &str = concat!(
	"\n    ",
	r#"<script src="https://emgithub.com/embed-v2.js?target={target}&style=vs2015&type=code&showBorder=on&showLineNumbers=on&showFileMeta=on&showFullPath=on&showCopy=on&fetchFromJsDelivr=on"></script>"#,
	"\n    "
);

/// Percent-encodes `url` for use as a query value, keeping `/` literal
fn encode_target(url: &str) -> String {
	urlencoding::encode(url).replace("%2F", "/")
}

/// Builds an [`Html`] leaf embedding a GitHub-hosted file through emgithub
///
/// ```
/// use pagekit_components::embed::github_embed;
///
/// let embed = github_embed("https://github.com/rust-lang/rust/blob/master/README.md");
/// assert!(embed.as_str().contains(
///     "target=https%3A//github.com/rust-lang/rust/blob/master/README.md&style=vs2015"
/// ));
/// ```
pub fn github_embed(url: &str) -> Html {
	let target = encode_target(url);
	Html::new(render_template(
		GITHUB_EMBED_TEMPLATE,
		&[("target", target.as_str())],
	))
}
