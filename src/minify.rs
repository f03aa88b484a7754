/*!
# HTEmbed: Minification.
*/

use crate::HtembedError;
use minify_html::Cfg;
use std::{
	num::NonZeroU64,
	path::Path,
};



/// # Minify a Template File.
///
/// Read the raw HTML from a file and crunch it, returning the original size
/// along with the minified text.
///
/// ## Errors
///
/// This will return an error if the file is unreadable or empty, or if the
/// minified output can't be re-expressed as text.
pub(super) fn minify_file(src: &Path) -> Result<(NonZeroU64, String), HtembedError> {
	let raw = std::fs::read_to_string(src).map_err(|_| HtembedError::Read)?;
	let before = u64::try_from(raw.len())
		.ok()
		.and_then(NonZeroU64::new)
		.ok_or(HtembedError::EmptyFile)?;

	let out = minify_str(&raw)?;
	Ok((before, out))
}

/// # Minify a Template.
///
/// Crunch raw HTML, inline CSS included, returning the result unless it
/// comes back empty or unstringable.
///
/// The spec-compliant profile keeps the structural tags and doctype in
/// place; a browser has to render the embedded copy the same as the
/// original.
pub(super) fn minify_str(raw: &str) -> Result<String, HtembedError> {
	let cfg = Cfg {
		minify_css: true,
		..Cfg::spec_compliant()
	};

	let out = minify_html::minify(raw.as_bytes(), &cfg);
	let out = String::from_utf8(out).map_err(|_| HtembedError::Minify)?;

	if out.trim().is_empty() { Err(HtembedError::EmptyFile) }
	else { Ok(out) }
}
