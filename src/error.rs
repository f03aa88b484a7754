/*!
# HTEmbed: Errors
*/

use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
  .-------------.
  | <!-- ... -->|   ", "\x1b[38;5;199mHTEmbed\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
  |  <html/>    |   Minify an HTML template into
  '-------------'   a C++ header constant.

USAGE:
    htembed [FLAGS] [OPTIONS]

FLAGS:
    -h, --help           Print help information and exit.
    -V, --version        Print program version and exit.

OPTIONS:
    -i, --input <FILE>   Source HTML template to minify and embed.
                         [default: assets/index.html]
    -n, --name <IDENT>   Constant name for the generated declaration.
                         [default: INDEX_TEMPLATE]
    -o, --output <FILE>  Destination for the generated header.
                         [default: include/index.html.h]
"#);



#[expect(clippy::missing_docs_in_private_items, reason = "Self-explanatory.")]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Generic Error.
pub(super) enum HtembedError {
	ConstName,
	EmptyFile,
	Minify,
	Read,
	Write,
	PrintHelp,    // Not an error.
	PrintVersion, // Not an error.
}

impl AsRef<str> for HtembedError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for HtembedError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for HtembedError {}

impl HtembedError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::ConstName => "The constant name is not a valid C identifier.",
			Self::EmptyFile => "The template is empty.",
			Self::Minify => "Unable to minify the template.",
			Self::Read => "Unable to read the template.",
			Self::Write => "Unable to write the header.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("HTEmbed v", env!("CARGO_PKG_VERSION")),
		}
	}
}
