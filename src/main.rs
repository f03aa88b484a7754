/*!
# `HTEmbed`

`HTEmbed` is a tiny pre-build helper for firmware projects that serve a
static status page straight out of program memory. It reads an HTML template
from disk, minifies it — inline CSS included — and writes a generated C++
header declaring the result as a single string constant, ready for
`#include` by the web-handler sources.

The heavy lifting is delegated to [`minify-html`](https://crates.io/crates/minify-html),
pulled in as a regular Cargo dependency rather than installed on the fly, so
the build graph stays declarative.

Because the template usually doubles as a `printf` format string on the
device, minification is kept to its spec-compliant profile; placeholders and
rendering-relevant whitespace come through untouched.



## Use

Run it from the project root before compiling the firmware:

```bash
# The defaults mirror the usual project layout.
htembed

# Or spell everything out.
htembed -i assets/index.html -o include/index.html.h -n INDEX_TEMPLATE
```

The generated header contains exactly one line:

```cpp
constexpr const char *const INDEX_TEMPLATE = "<!doctype html><html>…</html>";
```

The literal body is escaped so that un-escaping it reproduces the minified
template byte-for-byte: quotes and backslashes are backslash-prefixed, and
any control bytes become fixed-width octal escapes.

The header is written atomically — temp file plus rename — so an interrupted
run leaves the previous copy in place rather than a truncated one.

Failures (missing template, unwritable destination, etc.) print a one-line
error and exit non-zero, failing the enclosing build.
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod error;
mod header;
mod minify;

use argyle::Argument;
use dactyl::NiceU64;
use error::HtembedError;
use fyi_msg::Msg;
use std::{
	num::NonZeroU64,
	path::{
		Path,
		PathBuf,
	},
};



/// # Default Source Asset.
const DEFAULT_SRC: &str = "assets/index.html";

/// # Default Header Destination.
const DEFAULT_DST: &str = "include/index.html.h";

/// # Default Constant Name.
const DEFAULT_NAME: &str = "INDEX_TEMPLATE";



/// # Main.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (HtembedError::PrintHelp | HtembedError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn _main() -> Result<(), HtembedError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut src = PathBuf::from(DEFAULT_SRC);
	let mut dst = PathBuf::from(DEFAULT_DST);
	let mut name = String::from(DEFAULT_NAME);

	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(HtembedError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(HtembedError::PrintVersion),
			Argument::KeyWithValue("-i" | "--input", v) => { src = PathBuf::from(v); },
			Argument::KeyWithValue("-n" | "--name", v) => { name = v; },
			Argument::KeyWithValue("-o" | "--output", v) => { dst = PathBuf::from(v); },
			// Nothing else is expected.
			_ => {},
		}
	}

	// Do the dirty work!
	let (before, after) = generate(&src, &dst, &name)?;

	// Summarize.
	Msg::crunched(format!(
		"{} bytes of template minified to {}, embedded as {}.",
		NiceU64::from(before.get()),
		NiceU64::from(after.get()),
		name,
	)).print();

	Ok(())
}

/// # Generate the Header.
///
/// Minify the template at `src` and (atomically) overwrite `dst` with a
/// generated header declaring the result as a constant named `name`.
///
/// Returns the template's original and minified sizes.
///
/// ## Errors
///
/// This will return an error if the constant name is invalid, the template
/// is unreadable or empty, or the header can't be written. Nothing is
/// written unless every prior step succeeded.
fn generate(src: &Path, dst: &Path, name: &str)
-> Result<(NonZeroU64, NonZeroU64), HtembedError> {
	if ! header::valid_name(name) { return Err(HtembedError::ConstName); }

	let (before, minified) = minify::minify_file(src)?;
	let after = u64::try_from(minified.len())
		.ok()
		.and_then(NonZeroU64::new)
		.ok_or(HtembedError::EmptyFile)?;

	let out = header::render(name, &minified);
	write_atomic::write_file(dst, out.as_bytes()).map_err(|_| HtembedError::Write)?;

	Ok((before, after))
}
