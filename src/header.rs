/*!
# HTEmbed: Header Generation.
*/

use std::fmt::Write;



/// # Render the Header.
///
/// Encode the minified template and wrap it up in a constant declaration,
/// returning the full text of the generated header.
pub(super) fn render(name: &str, minified: &str) -> String {
	let body = encode(minified);
	format!("constexpr const char *const {name} = \"{body}\";\n")
}

/// # Encode a String-Literal Body.
///
/// Escape the text so it can sit inside a one-line double-quoted C string
/// literal and decode back byte-for-byte: quotes and backslashes get a
/// backslash prefix, while control bytes become fixed-width octal escapes.
///
/// (Fixed-width matters; a trailing digit in the text would otherwise glom
/// onto the escape.)
pub(super) fn encode(src: &str) -> String {
	let mut out = String::with_capacity(src.len() + src.len() / 8);

	for c in src.chars() {
		match c {
			'"' => { out.push_str("\\\""); },
			'\\' => { out.push_str("\\\\"); },
			_ =>
				if c < ' ' || c == '\u{7f}' {
					let _res = write!(out, "\\{:03o}", c as u32);
				}
				else { out.push(c); },
		}
	}

	out
}

/// # Valid Constant Name?
///
/// Returns `true` if the name works as a C identifier: ASCII letters,
/// digits, and underscores, not starting with a digit.
pub(super) fn valid_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') &&
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Decode a Literal Body.
	///
	/// Reverse `encode`, the way a C compiler would read the literal.
	fn decode(src: &str) -> String {
		let mut out = String::with_capacity(src.len());
		let mut chars = src.chars();
		while let Some(c) = chars.next() {
			if c == '\\' {
				let next = chars.next().expect("Dangling backslash.");
				if next.is_ascii_digit() {
					let b = chars.next().expect("Short octal escape.");
					let c2 = chars.next().expect("Short octal escape.");
					let val =
						(next as u32 - '0' as u32) * 64 +
						(b as u32 - '0' as u32) * 8 +
						(c2 as u32 - '0' as u32);
					out.push(char::from_u32(val).expect("Bad octal escape."));
				}
				else { out.push(next); }
			}
			else { out.push(c); }
		}
		out
	}

	#[test]
	fn t_encode_quotes() {
		let enc = encode(r#"<div class="a">Hello World</div>"#);
		assert_eq!(enc, r#"<div class=\"a\">Hello World</div>"#);

		// Every quote gets a prefix; none survive bare.
		assert_eq!(enc.matches("\\\"").count(), 2);
		assert_eq!(enc.matches('"').count(), 2);
	}

	#[test]
	fn t_encode_backslash() {
		assert_eq!(encode(r"a\b"), r"a\\b");
		assert_eq!(encode(r#"\""#), r#"\\\""#);
	}

	#[test]
	fn t_encode_ctrl() {
		assert_eq!(encode("a\nb"), "a\\012b");
		assert_eq!(encode("a\tb"), "a\\011b");
		assert_eq!(encode("a\u{7f}b"), "a\\177b");

		// A digit right after an escape must not extend it.
		assert_eq!(encode("a\n1b"), "a\\0121b");
	}

	#[test]
	fn t_encode_roundtrip() {
		for raw in [
			"plain text",
			r#"<input type="text" value="%s">"#,
			"line\none\nline two",
			r#"back\slash and "quote"#,
			"tab\there\u{7f}",
			"юникод тоже ок",
		] {
			assert_eq!(decode(&encode(raw)), raw, "Roundtrip failed: {raw:?}");
		}
	}

	#[test]
	fn t_render() {
		assert_eq!(
			render("INDEX_TEMPLATE", r#"<div class="a">Hello World</div>"#),
			"constexpr const char *const INDEX_TEMPLATE = \"<div class=\\\"a\\\">Hello World</div>\";\n",
		);
	}

	#[test]
	fn t_valid_name() {
		for good in ["INDEX_TEMPLATE", "_private", "a", "page2"] {
			assert!(valid_name(good), "Should be valid: {good}");
		}
		for bad in ["", "2fast", "dash-ed", "dot.ted", "naïve", "with space"] {
			assert!(! valid_name(bad), "Should be invalid: {bad}");
		}
	}
}
