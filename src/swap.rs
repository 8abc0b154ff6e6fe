use crate::format::{format_color, Format};
use crate::matcher::{color_regex, color_regex_bytes, notation_of, notation_of_bytes};
use crate::parse::parse_notation;
use regex::{bytes, Captures};
use std::borrow::Cow;

/// Rewrite every color literal in `line` into `format`
///
/// Text around the literals is kept as is. A line without literals is
/// returned borrowed.
pub fn swap(line: &str, format: Format) -> Cow<'_, str> {
  swap_counted(line, format).0
}

/// Like [`swap`], also returning how many literals were rewritten
pub fn swap_counted(line: &str, format: Format) -> (Cow<'_, str>, usize) {
  let mut conversions = 0;
  let swapped = color_regex().replace_all(line, |caps: &Captures<'_>| {
    conversions += 1;
    let text = &caps[0];
    let notation = notation_of(caps)
      .unwrap_or_else(|| panic!("color literal {text:?} matched no notation group"));
    convert(notation, text, format)
  });
  (swapped, conversions)
}

/// Rewrite every color literal in a line that may not be valid UTF-8
pub fn swap_bytes(line: &[u8], format: Format) -> Cow<'_, [u8]> {
  swap_bytes_counted(line, format).0
}

/// Like [`swap_bytes`], also returning how many literals were rewritten
pub fn swap_bytes_counted(line: &[u8], format: Format) -> (Cow<'_, [u8]>, usize) {
  let mut conversions = 0;
  let swapped = color_regex_bytes().replace_all(line, |caps: &bytes::Captures<'_>| {
    conversions += 1;
    let raw = &caps[0];
    let text = std::str::from_utf8(raw)
      .unwrap_or_else(|err| panic!("color literal {raw:?} is not UTF-8: {err}"));
    let notation = notation_of_bytes(caps)
      .unwrap_or_else(|| panic!("color literal {text:?} matched no notation group"));
    convert(notation, text, format).into_bytes()
  });
  (swapped, conversions)
}

/// Parse a matched literal and render it in `format`
///
/// # Panics
/// If the literal cannot be parsed. The pattern only matches what the parser
/// accepts, so this means the two have drifted apart.
fn convert(notation: Format, text: &str, format: Format) -> String {
  match parse_notation(notation, text) {
    Ok(color) => {
      let rendered = format_color(color, format);
      log::trace!("{text} ({notation}) -> {rendered}");
      rendered
    }
    Err(err) => panic!("matched {notation} literal {text:?} failed to parse: {err}"),
  }
}
