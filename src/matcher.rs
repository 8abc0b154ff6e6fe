use crate::format::Format;
use regex::{bytes, Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// Integer channel, 0-255; a three digit value may not start with zero
const INT_CHANNEL: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})";

/// Normalized float channel, 0.0-1.0
const FLOAT_CHANNEL: &str = r"(?:0(?:\.[0-9]*)?|1(?:\.0*)?)";

/// Channel separator: a comma with at most one space after it
const SEPARATOR: &str = ", ?";

/// Source of the color literal pattern
///
/// Each notation is wrapped in a capture group named after the format, so a
/// match reports which shape it was. `rgba` comes before `rgb` in the
/// alternation.
pub static COLOR_PATTERN: LazyLock<String> = LazyLock::new(|| {
  let int3 = channels(INT_CHANNEL, 3);
  let int4 = channels(INT_CHANNEL, 4);
  let float3 = channels(FLOAT_CHANNEL, 3);
  let float4 = channels(FLOAT_CHANNEL, 4);
  format!(
    r"(?i)(?P<hex>#(?:[0-9a-f]{{6}}|[0-9a-f]{{3}})\b)|(?P<rgba>rgba\({int4}\))|(?P<rgb>rgb\({int3}\))|(?P<vec4>vec4\({float4}\))|(?P<vec3>vec3\({float3}\))"
  )
});

static COLOR_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&COLOR_PATTERN).expect("Invalid color literal regex"));

static COLOR_REGEX_BYTES: LazyLock<bytes::Regex> = LazyLock::new(|| {
  bytes::Regex::new(&COLOR_PATTERN).expect("Invalid color literal bytes regex")
});

static INT_CHANNEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!("^{INT_CHANNEL}$")).expect("Invalid integer channel regex")
});

static FLOAT_CHANNEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!("^{FLOAT_CHANNEL}$")).expect("Invalid float channel regex")
});

/// Whether `text` is exactly one integer channel the pattern accepts
pub(crate) fn is_int_channel(text: &str) -> bool {
  INT_CHANNEL_REGEX.is_match(text)
}

/// Whether `text` is exactly one float channel the pattern accepts
pub(crate) fn is_float_channel(text: &str) -> bool {
  FLOAT_CHANNEL_REGEX.is_match(text)
}

fn channels(channel: &str, count: usize) -> String {
  vec![channel; count].join(SEPARATOR)
}

/// A color literal found in a line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatch<'a> {
  /// The notation the literal was written in
  pub notation: Format,
  /// Byte range of the literal within the line
  pub range: Range<usize>,
  /// The literal itself
  pub text: &'a str,
}

/// The compiled color literal pattern
pub fn color_regex() -> &'static Regex {
  &COLOR_REGEX
}

/// The compiled color literal pattern, for input that may not be UTF-8
pub fn color_regex_bytes() -> &'static bytes::Regex {
  &COLOR_REGEX_BYTES
}

/// Find every color literal in a line, left to right, without overlaps
pub fn find_colors(line: &str) -> impl Iterator<Item = ColorMatch<'_>> {
  COLOR_REGEX.captures_iter(line).filter_map(|caps| {
    let notation = notation_of(&caps)?;
    let m = caps.get(0)?;
    Some(ColorMatch {
      notation,
      range: m.range(),
      text: m.as_str(),
    })
  })
}

/// Which notation a set of captures matched
pub fn notation_of(caps: &Captures<'_>) -> Option<Format> {
  Format::ALL
    .into_iter()
    .find(|&format| caps.name(format.name()).is_some())
}

/// Which notation a set of byte captures matched
pub fn notation_of_bytes(caps: &bytes::Captures<'_>) -> Option<Format> {
  Format::ALL
    .into_iter()
    .find(|&format| caps.name(format.name()).is_some())
}
