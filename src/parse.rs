use crate::color::{denormalize_channel, opaque, Color, HEX_SHORTHAND_MULTIPLIER};
use crate::format::Format;
use crate::matcher::{is_float_channel, is_int_channel};
use image::Rgba;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
  #[error("empty color string")]
  Empty,
  #[error("unknown color notation in `{0}`")]
  UnknownPrefix(String),
  #[error("hex color must be 3 or 6 digits long (got: {0})")]
  InvalidLength(String),
  #[error("invalid hex digits in `{0}`")]
  InvalidHex(String),
  #[error("{notation} color needs {expected} channels (got: {found})")]
  ChannelCount {
    notation: Format,
    expected: usize,
    found: usize,
  },
  #[error("invalid channel `{0}`")]
  InvalidChannel(String),
  #[error("channel `{0}` out of range")]
  OutOfRange(String),
}

/// Parse a color literal in any of the supported notations
///
/// The notation is picked from the literal's prefix, ignoring case: `#` for
/// hex, then `rgba(`, `rgb(`, `vec3(` or `vec4(`. Channels are held to the
/// same shapes [`crate::find_colors`] accepts, so surrounding whitespace, signs
/// and exponents are rejected.
pub fn parse_color(text: &str) -> Result<Color, ColorParseError> {
  if text.is_empty() {
    return Err(ColorParseError::Empty);
  }
  let notation = detect_notation(text)
    .ok_or_else(|| ColorParseError::UnknownPrefix(text.to_string()))?;
  parse_notation(notation, text)
}

/// Parse a color literal whose notation is already known
pub fn parse_notation(notation: Format, text: &str) -> Result<Color, ColorParseError> {
  match notation {
    Format::Hex => parse_hex_color(text),
    Format::Rgb => {
      let [r, g, b] = int_channels(notation, text)?;
      Ok(opaque(r, g, b))
    }
    Format::Rgba => int_channels(notation, text).map(Rgba),
    Format::Vec3 => {
      let [r, g, b] = float_channels(notation, text)?;
      Ok(opaque(r, g, b))
    }
    Format::Vec4 => float_channels(notation, text).map(Rgba),
  }
}

fn detect_notation(text: &str) -> Option<Format> {
  if text.starts_with('#') {
    return Some(Format::Hex);
  }
  // `rgba` first so it is not taken for `rgb`
  [Format::Rgba, Format::Rgb, Format::Vec3, Format::Vec4]
    .into_iter()
    .find(|&format| function_args(format, text).is_some())
}

/// Parse a hex color string into an opaque color
/// Supports: "#ff0000", "#f00", in any case
pub fn parse_hex_color(hex: &str) -> Result<Color, ColorParseError> {
  let digits = hex.strip_prefix('#').unwrap_or(hex);
  if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(ColorParseError::InvalidHex(hex.to_string()));
  }
  let component = |range: std::ops::Range<usize>| {
    u8::from_str_radix(&digits[range], 16)
      .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
  };

  match digits.len() {
    3 => {
      // Expand shorthand: "f00" -> "ff0000"
      Ok(opaque(
        component(0..1)? * HEX_SHORTHAND_MULTIPLIER,
        component(1..2)? * HEX_SHORTHAND_MULTIPLIER,
        component(2..3)? * HEX_SHORTHAND_MULTIPLIER,
      ))
    }
    6 => Ok(opaque(component(0..2)?, component(2..4)?, component(4..6)?)),
    _ => Err(ColorParseError::InvalidLength(digits.to_string())),
  }
}

/// The text between `name(` and `)`, if `text` is a call of that notation
fn function_args(notation: Format, text: &str) -> Option<&str> {
  let name = notation.name();
  let head = text.get(..name.len())?;
  if !head.eq_ignore_ascii_case(name) {
    return None;
  }
  text[name.len()..].strip_prefix('(')?.strip_suffix(')')
}

fn split_channels<const N: usize>(
  notation: Format,
  text: &str,
) -> Result<[&str; N], ColorParseError> {
  let args = function_args(notation, text)
    .ok_or_else(|| ColorParseError::UnknownPrefix(text.to_string()))?;
  // At most one space may follow each comma
  let parts: Vec<&str> = args
    .split(',')
    .enumerate()
    .map(|(i, part)| match i {
      0 => part,
      _ => part.strip_prefix(' ').unwrap_or(part),
    })
    .collect();
  let found = parts.len();
  parts
    .try_into()
    .map_err(|_| ColorParseError::ChannelCount {
      notation,
      expected: N,
      found,
    })
}

fn int_channels<const N: usize>(
  notation: Format,
  text: &str,
) -> Result<[u8; N], ColorParseError> {
  let parts = split_channels::<N>(notation, text)?;
  let mut channels = [0; N];
  for (channel, part) in channels.iter_mut().zip(parts) {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
      return Err(ColorParseError::InvalidChannel(part.to_string()));
    }
    let value: u16 = part
      .parse()
      .map_err(|_| ColorParseError::InvalidChannel(part.to_string()))?;
    *channel = u8::try_from(value).map_err(|_| ColorParseError::OutOfRange(part.to_string()))?;
    if !is_int_channel(part) {
      return Err(ColorParseError::InvalidChannel(part.to_string()));
    }
  }
  Ok(channels)
}

fn float_channels<const N: usize>(
  notation: Format,
  text: &str,
) -> Result<[u8; N], ColorParseError> {
  let parts = split_channels::<N>(notation, text)?;
  let mut channels = [0; N];
  for (channel, part) in channels.iter_mut().zip(parts) {
    if !part.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
      return Err(ColorParseError::InvalidChannel(part.to_string()));
    }
    let value: f64 = part
      .parse()
      .map_err(|_| ColorParseError::InvalidChannel(part.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
      return Err(ColorParseError::OutOfRange(part.to_string()));
    }
    if !is_float_channel(part) {
      return Err(ColorParseError::InvalidChannel(part.to_string()));
    }
    *channel = denormalize_channel(value);
  }
  Ok(channels)
}
