use image::Rgba;

/// Alpha value of a fully opaque color
pub const OPAQUE: u8 = 255;

/// Multiplier to expand hex color shorthand (e.g., F -> FF)
pub const HEX_SHORTHAND_MULTIPLIER: u8 = 17;

/// Canonical RGBA color, 8 bits per channel
pub type Color = Rgba<u8>;

/// Normalized RGBA color with values 0.0-1.0
pub type NormalizedColor = [f64; 4];

/// Build an opaque color from its red, green and blue channels
pub fn opaque(r: u8, g: u8, b: u8) -> Color {
  Rgba([r, g, b, OPAQUE])
}

/// Convert a single channel (0-255) to its normalized value (0.0-1.0)
pub fn normalize_channel(channel: u8) -> f64 {
  channel as f64 / 255.0
}

/// Convert a normalized value (0.0-1.0) back to a channel (0-255)
///
/// Rounds to the nearest integer, with exact halves rounded away from zero.
pub fn denormalize_channel(value: f64) -> u8 {
  (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a Color to NormalizedColor
pub fn normalize_color(color: Color) -> NormalizedColor {
  color.0.map(normalize_channel)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use test_case::test_case;

  #[test_case(0.0, 0)]
  #[test_case(1.0, 255)]
  #[test_case(0.224, 57)]
  #[test_case(0.75, 191)]
  #[test_case(0.6, 153)]
  #[test_case(0.5, 128 ; "exact half rounds away from zero")]
  #[test_case(1.5, 255 ; "clamped above")]
  #[test_case(-0.5, 0 ; "clamped below")]
  fn denormalize_rounds_to_nearest(value: f64, expected: u8) {
    assert_eq!(denormalize_channel(value), expected);
  }

  #[test]
  fn every_channel_survives_normalization() {
    for channel in 0..=u8::MAX {
      assert_eq!(denormalize_channel(normalize_channel(channel)), channel);
    }
  }

  #[test]
  fn normalized_color_keeps_alpha() {
    let color = Rgba([0, 51, 255, 102]);
    assert_eq!(normalize_color(color), [0.0, 0.2, 1.0, 0.4]);
  }

  #[test]
  fn opaque_sets_full_alpha() {
    assert_eq!(opaque(1, 2, 3), Rgba([1, 2, 3, 255]));
  }
}
