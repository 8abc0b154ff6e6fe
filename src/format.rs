use crate::color::{normalize_color, Color};
use std::fmt;

/// A textual color notation, used both as the output target of a run and as
/// the shape a matched literal was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
  /// `#rrggbb`, or `#rgb` on input
  Hex,
  /// `rgb(r,g,b)` with integer channels
  Rgb,
  /// `rgba(r,g,b,a)` with integer channels
  Rgba,
  /// `vec3(r,g,b)` with normalized float channels
  Vec3,
  /// `vec4(r,g,b,a)` with normalized float channels
  Vec4,
}

impl Format {
  pub const ALL: [Format; 5] = [
    Format::Hex,
    Format::Rgb,
    Format::Rgba,
    Format::Vec3,
    Format::Vec4,
  ];

  /// Lowercase name, as used on the command line
  pub fn name(self) -> &'static str {
    match self {
      Format::Hex => "hex",
      Format::Rgb => "rgb",
      Format::Rgba => "rgba",
      Format::Vec3 => "vec3",
      Format::Vec4 => "vec4",
    }
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Render a color in the given notation
///
/// Hex, rgb and vec3 drop the alpha channel. Float notations print six digits
/// after the decimal point.
pub fn format_color(color: Color, format: Format) -> String {
  let [r, g, b, a] = color.0;
  match format {
    Format::Hex => format!("#{r:02x}{g:02x}{b:02x}"),
    Format::Rgb => format!("rgb({r},{g},{b})"),
    Format::Rgba => format!("rgba({r},{g},{b},{a})"),
    Format::Vec3 => {
      let [r, g, b, _] = normalize_color(color);
      format!("vec3({r:.6},{g:.6},{b:.6})")
    }
    Format::Vec4 => {
      let [r, g, b, a] = normalize_color(color);
      format!("vec4({r:.6},{g:.6},{b:.6},{a:.6})")
    }
  }
}
