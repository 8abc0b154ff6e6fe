#![deny(clippy::all)]

//! Find color literals in text and rewrite them into one notation.
//!
//! Recognized literals are `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! with channels 0-255, and `vec3(r, g, b)` / `vec4(r, g, b, a)` with
//! channels 0.0-1.0. Each literal is parsed into an RGBA [`Color`] and
//! rendered in the target [`Format`]:
//!
//! ```
//! use colorswap::{swap, Format};
//!
//! assert_eq!(swap("color: rgb(18, 52, 86);", Format::Hex), "color: #123456;");
//! ```

pub mod cli;
pub mod color;
pub mod format;
pub mod matcher;
pub mod parse;
pub mod stream;
pub mod swap;

pub use crate::color::Color;
pub use crate::format::{format_color, Format};
pub use crate::matcher::{find_colors, ColorMatch};
pub use crate::parse::{parse_color, parse_notation, ColorParseError};
pub use crate::stream::{convert_stream, convert_stream_parallel, StreamStats};
pub use crate::swap::{swap, swap_bytes};
