use crate::format::Format;
use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(bin_name = "colorswap")]
#[command(
  about = "Rewrite color literals read from stdin into a single notation",
  long_about = "Reads text from stdin and rewrites every #rgb, #rrggbb, rgb(), rgba(), vec3() and \
                vec4() color literal into the selected notation. Everything else is copied through \
                unchanged."
)]
#[command(version)]
pub struct CliArg {
  #[command(flatten)]
  pub output: OutputFormat,

  #[arg(
    long,
    help = "Read all of stdin first and convert the lines on every core"
  )]
  pub parallel: bool,

  #[arg(
    long,
    short = 'v',
    help = "Log per-line conversion counts to stderr (RUST_LOG overrides)"
  )]
  pub verbose: bool,
}

/// The output notation; exactly one flag must be given
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct OutputFormat {
  #[arg(long, help = "Convert to #rrggbb")]
  pub hex: bool,

  #[arg(long, help = "Convert to rgb(r,g,b)")]
  pub rgb: bool,

  #[arg(long, help = "Convert to rgba(r,g,b,a)")]
  pub rgba: bool,

  #[arg(long, help = "Convert to vec3(r,g,b)")]
  pub vec3: bool,

  #[arg(long, help = "Convert to vec4(r,g,b,a)")]
  pub vec4: bool,
}

impl OutputFormat {
  /// The selected format, or `None` if no flag was set
  pub fn format(&self) -> Option<Format> {
    let selected = [self.hex, self.rgb, self.rgba, self.vec3, self.vec4];
    Format::ALL
      .into_iter()
      .zip(selected)
      .find_map(|(format, set)| set.then_some(format))
  }
}
