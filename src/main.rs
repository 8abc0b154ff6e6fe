use anyhow::{Context, Result};
use clap::Parser;
use colorswap::cli::CliArg;
use colorswap::{convert_stream, convert_stream_parallel};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
  let cli_arg = CliArg::parse();
  init_logging(cli_arg.verbose);

  let format = cli_arg
    .output
    .format()
    .context("no output format selected")?;
  log::info!("converting color literals to {format}");

  let reader = io::stdin().lock();
  let writer = BufWriter::new(io::stdout().lock());
  let result = if cli_arg.parallel {
    convert_stream_parallel(reader, writer, format)
  } else {
    convert_stream(reader, writer, format)
  };

  match result {
    Ok(stats) => {
      log::info!(
        "{} line(s), {} color literal(s) converted",
        stats.lines,
        stats.conversions
      );
      Ok(())
    }
    // The reader went away (e.g. `| head`); nothing left to report
    Err(err) if is_broken_pipe(&err) => Ok(()),
    Err(err) => Err(err),
  }
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
    .init();
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
  err
    .chain()
    .filter_map(|cause| cause.downcast_ref::<io::Error>())
    .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
