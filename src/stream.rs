use crate::format::Format;
use crate::swap::swap_bytes_counted;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::{BufRead, Write};

/// Totals for one run over an input stream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
  /// Lines read and written
  pub lines: usize,
  /// Color literals rewritten
  pub conversions: usize,
}

/// Convert a stream line by line, writing each line as soon as it is read
///
/// Every output line ends with `\n` and is flushed before the next input line
/// is read, so a buffered `writer` never holds output back while waiting on
/// input. A `\n` or `\r\n` ending on the input is dropped before conversion.
pub fn convert_stream<R: BufRead, W: Write>(
  mut reader: R,
  mut writer: W,
  format: Format,
) -> Result<StreamStats> {
  let mut stats = StreamStats::default();
  let mut buf = Vec::new();

  loop {
    buf.clear();
    let read = reader
      .read_until(b'\n', &mut buf)
      .context("Failed to read input line")?;
    if read == 0 {
      break;
    }

    let (swapped, conversions) = swap_bytes_counted(trim_line_ending(&buf), format);
    log::debug!("line {}: {} conversion(s)", stats.lines + 1, conversions);
    write_line(&mut writer, &swapped)?;
    writer.flush().context("Failed to flush output")?;

    stats.lines += 1;
    stats.conversions += conversions;
  }

  Ok(stats)
}

/// Convert a whole stream at once, spreading the lines over the rayon pool
///
/// Output is identical to [`convert_stream`], but nothing is written until
/// the input is exhausted.
pub fn convert_stream_parallel<R: BufRead, W: Write>(
  reader: R,
  mut writer: W,
  format: Format,
) -> Result<StreamStats> {
  let lines = reader
    .split(b'\n')
    .collect::<std::io::Result<Vec<Vec<u8>>>>()
    .context("Failed to read input")?;
  log::debug!("read {} line(s), converting in parallel", lines.len());

  let converted: Vec<_> = lines
    .par_iter()
    .map(|line| swap_bytes_counted(trim_line_ending(line), format))
    .collect();

  let mut stats = StreamStats::default();
  for (swapped, conversions) in &converted {
    write_line(&mut writer, swapped)?;
    stats.lines += 1;
    stats.conversions += conversions;
  }

  writer.flush().context("Failed to flush output")?;
  Ok(stats)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
  let line = line.strip_suffix(b"\n").unwrap_or(line);
  line.strip_suffix(b"\r").unwrap_or(line)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> Result<()> {
  writer
    .write_all(line)
    .and_then(|()| writer.write_all(b"\n"))
    .context("Failed to write output line")
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::cell::RefCell;
  use std::io::{self, BufReader, Cursor, Read};
  use std::rc::Rc;

  /// Hands out one line per read and records how much output had been flushed
  /// at that point
  struct LineFeed {
    lines: Vec<&'static [u8]>,
    flushed: Rc<RefCell<Vec<u8>>>,
    flushed_at_read: Vec<usize>,
  }

  impl Read for LineFeed {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.flushed_at_read.push(self.flushed.borrow().len());
      if self.lines.is_empty() {
        return Ok(0);
      }
      let line = self.lines.remove(0);
      buf[..line.len()].copy_from_slice(line);
      Ok(line.len())
    }
  }

  /// Holds writes back until flushed
  struct HeldWriter {
    pending: Vec<u8>,
    flushed: Rc<RefCell<Vec<u8>>>,
  }

  impl Write for HeldWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.pending.extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      self.flushed.borrow_mut().append(&mut self.pending);
      Ok(())
    }
  }

  const INPUT: &str = "body {\r\n  color: #123456;\n  background: rgb(18, 52, 86);\n}\n\nlast rgba(1,2,3,4)";
  const EXPECTED: &str =
    "body {\n  color: rgb(18,52,86);\n  background: rgb(18,52,86);\n}\n\nlast rgb(1,2,3)\n";

  #[test]
  fn streams_every_line() {
    let mut output = Vec::new();
    let stats = convert_stream(Cursor::new(INPUT), &mut output, Format::Rgb).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), EXPECTED);
    assert_eq!(
      stats,
      StreamStats {
        lines: 6,
        conversions: 3
      }
    );
  }

  #[test]
  fn each_line_is_flushed_before_the_next_read() {
    let flushed = Rc::new(RefCell::new(Vec::new()));
    let mut feed = LineFeed {
      lines: vec![&b"#fff\n"[..], &b"plain\n"[..]],
      flushed: Rc::clone(&flushed),
      flushed_at_read: Vec::new(),
    };
    let writer = HeldWriter {
      pending: Vec::new(),
      flushed: Rc::clone(&flushed),
    };

    convert_stream(BufReader::new(&mut feed), writer, Format::Rgb).unwrap();

    let first = "rgb(255,255,255)\n".len();
    assert_eq!(feed.flushed_at_read, vec![0, first, first + "plain\n".len()]);
    assert_eq!(
      String::from_utf8(flushed.borrow().clone()).unwrap(),
      "rgb(255,255,255)\nplain\n"
    );
  }

  #[test]
  fn parallel_matches_streaming() {
    let mut streamed = Vec::new();
    let mut parallel = Vec::new();
    let a = convert_stream(Cursor::new(INPUT), &mut streamed, Format::Vec4).unwrap();
    let b = convert_stream_parallel(Cursor::new(INPUT), &mut parallel, Format::Vec4).unwrap();
    assert_eq!(
      String::from_utf8(parallel).unwrap(),
      String::from_utf8(streamed).unwrap()
    );
    assert_eq!(a, b);
  }

  #[test]
  fn empty_input_writes_nothing() {
    let mut output = Vec::new();
    let stats = convert_stream(Cursor::new(""), &mut output, Format::Hex).unwrap();
    assert!(output.is_empty());
    assert_eq!(stats, StreamStats::default());

    let stats = convert_stream_parallel(Cursor::new(""), &mut output, Format::Hex).unwrap();
    assert!(output.is_empty());
    assert_eq!(stats, StreamStats::default());
  }

  #[test]
  fn invalid_utf8_passes_through() {
    let mut output = Vec::new();
    convert_stream(Cursor::new(&b"\xff #fff\n"[..]), &mut output, Format::Rgb).unwrap();
    assert_eq!(output, b"\xff rgb(255,255,255)\n");
  }
}
