//! Logical line reading with per-stream line-ending detection.

use std::io::{self, BufRead};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Line terminator convention of a stream.
///
/// Decided by the first terminator seen and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Unset,
    Cr,
    Lf,
    CrLf,
}

/// Yields lines with their terminator stripped.
///
/// Once the ending is locked, only that terminator splits lines; any other
/// `\r` or `\n` stays in the line as content.
pub struct LineReader<R> {
    reader: R,
    ending: LineEnding,
    started: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            ending: LineEnding::Unset,
            started: false,
        }
    }

    /// The convention locked so far.
    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Read the next logical line, or `None` once the stream is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if !self.started {
            self.started = true;
            self.skip_bom()?;
        }
        if self.peek()?.is_none() {
            return Ok(None);
        }

        let mut line = Vec::new();
        while let Some(b) = self.next_byte()? {
            match (self.ending, b) {
                (LineEnding::Cr, b'\r') | (LineEnding::Lf, b'\n') => break,
                (LineEnding::CrLf, b'\r') => {
                    if self.peek()? == Some(b'\n') {
                        self.reader.consume(1);
                        break;
                    }
                }
                (LineEnding::Unset, b'\r') => match self.peek()? {
                    Some(b'\n') => {
                        self.ending = LineEnding::CrLf;
                        self.reader.consume(1);
                        break;
                    }
                    Some(b'\r') => {
                        self.ending = LineEnding::Cr;
                        break;
                    }
                    // a lone \r before anything else is plain content
                    _ => {}
                },
                (LineEnding::Unset, b'\n') => {
                    self.ending = LineEnding::Lf;
                    break;
                }
                _ => {}
            }
            line.push(b);
        }

        // bytes that are not UTF-8 become U+FFFD
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn skip_bom(&mut self) -> io::Result<()> {
        if self.reader.fill_buf()?.starts_with(UTF8_BOM) {
            self.reader.consume(UTF8_BOM.len());
        }
        Ok(())
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.reader.consume(1);
        }
        Ok(b)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
