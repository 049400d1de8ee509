//! Byte filter dropping blanks at the start of unquoted CSV fields.
//!
//! `csv` only recognises a quote as the first byte of a field, so
//! `a, "b, c"` would split inside the quotes. Removing the blanks before the
//! parser runs lets such fields parse as quoted. Bytes inside quotes pass
//! through untouched.

use std::io::{self, Read};

/// Wraps a reader and drops spaces and tabs that open a field.
#[derive(Debug)]
pub(crate) struct TrimLeadingSpace<R> {
    inner: R,
    at_field_start: bool,
    in_quotes: bool,
    just_closed: bool,
}

impl<R: Read> TrimLeadingSpace<R> {
    pub(crate) const fn new(inner: R) -> Self {
        Self {
            inner,
            at_field_start: true,
            in_quotes: false,
            just_closed: false,
        }
    }

    fn keep(&mut self, byte: u8) -> bool {
        if self.in_quotes {
            if byte == b'"' {
                self.in_quotes = false;
                self.just_closed = true;
            }
            return true;
        }
        if self.at_field_start && matches!(byte, b' ' | b'\t') {
            return false;
        }
        // `""` inside a quoted field closes and immediately reopens it.
        self.in_quotes = byte == b'"' && (self.at_field_start || self.just_closed);
        self.just_closed = false;
        self.at_field_start = matches!(byte, b',' | b'\n' | b'\r');
        true
    }
}

impl<R: Read> Read for TrimLeadingSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            let read = self.inner.read(buf)?;
            if read == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for index in 0..read {
                let byte = buf[index];
                if self.keep(byte) {
                    buf[kept] = byte;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}
