//! Numeric series loader with zero-allocation float parsing.
//!
//! Accepts numbers separated by whitespace, commas or semicolons. A `#`
//! comments out the rest of its line.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseSeriesError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadFloat(String),
    NonFinite(String),
    Empty,
}

impl Display for ParseSeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadFloat(text) => {
                write!(f, "line {}: invalid number '{}'", self.line, text)
            }
            ParseErrorKind::NonFinite(text) => {
                write!(f, "line {}: '{}' is not a finite number", self.line, text)
            }
            ParseErrorKind::Empty => write!(f, "input contains no numbers"),
        }
    }
}
impl Error for ParseSeriesError {}

// --- Helpers ---
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b',' || b == b';'
}

/// Rewrite U+2212 (`−`) to an ASCII hyphen in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseSeriesError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseSeriesError {
        line,
        kind: ParseErrorKind::BadFloat(text()),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseSeriesError {
            line,
            kind: ParseErrorKind::NonFinite(text()),
        })
    }
}

// --- Ingest ---
const BUF_CAP: usize = 64 * 1024;

pub fn read_series<R: Read>(src: R) -> Result<Vec<f64>, ParseSeriesError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = Vec::<f64>::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseSeriesError {
            line: line_no + 1,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if let Some(hash) = buf.iter().position(|&b| b == b'#') {
            buf.truncate(hash);
        }
        normalize_unicode_minus(&mut buf);

        for token in buf.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
            series.push(parse_f64(token, line_no)?);
        }
    }

    if series.is_empty() {
        return Err(ParseSeriesError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(series)
}

pub fn read_series_from_path(path: &str) -> Result<Vec<f64>, ParseSeriesError> {
    if path == "-" {
        read_series(std::io::stdin())
    } else {
        use std::fs::File;
        read_series(File::open(path).map_err(|e| ParseSeriesError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_minus_becomes_hyphen() {
        let mut buf = "−4.5 3".as_bytes().to_vec();
        normalize_unicode_minus(&mut buf);
        assert_eq!(buf, b"-4.5 3");
    }

    #[test]
    fn mixed_separators_and_comments() {
        let input = "# header\n1, 2.5;3\n  -4 # trailing\n\n5e1\n";
        let series = read_series(input.as_bytes()).unwrap();
        assert_eq!(series, vec![1.0, 2.5, 3.0, -4.0, 50.0]);
    }

    #[test]
    fn bad_token_reports_its_line() {
        let err = read_series("1 2\n3 x4\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat(ref t) if t == "x4"));
    }

    #[test]
    fn comment_only_input_is_empty() {
        let err = read_series("# nothing\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }
}
