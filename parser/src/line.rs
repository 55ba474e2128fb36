use std::fmt;

use serde::Serialize;

use crate::{
    error::{ParseError, Result},
    fields::lenient_decimal,
    tokenizer::{CRLF, SP, take_until, text},
};

const HEADER_SEPARATOR: &[u8] = b": ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLine {
    pub method: String,
    pub url: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub version: String,
    /// Codes past `u16::MAX` saturate; real status codes are three digits.
    pub status_code: u16,
    pub phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.method, self.url, self.version)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.version, self.status_code, self.phrase)
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}\r\n", self.name, self.value)
    }
}

/// Isolates the first `\r\n`-terminated line of `input`.
///
/// Returns the line without its terminator and the number of bytes consumed,
/// terminator included.
fn first_line(input: &[u8]) -> Result<(&[u8], usize)> {
    let taken = take_until(input, CRLF)?;
    Ok((taken.prefix, taken.consumed()))
}

/// Parses `METHOD SP URL SP VERSION CRLF` at the start of `line`.
///
/// `line` may carry more bytes after the request line; the returned length
/// points right after its `\r\n`.
///
/// # Errors
///
/// [`ParseError::InvalidRequestLine`] when a delimiter is missing or a field is empty.
pub fn parse_request_line(line: &[u8]) -> Result<(RequestLine, usize)> {
    let invalid = |field: &str, err: ParseError| {
        ParseError::InvalidRequestLine(format!("missing {field}: {err}"))
    };

    let (content, consumed) = first_line(line).map_err(|e| invalid("line terminator", e))?;

    let method = take_until(content, SP).map_err(|e| invalid("method", e))?;
    let url = take_until(method.rest, SP).map_err(|e| invalid("url", e))?;

    for (field, value) in [("method", method.prefix), ("url", url.prefix), ("version", url.rest)] {
        if value.is_empty() {
            return Err(ParseError::InvalidRequestLine(format!("empty {field}")));
        }
    }

    Ok((
        RequestLine {
            method: text(method.prefix),
            url: text(url.prefix),
            version: text(url.rest),
        },
        consumed,
    ))
}

/// Parses `VERSION SP STATUS SP PHRASE CRLF` at the start of `line`.
///
/// A status code that is not numeric decodes to 0 instead of failing, and one
/// too large for `u16` saturates at 65535.
///
/// # Errors
///
/// [`ParseError::InvalidStatusLine`] when any of the three delimiters is missing.
pub fn parse_status_line(line: &[u8]) -> Result<(StatusLine, usize)> {
    let invalid = |field: &str, err: ParseError| {
        ParseError::InvalidStatusLine(format!("missing {field}: {err}"))
    };

    let (content, consumed) = first_line(line).map_err(|e| invalid("line terminator", e))?;

    let version = take_until(content, SP).map_err(|e| invalid("version", e))?;
    let status_code = take_until(version.rest, SP).map_err(|e| invalid("status code", e))?;

    Ok((
        StatusLine {
            version: text(version.prefix),
            status_code: lenient_decimal(status_code.prefix),
            phrase: text(status_code.rest),
        },
        consumed,
    ))
}

/// Parses `NAME ": " VALUE CRLF` at the start of `line`.
///
/// The blank line ending a head is not a header line and is rejected here;
/// callers stop their header loop before reaching it.
///
/// # Errors
///
/// [`ParseError::InvalidHeaderLine`] when the line has no `": "` or no terminator.
pub fn parse_header_line(line: &[u8]) -> Result<(HeaderField, usize)> {
    let invalid = |field: &str, err: ParseError| {
        ParseError::InvalidHeaderLine(format!("missing {field}: {err}"))
    };

    let (content, consumed) = first_line(line).map_err(|e| invalid("line terminator", e))?;
    let name = take_until(content, HEADER_SEPARATOR).map_err(|e| invalid("name", e))?;

    Ok((
        HeaderField {
            name: text(name.prefix),
            value: text(name.rest),
        },
        consumed,
    ))
}
