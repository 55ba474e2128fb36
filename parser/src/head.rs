use std::fmt;

use serde::Serialize;

use crate::{
    config::{MalformedHeaderPolicy, ParserConfig},
    error::Result,
    fields::{
        CacheControlDirectives, HostField, lenient_decimal, parse_cache_control, parse_host_field,
    },
    line::{
        HeaderField, RequestLine, StatusLine, parse_header_line, parse_request_line,
        parse_status_line,
    },
    message::HttpHead,
    tokenizer::{CRLF, take_until},
};

const HOST: &str = "Host";
const CONTENT_LENGTH: &str = "Content-Length";
const CACHE_CONTROL: &str = "Cache-Control";
const TRANSFER_ENCODING: &str = "Transfer-Encoding";
const CHUNKED_TERMINATOR: &[u8] = b"0\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequestHead {
    pub request_line: RequestLine,
    pub host: Option<String>,
    pub headers: Vec<HeaderField>,
}

impl ParsedRequestHead {
    /// The captured `Host` value split into hostname and port.
    #[must_use]
    pub fn host_field(&self) -> Option<HostField> {
        self.host.as_deref().map(parse_host_field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResponseHead {
    pub status_line: StatusLine,
    pub content_length: Option<u64>,
    pub cache_control: Option<String>,
    /// Whether the last transfer coding is `chunked`. The body is not decoded.
    pub chunked: bool,
    pub headers: Vec<HeaderField>,
}

impl ParsedResponseHead {
    /// Directives of the captured `Cache-Control` value.
    #[must_use]
    pub fn cache_directives(&self) -> Option<CacheControlDirectives> {
        self.cache_control.as_deref().map(parse_cache_control)
    }

    /// Tells whether `body`, the bytes buffered after this head, hold the
    /// whole entity.
    ///
    /// `1xx`, `204` and `304` responses never carry a body. A chunked body is
    /// complete when the buffer ends with the last-chunk marker `0\r\n\r\n`;
    /// chunks are not decoded. Otherwise `Content-Length` frames the body and
    /// any bytes past it belong to the next message. Without either header
    /// the body runs until the connection closes.
    #[must_use]
    pub fn body_status(&self, body: &[u8]) -> BodyStatus {
        if matches!(self.status_line.status_code, 100..=199 | 204 | 304) {
            return BodyStatus::Complete { len: 0 };
        }

        if self.chunked {
            return if body.ends_with(CHUNKED_TERMINATOR) {
                BodyStatus::Complete { len: body.len() }
            } else {
                BodyStatus::Partial { remaining: None }
            };
        }

        let Some(length) = self.content_length else {
            return BodyStatus::Unknown;
        };

        match usize::try_from(length) {
            Ok(len) if len <= body.len() => BodyStatus::Complete { len },
            _ => {
                let buffered = u64::try_from(body.len()).unwrap_or(u64::MAX);
                BodyStatus::Partial {
                    remaining: Some(length.saturating_sub(buffered)),
                }
            }
        }
    }
}

/// How much of a response body a buffer holds, see
/// [`ParsedResponseHead::body_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BodyStatus {
    /// The first `len` body bytes are the whole entity.
    Complete { len: usize },
    /// More bytes are needed. `remaining` is `None` for chunked bodies.
    Partial { remaining: Option<u64> },
    /// Neither `Content-Length` nor chunked coding frames the body.
    Unknown,
}

impl BodyStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, BodyStatus::Complete { .. })
    }
}

impl HttpHead for ParsedRequestHead {
    fn headers(&self) -> &[HeaderField] {
        &self.headers
    }
}

impl HttpHead for ParsedResponseHead {
    fn headers(&self) -> &[HeaderField] {
        &self.headers
    }
}

impl fmt::Display for ParsedRequestHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.request_line)?;
        self.headers.iter().try_for_each(|header| write!(f, "{header}"))
    }
}

impl fmt::Display for ParsedResponseHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_line)?;
        self.headers.iter().try_for_each(|header| write!(f, "{header}"))
    }
}

/// Assembles parsed heads from head bytes under a [`ParserConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadParser {
    config: ParserConfig,
}

impl HeadParser {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses a request head: the request line, then every header line.
    ///
    /// # Errors
    ///
    /// Fails only when the request line is invalid; bad header lines are
    /// handled by the configured [`MalformedHeaderPolicy`].
    pub fn parse_request_head(&self, head: &[u8]) -> Result<ParsedRequestHead> {
        let (request_line, consumed) = parse_request_line(head)?;

        let mut host = None;
        let mut headers = Vec::new();

        for header in self.header_lines(&head[consumed..]) {
            if self.config.name_matching.matches(&header.name, HOST) {
                host = Some(header.value.clone());
            }
            headers.push(header);
        }

        tracing::debug!(
            method = %request_line.method,
            url = %request_line.url,
            host = ?host,
            headers = headers.len(),
            "parsed request head"
        );

        Ok(ParsedRequestHead {
            request_line,
            host,
            headers,
        })
    }

    /// Parses a response head: the status line, then every header line.
    ///
    /// # Errors
    ///
    /// Fails only when the status line is invalid.
    pub fn parse_response_head(&self, head: &[u8]) -> Result<ParsedResponseHead> {
        let (status_line, consumed) = parse_status_line(head)?;

        let matching = self.config.name_matching;
        let mut content_length = None;
        let mut cache_control = None;
        let mut chunked = false;
        let mut headers = Vec::new();

        for header in self.header_lines(&head[consumed..]) {
            if matching.matches(&header.name, CONTENT_LENGTH) {
                content_length = Some(lenient_decimal(header.value.as_bytes()));
            } else if matching.matches(&header.name, CACHE_CONTROL) {
                cache_control = Some(header.value.clone());
            } else if matching.matches(&header.name, TRANSFER_ENCODING) {
                chunked = is_chunked(&header.value);
            }
            headers.push(header);
        }

        tracing::debug!(
            status = status_line.status_code,
            content_length = ?content_length,
            chunked,
            headers = headers.len(),
            "parsed response head"
        );

        Ok(ParsedResponseHead {
            status_line,
            content_length,
            cache_control,
            chunked,
            headers,
        })
    }

    /// Iterates the header lines of `rest`, the head bytes after its first line.
    ///
    /// Iteration ends at the end of `rest` or at a blank line.
    #[must_use]
    pub fn header_lines<'a>(&self, rest: &'a [u8]) -> HeaderLines<'a> {
        HeaderLines {
            rest,
            policy: self.config.on_malformed_header,
        }
    }
}

/// Iterator over the header lines of a head, see [`HeadParser::header_lines`].
#[derive(Debug, Clone)]
pub struct HeaderLines<'a> {
    rest: &'a [u8],
    policy: MalformedHeaderPolicy,
}

impl Iterator for HeaderLines<'_> {
    type Item = HeaderField;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() || self.rest.starts_with(CRLF) {
                self.rest = &[];
                return None;
            }

            let err = match parse_header_line(self.rest) {
                Ok((header, consumed)) => {
                    self.rest = &self.rest[consumed..];
                    return Some(header);
                }
                Err(err) => err,
            };

            match self.policy {
                MalformedHeaderPolicy::Stop => {
                    tracing::warn!(
                        error = %err,
                        remaining = self.rest.len(),
                        "stopping at malformed header line"
                    );
                    self.rest = &[];
                    return None;
                }
                MalformedHeaderPolicy::SkipLine => match take_until(self.rest, CRLF) {
                    Ok(taken) => {
                        tracing::debug!(
                            error = %err,
                            skipped = taken.consumed(),
                            "skipping malformed header line"
                        );
                        self.rest = taken.rest;
                    }
                    Err(_) => {
                        tracing::warn!(
                            error = %err,
                            "unterminated malformed header line at end of head"
                        );
                        self.rest = &[];
                        return None;
                    }
                },
            }
        }
    }
}

fn is_chunked(transfer_encoding: &str) -> bool {
    transfer_encoding
        .rsplit(',')
        .next()
        .is_some_and(|coding| coding.trim().eq_ignore_ascii_case("chunked"))
}

/// Parses a request head with the default [`ParserConfig`].
///
/// # Errors
///
/// See [`HeadParser::parse_request_head`].
pub fn parse_request_head(head: &[u8]) -> Result<ParsedRequestHead> {
    HeadParser::default().parse_request_head(head)
}

/// Parses a response head with the default [`ParserConfig`].
///
/// # Errors
///
/// See [`HeadParser::parse_response_head`].
pub fn parse_response_head(head: &[u8]) -> Result<ParsedResponseHead> {
    HeadParser::default().parse_response_head(head)
}

/// Kind of message a buffer starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Request,
    Response,
}

impl MessageKind {
    /// Responses start with the protocol version; anything else is taken for a request.
    #[must_use]
    pub fn sniff(buffer: &[u8]) -> Self {
        if buffer.starts_with(b"HTTP/") {
            MessageKind::Response
        } else {
            MessageKind::Request
        }
    }
}
