//! HTTP/1.x Message Head Parser
//!
//! This crate splits a raw HTTP/1.x message buffer into its head and body and
//! decomposes the head into typed fields: the request or status line, the
//! header lines, and the few header values a proxy acts on (`Host`,
//! `Content-Length`, `Cache-Control`, `Transfer-Encoding`).
//!
//! Every operation is a pure function over a byte slice. Scans are bounded by
//! the slice length, so buffers carrying binary body data are safe to pass in.
//! Reading from sockets, reassembling partial messages and decoding chunked
//! bodies are left to the caller.
//!
//! # Examples
//!
//! ```
//! use http_head::{HttpHead, parse_request_head, parse_response_head, split_head_body};
//!
//! let raw = b"GET /index.html HTTP/1.1\r\nHost: example.com:8080\r\nAccept: */*\r\n\r\n";
//!
//! let split = split_head_body(raw).unwrap();
//! assert_eq!(split.head, b"GET /index.html HTTP/1.1\r\nHost: example.com:8080\r\nAccept: */*\r\n");
//! assert!(split.body.is_empty());
//!
//! let request = parse_request_head(&split.head).unwrap();
//! assert_eq!(request.request_line.method, "GET");
//! assert_eq!(request.request_line.url, "/index.html");
//!
//! let host = request.host_field().unwrap();
//! assert_eq!(host.hostname, "example.com");
//! assert_eq!(host.port, Some(8080));
//!
//! let raw = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nCache-Control: public, max-age=3600\r\n\r\nhello";
//!
//! let split = split_head_body(raw).unwrap();
//! let response = parse_response_head(&split.head).unwrap();
//! assert_eq!(response.status_line.status_code, 200);
//! assert_eq!(response.content_length, Some(5));
//! assert_eq!(response.cache_directives().unwrap().max_age, Some(3600));
//! assert_eq!(split.body, b"hello");
//!
//! // Header lookups ignore case.
//! assert!(response.get_first_header("content-length").is_some());
//! ```
//!
//! A buffer without its blank line yet is reported as incomplete, not invalid:
//!
//! ```
//! use http_head::split_head_body;
//!
//! let err = split_head_body(b"GET / HTTP/1.1\r\nHost: exa").unwrap_err();
//! assert!(err.is_incomplete());
//! ```

mod config;
mod error;
mod fields;
mod head;
mod line;
mod message;
mod split;
mod tokenizer;


pub use config::{MalformedHeaderPolicy, NameMatching, ParserConfig};
pub use error::{ConfigError, ParseError, Result};
pub use fields::{
    CacheControlDirectives, HostField, lenient_decimal, parse_cache_control, parse_host_field,
};
pub use head::{
    BodyStatus, HeadParser, HeaderLines, MessageKind, ParsedRequestHead, ParsedResponseHead,
    parse_request_head, parse_response_head,
};
pub use line::{
    HeaderField, RequestLine, StatusLine, parse_header_line, parse_request_line,
    parse_status_line,
};
pub use message::HttpHead;
pub use split::{HeadBodySplit, split_head_body};
pub use tokenizer::{Taken, take_until};
