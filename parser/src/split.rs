use std::ops::Range;

use memchr::memmem;

use crate::{
    error::{ParseError, Result},
    tokenizer::CRLF,
};

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// A message buffer cut at its blank line.
///
/// `head` keeps the `\r\n` of its last line but not the blank line; `body` is
/// whatever followed the blank line in the buffer, possibly empty or only part
/// of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadBodySplit {
    pub head: Vec<u8>,
    pub body: Vec<u8>,
}

impl HeadBodySplit {
    /// Where `head` sat in the split buffer.
    #[must_use]
    pub fn head_range(&self) -> Range<usize> {
        0..self.head.len()
    }

    /// Where `body` sat in the split buffer.
    #[must_use]
    pub fn body_range(&self) -> Range<usize> {
        let start = self.head.len() + CRLF.len();
        start..start + self.body.len()
    }
}

/// Splits `buffer` into head and body at the first `\r\n\r\n`.
///
/// The slice length is the declared length of the received data; nothing past
/// it is read, and both outputs are copies.
///
/// # Errors
///
/// [`ParseError::Incomplete`] when the buffer holds no blank line yet.
pub fn split_head_body(buffer: &[u8]) -> Result<HeadBodySplit> {
    let position = memmem::find(buffer, HEAD_TERMINATOR).ok_or(ParseError::Incomplete)?;

    let head_end = position + CRLF.len();
    let body_start = position + HEAD_TERMINATOR.len();

    tracing::trace!(
        head_len = head_end,
        body_len = buffer.len() - body_start,
        "split message"
    );

    Ok(HeadBodySplit {
        head: buffer[..head_end].to_vec(),
        body: buffer[body_start..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_request_without_body() {
        let split = split_head_body(b"GET /x HTTP/1.1\r\nHost: a.com\r\n\r\n").unwrap();

        assert_eq!(split.head, b"GET /x HTTP/1.1\r\nHost: a.com\r\n");
        assert!(split.body.is_empty());
    }

    #[test]
    fn test_split_response_with_body() {
        let input = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
        let split = split_head_body(input).unwrap();

        assert_eq!(split.head, b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n");
        assert_eq!(split.body, b"hello");
        assert_eq!(&input[split.head_range()], split.head.as_slice());
        assert_eq!(&input[split.body_range()], split.body.as_slice());
    }

    #[test]
    fn test_split_keeps_binary_body() {
        let mut input = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
        input.extend_from_slice(&[0x00, 0xff, b'\r', b'\n', b'\r', b'\n', 0x00]);

        let split = split_head_body(&input).unwrap();

        assert_eq!(split.head, b"HTTP/1.1 200 OK\r\n");
        assert_eq!(split.body, [0x00, 0xff, b'\r', b'\n', b'\r', b'\n', 0x00]);
    }

    #[test]
    fn test_split_uses_first_blank_line() {
        let split = split_head_body(b"A\r\n\r\nB\r\n\r\nC").unwrap();

        assert_eq!(split.head, b"A\r\n");
        assert_eq!(split.body, b"B\r\n\r\nC");
    }

    #[test]
    fn test_missing_blank_line_is_incomplete() {
        let result = split_head_body(b"GET /x HTTP/1.1\r\nHost: a.com\r\n");

        assert_eq!(result, Err(ParseError::Incomplete));
        assert!(result.unwrap_err().is_incomplete());
    }

    #[test]
    fn test_terminator_beyond_declared_length_is_not_seen() {
        let buffer = b"GET / HTTP/1.1\r\n\r\n";
        let received = buffer.len() - 1;

        assert_eq!(
            split_head_body(&buffer[..received]),
            Err(ParseError::Incomplete)
        );
    }

    #[test]
    fn test_empty_buffer_is_incomplete() {
        assert_eq!(split_head_body(b""), Err(ParseError::Incomplete));
    }

    #[test]
    fn test_buffer_without_nul_terminator() {
        let buffer: [u8; 4] = *b"\r\n\r\n";
        let split = split_head_body(&buffer).unwrap();

        assert_eq!(split.head, b"\r\n");
        assert!(split.body.is_empty());
    }
}
