use memchr::memmem;

use crate::error::{ParseError, Result};

pub(crate) const CRLF: &[u8] = b"\r\n";
pub(crate) const SP: &[u8] = b" ";

/// Outcome of a successful [`take_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taken<'a> {
    /// Bytes strictly before the first delimiter occurrence.
    pub prefix: &'a [u8],
    /// Bytes right after the delimiter.
    pub rest: &'a [u8],
    consumed: usize,
}

impl Taken<'_> {
    /// Number of input bytes covered by the prefix and the delimiter.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

/// Splits `input` at the first occurrence of `delimiter`.
///
/// The scan is bounded by the slice length and accepts any byte values, so it
/// is safe to run over buffers that carry binary body data.
///
/// # Errors
///
/// [`ParseError::NoInput`] when `input` is empty, [`ParseError::NotFound`] when
/// the delimiter does not occur. No prefix is produced in either case.
pub fn take_until<'a>(input: &'a [u8], delimiter: &[u8]) -> Result<Taken<'a>> {
    if input.is_empty() {
        return Err(ParseError::NoInput);
    }

    let position = memmem::find(input, delimiter).ok_or_else(|| {
        ParseError::NotFound(String::from_utf8_lossy(delimiter).into_owned())
    })?;

    let consumed = position + delimiter.len();
    Ok(Taken {
        prefix: &input[..position],
        rest: &input[consumed..],
        consumed,
    })
}

/// Owned text copy of a field. Bytes that are not UTF-8 are replaced.
pub(crate) fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
