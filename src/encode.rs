use alloc::string::{String, ToString};

use crate::profile::MAX_VALUE_LEN;
use crate::value::{Tag, TlvMap, TlvValue};
use crate::{ErrorCode, PixError};

fn push_two_digits(buf: &mut String, n: u8) {
    debug_assert!(n <= 99);
    buf.push(char::from(b'0' + n / 10));
    buf.push(char::from(b'0' + n % 10));
}

/// Streaming encoder that writes EMV `TT LL V` fields into a `String`.
///
/// Templates passed to [`Encoder::map`] are emitted in ascending tag order.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: String,
}

impl Encoder {
    /// Create a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Create an encoder with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Return the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the text emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume and return the encoded text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Emit one field with already-rendered content.
    ///
    /// # Errors
    ///
    /// Returns `ValueTooLong` if `content` is longer than 99 bytes.
    pub fn field(&mut self, tag: Tag, content: &str) -> Result<(), PixError> {
        let len = u8::try_from(content.len())
            .ok()
            .filter(|&n| usize::from(n) <= MAX_VALUE_LEN)
            .ok_or(PixError::encode(ErrorCode::ValueTooLong, MAX_VALUE_LEN))?;

        log::trace!("field {tag} len {len}");
        self.buf.reserve(4 + content.len());
        push_two_digits(&mut self.buf, tag.get());
        push_two_digits(&mut self.buf, len);
        self.buf.push_str(content);
        Ok(())
    }

    /// Emit one field, rendering decimals and serializing nested templates.
    ///
    /// # Errors
    ///
    /// Returns `ValueTooLong` if the content of this field or of any nested field exceeds 99 bytes.
    pub fn value(&mut self, tag: Tag, value: &TlvValue) -> Result<(), PixError> {
        match value {
            TlvValue::Text(s) => self.field(tag, s),
            TlvValue::Decimal(amount) => self.field(tag, &amount.to_string()),
            TlvValue::Branch(map) => {
                let nested = encode_map(map)?;
                self.field(tag, &nested)
            }
        }
    }

    /// Emit every field of a template in ascending tag order.
    ///
    /// # Errors
    ///
    /// Returns `ValueTooLong` if any field content exceeds 99 bytes.
    pub fn map(&mut self, map: &TlvMap) -> Result<(), PixError> {
        for (tag, value) in map.sorted() {
            self.value(tag, value)?;
        }
        Ok(())
    }
}

/// Serialize a template to its EMV text form.
///
/// An empty template serializes to the empty string.
///
/// # Errors
///
/// Returns `ValueTooLong` if any field content exceeds 99 bytes.
pub fn encode_map(map: &TlvMap) -> Result<String, PixError> {
    let mut enc = Encoder::new();
    enc.map(map)?;
    Ok(enc.into_string())
}
