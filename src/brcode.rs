use alloc::string::String;
use core::fmt;

use crate::crc::{crc16_ccitt_false, Crc16};
use crate::profile::{CHECKSUM_LEN, CHECKSUM_PREFIX};
use crate::{ErrorCode, PixError};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn push_hex16(buf: &mut String, v: u16) {
    for shift in [12u32, 8, 4, 0] {
        let nibble = usize::from((v >> shift) & 0xF);
        buf.push(char::from(HEX_UPPER[nibble]));
    }
}

fn parse_hex16(digits: &[u8]) -> Option<u16> {
    digits.iter().try_fold(0u16, |acc, &d| {
        let nibble = match d {
            b'0'..=b'9' => d - b'0',
            b'A'..=b'F' => d - b'A' + 10,
            _ => return None,
        };
        Some((acc << 4) | u16::from(nibble))
    })
}

/// A finalized BR Code payload: serialized fields followed by the `6304` checksum field.
///
/// The payload is guaranteed to end in four uppercase hex digits holding the CRC-16/CCITT-FALSE of
/// every preceding byte. It can be handed to a QR renderer or shown as "Pix copia e cola" text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrCode {
    payload: String,
}

impl BrCode {
    /// Append the checksum field to a serialized body.
    ///
    /// `body` must not already contain the `6304` prefix.
    #[must_use]
    pub fn finalize(body: String) -> Self {
        let mut payload = body;
        payload.reserve(CHECKSUM_PREFIX.len() + CHECKSUM_LEN);
        payload.push_str(CHECKSUM_PREFIX);
        let crc = crc16_ccitt_false(payload.as_bytes());
        push_hex16(&mut payload, crc);
        Self { payload }
    }

    /// Borrow the payload text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.payload
    }

    /// Consume and return the payload text.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.payload
    }

    /// Length in bytes of the payload.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns `true` iff the payload is empty (this never happens for a finalized code).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The serialized fields preceding the checksum field.
    #[must_use]
    pub fn body(&self) -> &str {
        let end = self.payload.len() - CHECKSUM_PREFIX.len() - CHECKSUM_LEN;
        &self.payload[..end]
    }

    /// The checksum carried in the trailing field.
    #[must_use]
    pub fn checksum(&self) -> u16 {
        let digits = &self.payload.as_bytes()[self.payload.len() - CHECKSUM_LEN..];
        parse_hex16(digits).unwrap_or_default()
    }

    /// Compute the SHA-256 digest of the payload.
    #[cfg(feature = "sha2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut h = Sha256::new();
        h.update(self.payload.as_bytes());
        let out = h.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(out.as_slice());
        digest
    }
}

impl AsRef<str> for BrCode {
    fn as_ref(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for BrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

impl From<BrCode> for String {
    fn from(code: BrCode) -> Self {
        code.payload
    }
}

/// Check that `payload` ends in a `6304` checksum field whose value matches the preceding bytes.
///
/// This inspects only the trailing checksum; it does not decode the fields.
///
/// # Errors
///
/// Returns `MissingChecksum` if the payload does not end in `6304` followed by four uppercase hex
/// digits, or `ChecksumMismatch` if the digits do not match.
pub fn verify_checksum(payload: &str) -> Result<(), PixError> {
    let bytes = payload.as_bytes();
    let trailer = CHECKSUM_PREFIX.len() + CHECKSUM_LEN;
    if bytes.len() < trailer {
        return Err(PixError::encode(ErrorCode::MissingChecksum, 0));
    }

    let (covered, digits) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if !covered.ends_with(CHECKSUM_PREFIX.as_bytes()) {
        return Err(PixError::encode(ErrorCode::MissingChecksum, 0));
    }
    let declared =
        parse_hex16(digits).ok_or(PixError::encode(ErrorCode::MissingChecksum, 0))?;

    let mut h = Crc16::new();
    h.update(covered);
    if h.finish() != declared {
        return Err(PixError::encode(ErrorCode::ChecksumMismatch, 0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_upper_and_padded() {
        let mut s = String::new();
        push_hex16(&mut s, 0x0A1F);
        assert_eq!(s, "0A1F");
        assert_eq!(parse_hex16(b"0A1F"), Some(0x0A1F));
        assert_eq!(parse_hex16(b"0a1f"), None);
    }

    #[test]
    fn finalize_appends_checksum_field() {
        let code = BrCode::finalize(String::from("000201"));
        assert!(code.as_str().starts_with("0002016304"));
        assert_eq!(code.len(), 14);
        assert_eq!(code.body(), "000201");
        assert_eq!(
            code.checksum(),
            crc16_ccitt_false(b"0002016304")
        );
        assert!(verify_checksum(code.as_str()).is_ok());
    }

    #[test]
    fn verify_rejects_tampering() {
        let code = BrCode::finalize(String::from("000201"));
        let tampered = code.as_str().replacen("01", "02", 1);
        let err = verify_checksum(&tampered).unwrap_err();
        assert_eq!(err.code, ErrorCode::ChecksumMismatch);
    }

    #[test]
    fn verify_requires_trailer() {
        assert_eq!(
            verify_checksum("6304").unwrap_err().code,
            ErrorCode::MissingChecksum
        );
        assert_eq!(
            verify_checksum("0002016305ABCD").unwrap_err().code,
            ErrorCode::MissingChecksum
        );
    }
}
