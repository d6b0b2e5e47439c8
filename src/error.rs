use core::fmt;

/// The high-level class of an error.
///
/// The crate distinguishes:
/// - **Validate** errors: the request violates a field constraint and must be corrected by the caller.
/// - **Encode** errors: a TLV tree or payload cannot be represented in the EMV QR format.
/// - **Render** errors: a payload could not be rendered as a QR code image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixErrorKind {
    /// Request validation failure.
    Validate,
    /// TLV encoding or checksum failure.
    Encode,
    /// QR image rendering failure.
    Render,
}

/// A structured error code identifying the reason a request or payload was rejected.
///
/// This enum is string-free to support `no_std`; [`PixError`]'s `Display` supplies the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The Pix key is empty.
    KeyEmpty,
    /// The receiver name is empty.
    NameEmpty,
    /// The receiver city is empty.
    CityEmpty,
    /// The receiver name has more code points than allowed.
    NameTooLong,
    /// The receiver city has more code points than allowed.
    CityTooLong,
    /// The amount is NaN or infinite.
    AmountNotFinite,

    /// A tag outside `0..=99` was used.
    InvalidTag,
    /// The same tag appears twice within one template.
    DuplicateTag,
    /// A field value does not fit the two-digit length prefix.
    ValueTooLong,
    /// The payload does not end in a `6304` checksum field.
    MissingChecksum,
    /// The trailing checksum does not match the payload.
    ChecksumMismatch,

    /// The content exceeds the capacity of the largest QR symbol.
    QrDataTooLong,
    /// The QR encoder rejected the content.
    QrEncodingFailed,
    /// The rendered QR code could not be encoded as an image.
    ImageEncodingFailed,
}

/// A Pix error with structured classification, a stable code, and the bound that was violated.
///
/// `limit` is meaningful for `NameTooLong`, `CityTooLong` and `ValueTooLong`; it is `0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixError {
    /// The error kind.
    pub kind: PixErrorKind,
    /// The error code.
    pub code: ErrorCode,
    /// Length bound associated with the error (0 when not applicable).
    pub limit: usize,
}

impl PixError {
    /// Construct a validation error.
    #[inline]
    #[must_use]
    pub const fn validate(code: ErrorCode, limit: usize) -> Self {
        Self {
            kind: PixErrorKind::Validate,
            code,
            limit,
        }
    }

    /// Construct an encoding error.
    #[inline]
    #[must_use]
    pub const fn encode(code: ErrorCode, limit: usize) -> Self {
        Self {
            kind: PixErrorKind::Encode,
            code,
            limit,
        }
    }

    /// Construct a rendering error.
    #[inline]
    #[must_use]
    pub const fn render(code: ErrorCode) -> Self {
        Self {
            kind: PixErrorKind::Render,
            code,
            limit: 0,
        }
    }

    /// Returns true iff this error is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(self.kind, PixErrorKind::Validate)
    }
}

// Validation messages are part of the public contract and must not change.
// "at least" in the length messages is historical: the checks enforce a maximum.
impl fmt::Display for PixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ErrorCode::KeyEmpty => f.write_str("key must not be empty"),
            ErrorCode::NameEmpty => f.write_str("name must not be empty"),
            ErrorCode::CityEmpty => f.write_str("city must not be empty"),
            ErrorCode::NameTooLong => {
                write!(f, "name must be at least {} characters long", self.limit)
            }
            ErrorCode::CityTooLong => {
                write!(f, "city must be at least {} characters long", self.limit)
            }
            ErrorCode::AmountNotFinite => f.write_str("amount must be a finite number"),

            ErrorCode::InvalidTag => f.write_str("tag must be in range 0..=99"),
            ErrorCode::DuplicateTag => f.write_str("duplicate tag in template"),
            ErrorCode::ValueTooLong => {
                write!(f, "field value must not exceed {} bytes", self.limit)
            }
            ErrorCode::MissingChecksum => f.write_str("payload does not end in a checksum field"),
            ErrorCode::ChecksumMismatch => f.write_str("checksum does not match payload"),

            ErrorCode::QrDataTooLong => f.write_str("content too long for a QR code"),
            ErrorCode::QrEncodingFailed => f.write_str("QR encoding failed"),
            ErrorCode::ImageEncodingFailed => f.write_str("QR image encoding failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PixError {}
