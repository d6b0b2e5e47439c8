//! # pix-brcode
//!
//! Deterministic encoding of Pix payment requests into **BR Code** payloads: the EMV QR Code
//! merchant-presented format as profiled by Banco Central do Brasil.
//!
//! ## Design principles
//!
//! - **One request, one payload.**
//!   Encoding is a pure function of the request: the same fields always produce the same bytes.
//! - **Validation is fail-fast.**
//!   [`validate`] reports only the first violated constraint, with a stable message.
//! - **Ordering is explicit.**
//!   Templates are kept in insertion order and sorted by tag when serialized.
//!
//! ## BR Code profile
//!
//! - Each field is `TT LL V`: two-digit tag, two-digit byte length, value.
//! - Templates (`26` merchant account, `62` additional data) nest fields recursively.
//! - Tags within a template are unique and emitted in ascending order.
//! - The payload ends with `6304` followed by the CRC-16/CCITT-FALSE of everything before the
//!   four checksum digits, in uppercase hex.
//!
//! ## Example
//!
//! ```rust
//! use pix_brcode::{encode, EncodingRequest};
//!
//! let request = EncodingRequest::new("jonnasfonini@gmail.com", "Jonnas Fonini", "Marau")
//!     .with_amount(20.67)
//!     .with_description("Invoice #4");
//!
//! let code = encode(&request).unwrap();
//! assert!(code.as_str().ends_with("6304CF13"));
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`PixError`].
//! - `sha2` *(default)*: enables SHA-256 hashing of finalized payloads.
//! - `serde`: derives `Serialize`/`Deserialize` for requests, limits and QR options.
//! - `qr`: renders payloads as PNG QR codes.
//!
//! ## `no_std`
//!
//! Without `std` (and `qr`), the crate is `no_std` and requires only `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod brcode;
mod codec;
mod crc;
mod encode;
mod error;
mod limits;
mod profile;
#[cfg(feature = "qr")]
mod qr;
mod request;
mod scalar;
mod tree;
mod validate;
mod value;

pub use crate::brcode::{verify_checksum, BrCode};
pub use crate::codec::{encode, encode_with};
pub use crate::crc::{crc16_ccitt_false, Crc16};
pub use crate::encode::{encode_map, Encoder};
pub use crate::error::{ErrorCode, PixError, PixErrorKind};
pub use crate::limits::{DescriptionMode, EncodeOptions, FieldLimits};
pub use crate::profile::{
    CHECKSUM_PREFIX, DEFAULT_TRANSACTION_ID, MAX_CITY_CHARS, MAX_NAME_CHARS, MAX_VALUE_LEN,
};
pub use crate::request::EncodingRequest;
pub use crate::scalar::Amount;
pub use crate::tree::{build, build_with};
pub use crate::validate::{validate, validate_with_limits};
pub use crate::value::{Tag, TlvMap, TlvValue};

#[cfg(feature = "qr")]
pub use crate::qr::{qr_code, QrCodeOptions, DEFAULT_QR_SIZE};
