//! BR Code profile of the EMV QR Code merchant-presented format.
//!
//! A payload is **well-formed for this crate** iff:
//!
//! - It is a concatenation of fields `TT LL V`, where `TT` is a two-digit tag in `00..=99`,
//!   `LL` is the two-digit byte length of `V`, and `V` is either text or a nested template.
//! - Within every template, tags are unique and appear in strictly ascending order.
//! - The last field is the checksum field: tag `63`, length `04`, and four uppercase hex digits
//!   holding the CRC-16/CCITT-FALSE of every preceding byte, including the `6304` prefix itself.
//!
//! The Pix arrangement nests the receiver key under merchant account template `26` (GUI
//! `BR.GOV.BCB.PIX`) and the transaction id under additional data template `62`.

use crate::value::Tag;

/// Largest value length expressible by the two-digit length prefix.
pub const MAX_VALUE_LEN: usize = 99;

/// Default maximum receiver name length, in Unicode code points.
pub const MAX_NAME_CHARS: usize = 25;

/// Default maximum receiver city length, in Unicode code points.
pub const MAX_CITY_CHARS: usize = 15;

/// Tag and length of the trailing checksum field.
pub const CHECKSUM_PREFIX: &str = "6304";

/// Number of hex digits in the checksum value.
pub(crate) const CHECKSUM_LEN: usize = 4;

pub(crate) const PAYLOAD_FORMAT_INDICATOR: Tag = Tag::from_const(0);
pub(crate) const MERCHANT_ACCOUNT: Tag = Tag::from_const(26);
pub(crate) const MERCHANT_CATEGORY_CODE: Tag = Tag::from_const(52);
pub(crate) const TRANSACTION_CURRENCY: Tag = Tag::from_const(53);
pub(crate) const TRANSACTION_AMOUNT: Tag = Tag::from_const(54);
pub(crate) const COUNTRY_CODE: Tag = Tag::from_const(58);
pub(crate) const MERCHANT_NAME: Tag = Tag::from_const(59);
pub(crate) const MERCHANT_CITY: Tag = Tag::from_const(60);
pub(crate) const ADDITIONAL_DATA: Tag = Tag::from_const(62);

// Merchant account template (26).
pub(crate) const ACCOUNT_GUI: Tag = Tag::from_const(0);
pub(crate) const ACCOUNT_KEY: Tag = Tag::from_const(1);
pub(crate) const ACCOUNT_DESCRIPTION: Tag = Tag::from_const(2);

// Additional data template (62).
pub(crate) const REFERENCE_LABEL: Tag = Tag::from_const(5);
pub(crate) const PAYMENT_SYSTEM: Tag = Tag::from_const(50);
pub(crate) const PAYMENT_SYSTEM_GUI: Tag = Tag::from_const(0);
pub(crate) const PAYMENT_SYSTEM_VERSION: Tag = Tag::from_const(1);

pub(crate) const FORMAT_VERSION: &str = "01";
pub(crate) const PIX_GUI: &str = "BR.GOV.BCB.PIX";
pub(crate) const CATEGORY_CODE_UNSPECIFIED: &str = "0000";
/// ISO 4217 numeric code for the Brazilian real.
pub(crate) const CURRENCY_BRL: &str = "986";
/// ISO 3166-1 alpha-2 code for Brazil.
pub(crate) const COUNTRY_BR: &str = "BR";
/// Transaction id used when the caller supplies none.
pub const DEFAULT_TRANSACTION_ID: &str = "***";
pub(crate) const BRCODE_GUI: &str = "BR.GOV.BCB.BRCODE";
pub(crate) const BRCODE_VERSION: &str = "1.0.0";
