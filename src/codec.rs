use crate::brcode::BrCode;
use crate::encode::Encoder;
use crate::limits::EncodeOptions;
use crate::request::EncodingRequest;
use crate::tree::build_with;
use crate::validate::validate_with_limits;
use crate::PixError;

// Fixed literals plus the 25/15 caps keep typical payloads under this size.
const TYPICAL_PAYLOAD_LEN: usize = 192;

/// Encode a request into a finalized BR Code using the standard limits.
///
/// # Errors
///
/// Returns a validation error for the first violated field constraint, or `ValueTooLong` if the key,
/// description or transaction id does not fit its field.
pub fn encode(request: &EncodingRequest) -> Result<BrCode, PixError> {
    encode_with(request, &EncodeOptions::default())
}

/// Encode a request into a finalized BR Code with explicit options.
///
/// # Errors
///
/// Returns a validation error for the first violated field constraint, or `ValueTooLong` if the key,
/// description or transaction id does not fit its field.
pub fn encode_with(request: &EncodingRequest, options: &EncodeOptions) -> Result<BrCode, PixError> {
    if let Err(err) = validate_with_limits(request, &options.limits) {
        log::debug!("rejected pix request: {err}");
        return Err(err);
    }

    let root = build_with(request, options.description);
    let mut enc = Encoder::with_capacity(TYPICAL_PAYLOAD_LEN);
    if let Err(err) = enc.map(&root) {
        log::debug!("pix request does not fit BR Code fields: {err}");
        return Err(err);
    }

    let code = BrCode::finalize(enc.into_string());
    log::debug!(
        "encoded BR Code: {} bytes, checksum {:04X}",
        code.len(),
        code.checksum()
    );
    Ok(code)
}
