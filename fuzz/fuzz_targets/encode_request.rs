#![no_main]

use libfuzzer_sys::fuzz_target;

use pix_brcode::{encode, verify_checksum, EncodingRequest};

// Fields are NUL-separated: key, name, city, description, transaction id.
fn request_from(data: &[u8]) -> EncodingRequest {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\0').map(str::to_owned);
    let mut req = EncodingRequest::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    );
    req.description = parts.next().unwrap_or_default();
    req.transaction_id = parts.next().unwrap_or_default();
    if let Some(&b) = data.first() {
        req.amount = Some(f64::from(b) / 4.0);
    }
    req
}

fuzz_target!(|data: &[u8]| {
    let req = request_from(data);
    if let Ok(code) = encode(&req) {
        // Every successful encode must carry a valid trailing checksum.
        verify_checksum(code.as_str()).expect("checksum");
        assert_eq!(encode(&req).expect("re-encode"), code);
    }
});
