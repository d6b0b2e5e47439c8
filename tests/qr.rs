#![cfg(feature = "qr")]

use pix_brcode::{encode, qr_code, EncodingRequest, ErrorCode, PixErrorKind, QrCodeOptions};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn payload() -> String {
    encode(
        &EncodingRequest::new("jonnasfonini@gmail.com", "Jonnas Fonini", "Marau")
            .with_amount(20.67)
            .with_description("Invoice #4"),
    )
    .unwrap()
    .into_string()
}

fn decode_png(png: &[u8]) -> String {
    let luma = image::load_from_memory(png).unwrap().to_luma8();
    let (w, h) = luma.dimensions();
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32)[0]
        });
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    grids[0].decode().unwrap().1
}

#[test]
fn zero_size_uses_default() {
    let png = qr_code(&QrCodeOptions::new(payload())).unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);

    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.width(), 256);
    assert_eq!(img.height(), 256);
}

#[test]
fn explicit_size_is_exact() {
    let options = QrCodeOptions {
        content: payload(),
        size: 512,
    };
    let img = image::load_from_memory(&qr_code(&options).unwrap()).unwrap();
    assert_eq!((img.width(), img.height()), (512, 512));
}

#[test]
fn size_below_one_pixel_per_module_grows_to_fit() {
    let options = QrCodeOptions {
        content: payload(),
        size: 10,
    };
    let img = image::load_from_memory(&qr_code(&options).unwrap()).unwrap();
    assert_eq!(img.width(), img.height());
    assert!(img.width() > 10);
}

#[test]
fn rendered_symbol_decodes_to_content() {
    let content = payload();
    let png = qr_code(&QrCodeOptions::new(content.clone())).unwrap();
    assert_eq!(decode_png(&png), content);
}

#[test]
fn brcode_renders_itself() {
    let code = encode(&EncodingRequest::new("k", "n", "c")).unwrap();
    let png = code.to_qr_png(300).unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);
    assert_eq!(image::load_from_memory(&png).unwrap().width(), 300);
    assert_eq!(decode_png(&png), code.as_str());
}

#[test]
fn oversized_content_is_rejected() {
    let err = qr_code(&QrCodeOptions::new("x".repeat(5000))).unwrap_err();
    assert_eq!(err.kind, PixErrorKind::Render);
    assert_eq!(err.code, ErrorCode::QrDataTooLong);
}
