use std::io::Cursor;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_native_color_type() {
    let img = image::GrayImage::from_pixel(3, 2, image::Luma([77]));
    let decoded = decode_image(&png_bytes(image::DynamicImage::ImageLuma8(img))).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (3, 2));
    assert_eq!(ColorModel::from(decoded.color()), ColorModel::L8);
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, MaskError::Decode(_)));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_image("target/decode_unit/does-not-exist.png").unwrap_err();
    assert!(matches!(err, MaskError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.png"));
}

#[test]
fn load_corrupt_file_is_decode_error_naming_path() {
    let dir = std::path::PathBuf::from("target").join("decode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("corrupt.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nbroken").unwrap();

    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, MaskError::Decode(_)));
    assert!(err.to_string().contains("corrupt.png"));
}
