use std::io::Cursor;

use super::*;

fn encode_png(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let bmp = decode_bitmap(&encode_png(img)).unwrap();
    assert_eq!(bmp.width(), 1);
    assert_eq!(bmp.height(), 1);
    assert_eq!(
        bmp.pixels(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_keeps_non_square_dimensions() {
    let img = image::RgbaImage::from_pixel(7, 3, image::Rgba([1, 2, 3, 255]));
    let bmp = decode_bitmap(&encode_png(img)).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (7, 3));
    assert_eq!(bmp.pixels().len(), 7 * 3 * 4);
}

#[test]
fn corrupt_bytes_are_decode_errors() {
    let err = decode_bitmap(b"definitely not an image").unwrap_err();
    assert!(matches!(err, ShotError::Decode(_)));
    assert!(matches!(decode_bitmap(&[]), Err(ShotError::Decode(_))));
}

#[test]
fn from_rgba8_validates_length_and_area() {
    assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::from_rgba8(0, 2, vec![]).is_err());
    let bmp = Bitmap::from_rgba8(1, 1, vec![255, 255, 255, 0]).unwrap();
    assert_eq!(bmp.pixels(), &[0, 0, 0, 0]);
}

#[test]
fn clones_share_read_only_pixels() {
    let bmp = Bitmap::from_rgba8(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 255]).unwrap();
    let copy = bmp.clone();
    assert!(std::ptr::eq(bmp.pixels(), copy.pixels()));
    assert_eq!((copy.width(), copy.height()), (2, 1));
}
