use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    let mut dst = vec![10, 20, 30, 255];
    over_in_place(&mut dst, &[200, 100, 50, 255]).unwrap();
    assert_eq!(dst, vec![200, 100, 50, 255]);
}

#[test]
fn over_transparent_src_keeps_dst() {
    let mut dst = vec![10, 20, 30, 255];
    over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn over_half_black_darkens() {
    let out = over_px([200, 200, 200, 255], [0, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert!(out[0] < 110 && out[0] > 90);
}

#[test]
fn over_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn mask_keeps_covered_pixels_and_scales_partial_ones() {
    let px = [100u8, 50, 26, 200];
    let mask = [0u8, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 128];

    let mut kept = [px, px, px].concat();
    mask_in_place(&mut kept, &mask).unwrap();
    assert_eq!(&kept[0..4], &px);
    assert_eq!(&kept[4..8], &[0, 0, 0, 0]);
    assert_eq!(&kept[8..12], &[50, 25, 13, 100]);
}

#[test]
fn soft_light_mid_gray_is_neutral() {
    let dst = [120u8, 60, 30, 255];
    let out = soft_light_gray_px(dst, 128, 1.0);
    for c in 0..3 {
        assert!((i32::from(out[c]) - i32::from(dst[c])).abs() <= 1);
    }
    assert_eq!(out[3], 255);
}

#[test]
fn soft_light_lightens_and_darkens_without_replacing() {
    let dst = [128u8, 128, 128, 255];
    let lighter = soft_light_gray_px(dst, 255, 0.5);
    let darker = soft_light_gray_px(dst, 0, 0.5);
    assert!(lighter[0] > dst[0] && lighter[0] < 255);
    assert!(darker[0] < dst[0] && darker[0] > 0);
}

#[test]
fn soft_light_zero_opacity_is_noop() {
    let dst = [1u8, 2, 3, 4];
    assert_eq!(soft_light_gray_px(dst, 255, 0.0), dst);
}
