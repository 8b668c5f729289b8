use std::io::Cursor;

use rand::SeedableRng;

use super::*;
use crate::{
    config::model::{Aspect, Padding, Shadow, ShadowPreset},
    foundation::error::ShotError,
};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 30, 30, 255]));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

fn small_config() -> LayoutConfig {
    LayoutConfig {
        padding: Padding::Px(10.0),
        shadow: Shadow::Preset(ShadowPreset::None),
        ..LayoutConfig::default()
    }
}

#[test]
fn new_session_has_nothing_to_export() {
    let s = Session::new(RenderSettings::default());
    assert!(s.bitmap().is_none());
    assert!(s.surface().is_empty());
    assert_eq!(s.config(), &LayoutConfig::default());
    assert!(s.export_png().unwrap().is_none());
    s.copy_to_clipboard().unwrap();
}

#[test]
fn config_changes_without_image_do_not_render() {
    let mut s = Session::new(RenderSettings::default());
    let config = LayoutConfig {
        aspect: Aspect::Square,
        ..small_config()
    };
    s.set_config(config.clone()).unwrap();
    assert_eq!(s.config(), &config);
    assert!(s.surface().is_empty());
}

#[test]
fn loading_renders_and_config_repaints() {
    let mut s = Session::with_config(RenderSettings::default(), small_config());
    s.load_image(&png_bytes(30, 10)).unwrap();
    assert_eq!((s.surface().width(), s.surface().height()), (50, 30));

    s.set_config(LayoutConfig {
        aspect: Aspect::Square,
        ..small_config()
    })
    .unwrap();
    assert_eq!((s.surface().width(), s.surface().height()), (50, 50));
}

#[test]
fn failed_decode_keeps_previous_state() {
    let mut s = Session::with_config(RenderSettings::default(), small_config());
    s.load_image(&png_bytes(12, 12)).unwrap();
    let surface = s.surface().clone();
    let bitmap = s.bitmap().cloned();

    let err = s.load_image(b"not an image").unwrap_err();
    assert!(matches!(err, ShotError::Decode(_)));
    assert_eq!(s.surface(), &surface);
    assert_eq!(s.bitmap().cloned(), bitmap);
}

#[test]
fn reset_restores_defaults_and_repaints() {
    let mut s = Session::with_config(RenderSettings::default(), small_config());
    s.load_image(&png_bytes(20, 20)).unwrap();
    assert_eq!(s.surface().width(), 40);

    s.reset().unwrap();
    assert_eq!(s.config(), &LayoutConfig::default());
    // Default padding is the medium preset on both sides.
    assert_eq!(s.surface().width(), 20 + 2 * 64);
}

#[test]
fn export_matches_device_resolution() {
    let settings = RenderSettings {
        device_scale: 2.0,
        ..RenderSettings::default()
    };
    let mut s = Session::with_config(settings, small_config());
    s.load_image(&png_bytes(30, 10)).unwrap();
    let bytes = s.export_png().unwrap().unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (100, 60));
}

#[test]
fn seeded_sessions_agree() {
    let mut config = small_config();
    config.noise.enabled = true;
    let bytes = png_bytes(16, 16);

    let mut a = Session::with_config(RenderSettings::default(), config.clone());
    let mut b = Session::with_config(RenderSettings::default(), config);
    a.load_image_with_rng(&bytes, &mut rand::rngs::StdRng::seed_from_u64(9))
        .unwrap();
    b.load_image_with_rng(&bytes, &mut rand::rngs::StdRng::seed_from_u64(9))
        .unwrap();
    assert_eq!(a.surface(), b.surface());
}
