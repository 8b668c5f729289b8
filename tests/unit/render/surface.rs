use super::*;

#[test]
fn default_surface_is_empty() {
    let s = RenderSurface::default();
    assert!(s.is_empty());
    assert_eq!((s.width(), s.height()), (0, 0));
    assert_eq!(s.pixel(0, 0), None);
    assert_eq!(s.logical_size(), LogicalSize::new(0.0, 0.0));
}

#[test]
fn from_parts_checks_length() {
    assert!(RenderSurface::from_parts(2, 2, 1.0, vec![0; 15]).is_err());
    let s = RenderSurface::from_parts(2, 1, 2.0, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(s.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(s.pixel(2, 0), None);
    assert_eq!(s.logical_size(), LogicalSize::new(1.0, 0.5));
}

#[test]
fn straight_conversion_unpremultiplies() {
    let s = RenderSurface::from_parts(3, 1, 1.0, vec![64, 32, 0, 128, 9, 9, 9, 255, 0, 0, 0, 0])
        .unwrap();
    let out = s.to_straight_rgba8();
    assert_eq!(&out[0..4], &[128, 64, 0, 128]);
    assert_eq!(&out[4..8], &[9, 9, 9, 255]);
    assert_eq!(&out[8..12], &[0, 0, 0, 0]);
}
