use rand::SeedableRng;

use super::*;

fn gray_canvas(w: u32, h: u32) -> Vec<u8> {
    [100u8, 100, 100, 255].repeat((w * h) as usize)
}

#[test]
fn count_scales_with_area_and_density() {
    assert_eq!(speckle_count(100, 100, 0.0), 0);
    assert_eq!(speckle_count(100, 100, -1.0), 0);
    assert_eq!(speckle_count(100, 100, 1.0), 2500);
    assert_eq!(speckle_count(100, 100, 0.5), 1250);
    assert_eq!(speckle_count(200, 100, 0.5), 2500);
    assert_eq!(speckle_count(100, 100, 9.0), 2500);
}

#[test]
fn seeded_noise_is_reproducible() {
    let mut a = gray_canvas(32, 32);
    let mut b = gray_canvas(32, 32);
    scatter_speckles(&mut a, 32, 32, 1.0, &mut rand::rngs::StdRng::seed_from_u64(7)).unwrap();
    scatter_speckles(&mut b, 32, 32, 1.0, &mut rand::rngs::StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);

    let mut c = gray_canvas(32, 32);
    scatter_speckles(&mut c, 32, 32, 1.0, &mut rand::rngs::StdRng::seed_from_u64(8)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn speckles_are_subtle_and_keep_alpha() {
    let mut buf = gray_canvas(16, 16);
    let n = scatter_speckles(&mut buf, 16, 16, 1.0, &mut rand::thread_rng()).unwrap();
    assert_eq!(n, 64);
    assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
    // Low opacity soft light never moves a channel far from the base.
    assert!(buf.chunks_exact(4).all(|px| (i32::from(px[0]) - 100).abs() < 40));
    assert!(buf.chunks_exact(4).any(|px| px[0] != 100));
}

#[test]
fn zero_density_leaves_buffer_untouched() {
    let mut buf = gray_canvas(8, 8);
    let n = scatter_speckles(&mut buf, 8, 8, 0.0, &mut rand::thread_rng()).unwrap();
    assert_eq!(n, 0);
    assert_eq!(buf, gray_canvas(8, 8));
}

#[test]
fn rejects_wrong_buffer_length() {
    let mut buf = vec![0u8; 12];
    assert!(scatter_speckles(&mut buf, 2, 2, 1.0, &mut rand::thread_rng()).is_err());
}
