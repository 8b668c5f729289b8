use super::*;
use crate::config::model::Padding;

fn cfg(aspect: Aspect, padding: f64) -> LayoutConfig {
    LayoutConfig {
        aspect,
        padding: Padding::Px(padding),
        ..LayoutConfig::default()
    }
}

#[test]
fn auto_aspect_is_image_plus_padding() {
    let l = compute_layout(100, 50, &cfg(Aspect::Auto, 10.0));
    assert_eq!(l.canvas, LogicalSize::new(120.0, 70.0));
    assert_eq!(l.card, Rect::new(10.0, 10.0, 110.0, 60.0));
    assert_eq!(l.image, l.card);
    assert!(l.chrome_bar.is_none());
}

#[test]
fn square_takes_the_larger_side() {
    let l = compute_layout(260, 60, &cfg(Aspect::Square, 20.0));
    assert_eq!(l.canvas.width, 300.0);
    assert_eq!(l.canvas.height, 300.0);
    // Centered vertically in the extra space.
    assert_eq!(l.card.y0, 120.0);
}

#[test]
fn widescreen_overrides_height() {
    let l = compute_layout(360, 300, &cfg(Aspect::Widescreen, 20.0));
    assert_eq!(l.canvas.width, 400.0);
    assert_eq!(l.canvas.height, 225.0);
    // Taller than the canvas: centered placement crops both edges.
    assert!(l.card.y0 < 0.0);
}

#[test]
fn chrome_bar_sits_above_the_image_inside_the_card() {
    let config = LayoutConfig {
        padding: Padding::Px(0.0),
        chrome: ChromeTheme::Dark,
        ..LayoutConfig::default()
    };
    let l = compute_layout(80, 40, &config);
    assert_eq!(l.canvas, LogicalSize::new(80.0, 40.0 + CHROME_BAR_HEIGHT));
    let bar = l.chrome_bar.unwrap();
    assert_eq!(bar, Rect::new(0.0, 0.0, 80.0, CHROME_BAR_HEIGHT));
    assert_eq!(l.image, Rect::new(0.0, CHROME_BAR_HEIGHT, 80.0, 72.0));
}

#[test]
fn positions_offset_by_padding() {
    let canvas = LogicalSize::new(200.0, 100.0);
    let p = |pos| place(pos, canvas, 50.0, 20.0, 10.0);
    assert_eq!(p(Position::Center), Point::new(75.0, 40.0));
    assert_eq!(p(Position::Top), Point::new(75.0, 10.0));
    assert_eq!(p(Position::Bottom), Point::new(75.0, 70.0));
    assert_eq!(p(Position::TopLeft), Point::new(10.0, 10.0));
    assert_eq!(p(Position::TopRight), Point::new(140.0, 10.0));
    assert_eq!(p(Position::BottomLeft), Point::new(10.0, 70.0));
    assert_eq!(p(Position::BottomRight), Point::new(140.0, 70.0));
}

#[test]
fn radii_are_clamped_to_half_the_short_side() {
    let config = LayoutConfig {
        padding: Padding::Px(0.0),
        outer_radius: 10_000.0,
        inner_radius: -5.0,
        ..LayoutConfig::default()
    };
    let l = compute_layout(200, 100, &config);
    assert_eq!(l.outer_radius, 50.0);
    assert_eq!(l.inner_radius, 0.0);
}

#[test]
fn snapping_moves_the_card_onto_whole_pixels() {
    let l = compute_layout(101, 50, &cfg(Aspect::Square, 0.0));
    // (101 - 50) / 2 = 25.5
    assert_eq!(l.card.y0, 25.5);
    let s = l.snapped(1.0);
    assert_eq!(s.card.y0, 26.0);
    assert_eq!(s.image.y0, 26.0);
    assert_eq!(s.card.height(), l.card.height());
    assert_eq!(s.canvas, l.canvas);

    let hi = l.snapped(2.0);
    assert_eq!(hi.card.y0, 25.5);
}

#[test]
fn padding_shrinks_to_fit_the_side_limit() {
    let l = compute_layout_within(4, 4, &cfg(Aspect::Auto, 40_000.0), 1024.0);
    assert_eq!(l.canvas, LogicalSize::new(1024.0, 1024.0));
    assert_eq!(l.card, Rect::new(510.0, 510.0, 514.0, 514.0));

    let wide = compute_layout_within(400, 100, &cfg(Aspect::Widescreen, 5_000.0), 800.0);
    assert_eq!(wide.canvas, LogicalSize::new(800.0, 450.0));
}

#[test]
fn padding_within_the_limit_is_untouched() {
    let bounded = compute_layout_within(100, 50, &cfg(Aspect::Square, 10.0), 1024.0);
    assert_eq!(bounded, compute_layout(100, 50, &cfg(Aspect::Square, 10.0)));
}

#[test]
fn card_larger_than_the_limit_gets_no_padding() {
    let l = compute_layout_within(2000, 10, &cfg(Aspect::Auto, 64.0), 1024.0);
    assert_eq!(l.canvas, LogicalSize::new(2000.0, 10.0));
}
