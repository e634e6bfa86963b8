use super::*;
use crate::{
    foundation::core::{Circle, Point},
    geometry::shapes::{equilateral_triangle, star},
};

const BLUE: Rgba8 = Rgba8::from_hex(0x2196F3);
const DARK_BLUE: Rgba8 = Rgba8::from_hex(0x0D47A1);

fn close(a: Rgba8, b: Rgba8, tol: i16) -> bool {
    let d = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs() <= tol;
    d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b) && d(a.a, b.a)
}

#[test]
fn new_canvas_is_fully_transparent() {
    let c = Canvas::new(16, 8).unwrap();
    assert_eq!(c.width(), 16);
    assert_eq!(c.height(), 8);
    assert_eq!(c.data().len(), 16 * 8 * 4);
    assert!(c.data().iter().all(|&b| b == 0));
    assert_eq!(c.pixel(16, 0), None);
}

#[test]
fn rejects_empty_and_oversized_dimensions() {
    assert!(matches!(Canvas::new(0, 10), Err(ArtError::Validation(_))));
    assert!(matches!(Canvas::new(10, 0), Err(ArtError::Validation(_))));
    assert!(matches!(Canvas::new(70_000, 10), Err(ArtError::Validation(_))));
}

#[test]
fn solid_background_covers_every_pixel() {
    let mut c = Canvas::new(5, 3).unwrap();
    c.fill_background(BLUE);
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(c.pixel(x, y), Some(BLUE));
        }
    }
}

#[test]
fn gradient_starts_at_top_and_approaches_bottom() {
    let mut c = Canvas::new(4, 100).unwrap();
    c.fill_background_gradient(BLUE, DARK_BLUE);

    assert_eq!(c.pixel(0, 0), Some(BLUE));
    assert_eq!(c.pixel(3, 0), Some(BLUE));
    let last = c.pixel(2, 99).unwrap();
    assert!(close(last, DARK_BLUE, 1), "{last:?}");

    // Independent of x.
    for y in [10, 50, 77] {
        assert_eq!(c.pixel(0, y), c.pixel(3, y));
    }
    // Monotonic per channel for a monotonic ramp.
    let mid = c.pixel(0, 50).unwrap();
    assert!(mid.g < BLUE.g && mid.g > DARK_BLUE.g);
}

#[test]
fn fill_path_paints_inside_only() {
    let mut c = Canvas::new(64, 64).unwrap();
    c.fill_background(BLUE);
    let s = star(Point::new(32.0, 32.0), 28.0, 12.0, 5);
    c.fill_path(&s, Rgba8::WHITE).unwrap();

    assert_eq!(c.pixel(32, 32), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(1, 1), Some(BLUE));
    assert_eq!(c.pixel(62, 62), Some(BLUE));
}

#[test]
fn stroke_path_leaves_the_interior_untouched() {
    let mut c = Canvas::new(128, 128).unwrap();
    c.fill_background(BLUE);
    let tri = equilateral_triangle(Point::new(64.0, 64.0), 50.0, -90.0);
    c.stroke_path(&tri, Rgba8::WHITE, StrokeStyle::round(6.0))
        .unwrap();

    assert_eq!(c.pixel(64, 64), Some(BLUE));
    // Apex of the upward triangle sits on the stroke.
    assert_eq!(c.pixel(64, 14), Some(Rgba8::WHITE));
}

#[test]
fn ellipse_stroke_draws_a_ring() {
    let mut c = Canvas::new(100, 100).unwrap();
    c.fill_background(BLUE);
    let ring = Circle::new((50.0, 50.0), 30.0);
    c.draw_ellipse(
        &Ellipse::from(ring),
        &Paint::stroke(Rgba8::WHITE, StrokeStyle::round(8.0)),
    )
    .unwrap();

    assert_eq!(c.pixel(50, 50), Some(BLUE));
    assert_eq!(c.pixel(80, 50), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(50, 20), Some(Rgba8::WHITE));
}

#[test]
fn later_draws_occlude_earlier_ones() {
    let mut c = Canvas::new(100, 100).unwrap();
    c.fill_background(BLUE);
    let big = Ellipse::from(Circle::new((50.0, 50.0), 40.0));
    let small = Ellipse::from(Circle::new((60.0, 50.0), 30.0));
    c.draw_ellipse(&big, &Paint::fill(Rgba8::WHITE)).unwrap();
    c.draw_ellipse(&small, &Paint::fill(BLUE)).unwrap();

    // Crescent: the left rim stays white, the carved middle is background again.
    assert_eq!(c.pixel(15, 50), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(60, 50), Some(BLUE));
}

#[test]
fn translucent_fill_blends_over_background() {
    let mut c = Canvas::new(20, 20).unwrap();
    c.fill_background(BLUE);
    let dot = Ellipse::from(Circle::new((10.0, 10.0), 6.0));
    c.draw_ellipse(&dot, &Paint::fill(Rgba8::WHITE.with_alpha(60)))
        .unwrap();

    let px = c.pixel(10, 10).unwrap();
    assert_eq!(px.a, 255);
    assert!(px.r > BLUE.r && px.r < 255);
}

#[test]
fn layer_batches_draws_and_propagates_errors() {
    let mut c = Canvas::new(32, 32).unwrap();
    let res = c.layer(|_| Err(ArtError::render("nope")));
    assert!(res.is_err());
    assert!(c.data().iter().all(|&b| b == 0));

    c.layer(|l| {
        l.fill_path(&star(Point::new(8.0, 8.0), 6.0, 3.0, 5), Rgba8::WHITE);
        l.fill_path(&star(Point::new(24.0, 24.0), 6.0, 3.0, 5), Rgba8::WHITE);
        Ok(())
    })
    .unwrap();
    assert_eq!(c.pixel(8, 8), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(24, 24), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(24, 8), Some(Rgba8::TRANSPARENT));
}

#[test]
fn straight_export_bytes_unpremultiply() {
    let mut c = Canvas::new(2, 1).unwrap();
    c.fill_background(Rgba8::WHITE.with_alpha(128));
    assert_eq!(c.to_straight_rgba8(), vec![255, 255, 255, 128, 255, 255, 255, 128]);
}
