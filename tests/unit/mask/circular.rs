use image::Rgba;

use super::*;
use crate::raster::normalize::NormalizedImage;

const RED: Pixel = Rgba([255, 0, 0, 255]);

fn solid(width: u32, height: u32, px: Pixel) -> NormalizedImage {
    NormalizedImage::from_rgba(image::RgbaImage::from_pixel(width, height, px))
}

fn gradient(width: u32, height: u32) -> NormalizedImage {
    NormalizedImage::from_rgba(image::RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x * y) as u8, 200])
    }))
}

#[test]
fn boundary_point_is_excluded() {
    let img = solid(16, 16, RED);
    let view = CircularView::new(&img, Point::new(0, 0), 5);
    // 3^2 + 4^2 == 25 == r^2
    assert_eq!(view.at(3, 4), TRANSPARENT);
    assert_eq!(view.at(4, 3), TRANSPARENT);
    assert_eq!(view.at(5, 0), TRANSPARENT);
    assert_eq!(view.at(3, 3), RED);
    assert_eq!(view.at(4, 2), RED);
}

#[test]
fn transparent_iff_outside_open_disc() {
    let img = solid(32, 32, RED);
    let r = 7;
    let view = CircularView::new(&img, Point::new(0, 0), r);
    for y in -10..10 {
        for x in -10..10 {
            let outside = x * x + y * y >= r * r;
            // Negative coordinates fall outside the source too, so only check non-negative ones
            // for pass-through.
            if outside {
                assert_eq!(view.at(x, y), TRANSPARENT, "({x},{y})");
            } else if x >= 0 && y >= 0 {
                assert_eq!(view.at(x, y), RED, "({x},{y})");
            }
        }
    }
}

#[test]
fn inside_points_pass_through_exactly() {
    let img = gradient(20, 20);
    let view = CircularView::new(&img, Point::new(10, 10), 6);
    for y in 0..20 {
        for x in 0..20 {
            if view.contains(x, y) {
                assert_eq!(view.at(x, y), img.at(x, y));
            }
        }
    }
}

#[test]
fn bounds_is_bounding_square_of_circle() {
    let img = solid(4, 4, RED);
    let view = CircularView::new(&img, Point::new(10, 10), 4);
    assert_eq!(
        view.bounds(),
        Rect::new(Point::new(6, 6), Point::new(14, 14))
    );
    assert_eq!((view.bounds().width(), view.bounds().height()), (8, 8));
}

#[test]
fn bounds_are_not_clipped_to_source() {
    let img = solid(4, 4, RED);
    let view = CircularView::new(&img, Point::new(1, 1), 3);
    assert_eq!(
        view.bounds(),
        Rect::new(Point::new(-2, -2), Point::new(4, 4))
    );
    // Inside the circle but outside the source: source's own answer passes through.
    assert_eq!(view.at(-1, 1), TRANSPARENT);
}

#[test]
fn zero_radius_is_empty_and_transparent() {
    let img = solid(8, 8, RED);
    let view = CircularView::new(&img, Point::new(4, 4), 0);
    assert!(view.bounds().is_empty());
    assert_eq!(view.at(4, 4), TRANSPARENT);
}

#[test]
fn negative_radius_is_empty_and_transparent() {
    let img = solid(8, 8, RED);
    let view = CircularView::new(&img, Point::new(4, 4), -3);
    assert!(view.bounds().is_empty());
    assert_eq!(view.at(4, 4), TRANSPARENT);
    assert_eq!(view.at(5, 5), TRANSPARENT);
}

#[test]
fn color_model_passes_through() {
    struct Gray;
    impl ImageSource for Gray {
        fn color_model(&self) -> ColorModel {
            ColorModel::L8
        }
        fn bounds(&self) -> Rect {
            Rect::from_size(1, 1)
        }
        fn at(&self, _x: i32, _y: i32) -> Pixel {
            Rgba([9, 9, 9, 255])
        }
    }

    let view = CircularView::new(&Gray, Point::new(0, 0), 2);
    assert_eq!(view.color_model(), ColorModel::L8);
    assert_eq!(view.at(1, 1), Rgba([9, 9, 9, 255]));
}

#[test]
fn queries_are_idempotent() {
    let img = gradient(12, 12);
    let view = CircularView::new(&img, Point::new(6, 6), 4);
    let first: Vec<_> = (0..12).map(|i| view.at(i, 6)).collect();
    let second: Vec<_> = (0..12).rev().map(|i| view.at(i, 6)).rev().collect();
    assert_eq!(first, second);
}

#[test]
fn extreme_coordinates_do_not_overflow() {
    let img = solid(1, 1, RED);
    let view = CircularView::new(&img, Point::new(i32::MAX, i32::MIN), i32::MAX);
    assert_eq!(view.at(i32::MIN, i32::MAX), TRANSPARENT);
    let b = view.bounds();
    assert_eq!(b.max.x, i32::MAX);
    assert_eq!(b.min.y, i32::MIN);
}

#[test]
fn views_share_one_source() {
    let img = solid(10, 10, RED);
    let a = CircularView::new(&img, Point::new(2, 2), 2);
    let b = CircularView::new(&img, Point::new(7, 7), 2);
    assert_eq!(a.at(2, 2), RED);
    assert_eq!(b.at(2, 2), TRANSPARENT);
    assert_eq!(b.at(7, 7), RED);
    assert!(std::ptr::eq(a.source(), b.source()));
}
