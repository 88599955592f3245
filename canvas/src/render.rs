//! Rasterization: dots, thick segments, and shape outlines.
//!
//! This module is the only place that writes stroke pixels into a
//! [`Surface`]. Thick lines are built by stamping filled discs of radius
//! `width / 2` along the path, which gives the round caps and joins of the
//! original 2D-context stroking model. All writes clip per pixel via
//! [`Surface::set_pixel`], so out-of-bounds geometry is safe.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use crate::input::Point;
use crate::surface::{Rgba, Surface};

/// Distance between consecutive disc stamps along a path, in pixels.
/// Small enough that adjacent stamps of any brush width overlap seamlessly.
const STAMP_STEP_PX: f64 = 0.5;

/// Stamp radius for a given stroke width. Width 1 still covers one pixel.
fn stamp_radius(width: u32) -> f64 {
    (f64::from(width) / 2.0).max(0.5)
}

/// Fill a disc centered at `center`.
fn fill_disc(surface: &mut Surface, center: Point, radius: f64, color: Rgba) {
    // A width-1 stamp at an exact pixel corner is equidistant from four pixel
    // centers and would otherwise cover none of them.
    #[allow(clippy::cast_possible_truncation)]
    surface.set_pixel(center.x.floor() as i64, center.y.floor() as i64, color);
    let r_sq = radius * radius;
    #[allow(clippy::cast_possible_truncation)]
    let x_min = (center.x - radius).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let x_max = (center.x + radius).ceil() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let y_min = (center.y - radius).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let y_max = (center.y + radius).ceil() as i64;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            #[allow(clippy::cast_precision_loss)]
            let dx = (x as f64 + 0.5) - center.x;
            #[allow(clippy::cast_precision_loss)]
            let dy = (y as f64 + 0.5) - center.y;
            if dx * dx + dy * dy <= r_sq {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

/// Stamp a single round dot of the given stroke width.
pub fn stamp_dot(surface: &mut Surface, center: Point, width: u32, color: Rgba) {
    fill_disc(surface, center, stamp_radius(width), color);
}

/// Draw a thick round-capped segment from `from` to `to`.
pub fn stroke_segment(surface: &mut Surface, from: Point, to: Point, width: u32, color: Rgba) {
    let radius = stamp_radius(width);
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = dx.hypot(dy);
    if length == 0.0 {
        fill_disc(surface, from, radius, color);
        return;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (length / STAMP_STEP_PX).ceil() as u64;
    #[allow(clippy::cast_precision_loss)]
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let pt = Point::new(from.x + dx * t, from.y + dy * t);
        fill_disc(surface, pt, radius, color);
    }
}

/// Draw the outline of the axis-aligned rectangle spanned by two corners.
pub fn stroke_rect(surface: &mut Surface, a: Point, b: Point, width: u32, color: Rgba) {
    let top_right = Point::new(b.x, a.y);
    let bottom_left = Point::new(a.x, b.y);
    stroke_segment(surface, a, top_right, width, color);
    stroke_segment(surface, top_right, b, width, color);
    stroke_segment(surface, b, bottom_left, width, color);
    stroke_segment(surface, bottom_left, a, width, color);
}

/// Draw a circle outline centered at `center` with the given radius.
pub fn stroke_circle(surface: &mut Surface, center: Point, radius: f64, width: u32, color: Rgba) {
    let stamp = stamp_radius(width);
    if radius <= 0.0 {
        fill_disc(surface, center, stamp, color);
        return;
    }
    // Angular step that advances at most STAMP_STEP_PX along the arc.
    let circumference = 2.0 * PI * radius;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (circumference / STAMP_STEP_PX).ceil().max(8.0) as u64;
    #[allow(clippy::cast_precision_loss)]
    for i in 0..steps {
        let theta = 2.0 * PI * (i as f64) / (steps as f64);
        let pt = Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin());
        fill_disc(surface, pt, stamp, color);
    }
}
