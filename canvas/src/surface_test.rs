use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_surface_has_requested_dimensions() {
    let surface = Surface::new(64, 48);
    assert_eq!(surface.width(), 64);
    assert_eq!(surface.height(), 48);
    assert_eq!(surface.pixels().len(), 64 * 48 * 4);
}

#[test]
fn new_surface_is_background_between_grid_lines() {
    let surface = Surface::new(64, 48);
    assert_eq!(surface.pixel(10, 10), Some(BACKGROUND));
    assert_eq!(surface.pixel(37, 29), Some(BACKGROUND));
}

#[test]
fn new_surface_has_grid_lines_at_spacing() {
    let surface = Surface::new(64, 48);
    // Vertical lines at x = 0, 20, 40.
    assert_eq!(surface.pixel(0, 7), Some(GRID_LINE));
    assert_eq!(surface.pixel(20, 7), Some(GRID_LINE));
    assert_eq!(surface.pixel(40, 7), Some(GRID_LINE));
    // Horizontal lines at y = 0, 20, 40.
    assert_eq!(surface.pixel(7, 0), Some(GRID_LINE));
    assert_eq!(surface.pixel(7, 20), Some(GRID_LINE));
    assert_eq!(surface.pixel(7, 40), Some(GRID_LINE));
}

// =============================================================
// Pixel access and clipping
// =============================================================

#[test]
fn set_pixel_writes_in_bounds() {
    let mut surface = Surface::new(32, 32);
    let red = Rgba::opaque(255, 0, 0);
    surface.set_pixel(5, 6, red);
    assert_eq!(surface.pixel(5, 6), Some(red));
}

#[test]
fn set_pixel_clips_out_of_bounds() {
    let mut surface = Surface::new(32, 32);
    let before = surface.clone_pixels();
    let red = Rgba::opaque(255, 0, 0);
    surface.set_pixel(-1, 5, red);
    surface.set_pixel(5, -1, red);
    surface.set_pixel(32, 5, red);
    surface.set_pixel(5, 32, red);
    assert_eq!(surface.pixels(), before.as_slice());
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let surface = Surface::new(32, 32);
    assert_eq!(surface.pixel(32, 0), None);
    assert_eq!(surface.pixel(0, 32), None);
}

// =============================================================
// Fill and restore
// =============================================================

#[test]
fn fill_covers_every_pixel() {
    let mut surface = Surface::new(16, 16);
    let blue = Rgba::opaque(0, 0, 255);
    surface.fill(blue);
    assert_eq!(surface.pixel(0, 0), Some(blue));
    assert_eq!(surface.pixel(15, 15), Some(blue));
}

#[test]
fn restore_pixels_roundtrips_a_clone() {
    let mut surface = Surface::new(16, 16);
    let base = surface.clone_pixels();
    surface.fill(Rgba::opaque(0, 0, 255));
    assert_ne!(surface.pixels(), base.as_slice());
    assert!(surface.restore_pixels(&base));
    assert_eq!(surface.pixels(), base.as_slice());
}

#[test]
fn restore_pixels_rejects_length_mismatch() {
    let mut surface = Surface::new(16, 16);
    let before = surface.clone_pixels();
    assert!(!surface.restore_pixels(&[0, 0, 0, 0]));
    assert_eq!(surface.pixels(), before.as_slice());
}

#[test]
fn paint_background_resets_drawn_pixels() {
    let mut surface = Surface::new(64, 48);
    surface.set_pixel(10, 10, Rgba::opaque(255, 0, 0));
    surface.paint_background();
    assert_eq!(surface.pixel(10, 10), Some(BACKGROUND));
    assert_eq!(surface.pixel(20, 10), Some(GRID_LINE));
}
