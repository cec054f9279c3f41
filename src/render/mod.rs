pub mod bar;

pub use bar::Bar;

use image::RgbImage;

use crate::geometry::{Color, LayoutBox, Point};

/// Canvas extent as a box anchored at the origin.
pub fn canvas_bounds(canvas: &RgbImage) -> LayoutBox {
    LayoutBox::from_origin_size(
        Point::new(0, 0),
        i32::try_from(canvas.width()).unwrap_or(i32::MAX),
        i32::try_from(canvas.height()).unwrap_or(i32::MAX),
    )
}

/// Fills `region` with `color`, clipped to the canvas. Returns the number of
/// pixels written.
pub fn fill_region(canvas: &mut RgbImage, region: &LayoutBox, color: Color) -> u64 {
    let Some(clipped) = canvas_bounds(canvas).intersect(region) else {
        return 0;
    };

    let top_left = clipped.top_left();
    let bottom_right = clipped.bottom_right();
    let pixel = image::Rgb(color.rgb());
    let mut written = 0_u64;
    for y in top_left.y..bottom_right.y {
        for x in top_left.x..bottom_right.x {
            // Clipped to the canvas, so both coordinates are non-negative.
            canvas.put_pixel(x as u32, y as u32, pixel);
            written += 1;
        }
    }
    written
}
