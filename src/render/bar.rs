use image::RgbImage;

use crate::geometry::{Anchor, Color, LayoutBox, Point};

/// Full-scale value of a stat bar.
pub const BAR_SCALE_MAX: f64 = 100.0;

/// One filled bar, growing upward from its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub position: Point,
    pub width: u32,
    pub height: i32,
    pub color: Color,
}

impl Bar {
    pub const fn new(position: Point, width: u32, height: i32, color: Color) -> Self {
        Self {
            position,
            width,
            height,
            color,
        }
    }

    /// Bar whose height is `value / 100` of `graph_height`, rounded to the
    /// nearest pixel.
    pub fn scaled(
        position: Point,
        width: u32,
        value: i32,
        graph_height: u32,
        color: Color,
    ) -> Self {
        Self::new(position, width, scaled_height(value, graph_height), color)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Covered area: `[x, x + width) x [y - height, y)`. Negative heights
    /// extend below the position. `None` when the bar is empty or its far
    /// edges fall outside the `i32` coordinate space.
    pub fn bounds(&self) -> Option<LayoutBox> {
        if self.is_empty() {
            return None;
        }
        let width = i32::try_from(self.width).ok()?;
        let height = i32::try_from(self.height.unsigned_abs()).ok()?;
        let (anchor, dy) = if self.height > 0 {
            (Anchor::BottomLeft, -height)
        } else {
            (Anchor::TopLeft, height)
        };
        // Anchoring cannot overflow once the opposite corner fits.
        self.position.checked_offset(width, dy)?;

        let bounds = LayoutBox::from_origin_size(Point::default(), width, height);
        Some(bounds.with_anchor(anchor, self.position))
    }

    pub fn is_placeable(&self) -> bool {
        self.is_empty() || self.bounds().is_some()
    }

    pub fn draw(&self, canvas: &mut RgbImage) {
        let Some(bounds) = self.bounds() else {
            if !self.is_empty() {
                tracing::warn!(height = self.height, "bar does not fit the coordinate space");
            }
            return;
        };
        let written = super::fill_region(canvas, &bounds, self.color);
        if written == 0 {
            tracing::debug!(?bounds, "bar lies outside the canvas");
        }
    }
}

pub fn scaled_height(value: i32, graph_height: u32) -> i32 {
    (f64::from(value) / BAR_SCALE_MAX * f64::from(graph_height)).round() as i32
}
