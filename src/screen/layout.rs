use crate::geometry::{LayoutBox, Point};
use crate::render::Bar;
use crate::stats::{Stat, StatError, StatResult, StatSet};

/// Fixed placement of the thumbnail and graph on the tier screen template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub thumbnail_origin: Point,
    pub thumbnail_max_width: u32,
    pub thumbnail_max_height: u32,
    pub graph_bottom: i32,
    pub graph_top: i32,
    pub bar_width: u32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            thumbnail_origin: Point::new(100, 151),
            thumbnail_max_width: 460,
            thumbnail_max_height: 396,
            graph_bottom: 628,
            graph_top: 156,
            bar_width: 60,
        }
    }
}

impl ScreenLayout {
    pub fn graph_height(&self) -> u32 {
        u32::try_from(self.graph_bottom - self.graph_top).unwrap_or(0)
    }

    /// Slot the thumbnail is fitted into.
    pub fn thumbnail_slot(&self) -> LayoutBox {
        LayoutBox::from_origin_size(
            self.thumbnail_origin,
            i32::try_from(self.thumbnail_max_width).unwrap_or(i32::MAX),
            i32::try_from(self.thumbnail_max_height).unwrap_or(i32::MAX),
        )
    }

    pub fn bar_for(&self, stat: Stat, value: i32) -> Bar {
        Bar::scaled(
            Point::new(stat.bar_x(), self.graph_bottom),
            self.bar_width,
            value,
            self.graph_height(),
            stat.color(),
        )
    }

    /// Rejects stats whose bar cannot be placed in pixel coordinates.
    /// Values that merely overrun the graph are accepted and clipped.
    pub fn check_stats(&self, stats: &StatSet) -> StatResult<()> {
        for (stat, value) in stats.iter() {
            if !self.bar_for(stat, value).is_placeable() {
                return Err(StatError::InvalidArgument {
                    message: format!("{stat} value {value} is too large to draw"),
                });
            }
        }
        Ok(())
    }
}
