/// Layout primitives: points, anchored boxes and colors.
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("invalid anchor name: {name}")]
    InvalidAnchor { name: String },
}

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    pub const fn tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        point.tuple()
    }
}

/// Named reference point on a [`LayoutBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::BottomLeft => "bottom-left",
            Self::Bottom => "bottom",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Fraction of the box size, in halves, from the top-left corner.
    const fn halves(self) -> (i32, i32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::Top => (1, 0),
            Self::TopRight => (2, 0),
            Self::Left => (0, 1),
            Self::Center => (1, 1),
            Self::Right => (2, 1),
            Self::BottomLeft => (0, 2),
            Self::Bottom => (1, 2),
            Self::BottomRight => (2, 2),
        }
    }
}

impl FromStr for Anchor {
    type Err = GeometryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "nw" | "topleft" => Ok(Self::TopLeft),
            "n" | "top" | "midtop" => Ok(Self::Top),
            "ne" | "topright" => Ok(Self::TopRight),
            "w" | "left" | "midleft" => Ok(Self::Left),
            "c" | "center" | "centre" => Ok(Self::Center),
            "e" | "right" | "midright" => Ok(Self::Right),
            "sw" | "bottomleft" => Ok(Self::BottomLeft),
            "s" | "bottom" | "midbottom" => Ok(Self::Bottom),
            "se" | "bottomright" => Ok(Self::BottomRight),
            _ => Err(GeometryError::InvalidAnchor {
                name: value.to_string(),
            }),
        }
    }
}

/// Axis-aligned box held as two normalized corners.
///
/// Every mutator keeps `top_left <= bottom_right` componentwise and, apart
/// from the explicit constructors, never changes the size. Pixel coverage is
/// half-open: `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutBox {
    top_left: Point,
    bottom_right: Point,
}

impl LayoutBox {
    /// Builds a box from any two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Builds a box from an origin and a signed size. Negative sizes extend
    /// left or up from the origin.
    pub fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::from_corners(origin, origin.offset(width, height))
    }

    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    pub const fn size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn anchor(&self, anchor: Anchor) -> Point {
        let (hx, hy) = anchor.halves();
        self.top_left
            .offset(half_steps(self.width(), hx), half_steps(self.height(), hy))
    }

    /// Moves the box so `anchor` lands on `point`.
    pub fn set_anchor(&mut self, anchor: Anchor, point: Point) {
        let (width, height) = self.size();
        let current = self.anchor(anchor);
        let (dx, dy) = (point.x - current.x, point.y - current.y);
        self.top_left = self.top_left.offset(dx, dy);
        self.bottom_right = self.top_left.offset(width, height);
    }

    pub fn with_anchor(mut self, anchor: Anchor, point: Point) -> Self {
        self.set_anchor(anchor, point);
        self
    }

    pub fn get(&self, name: &str) -> GeometryResult<Point> {
        Ok(self.anchor(name.parse()?))
    }

    pub fn set(&mut self, name: &str, point: Point) -> GeometryResult<()> {
        self.set_anchor(name.parse()?, point);
        Ok(())
    }

    pub fn top_left(&self) -> Point {
        self.anchor(Anchor::TopLeft)
    }

    pub fn set_top_left(&mut self, point: Point) {
        self.set_anchor(Anchor::TopLeft, point);
    }

    pub fn top(&self) -> Point {
        self.anchor(Anchor::Top)
    }

    pub fn set_top(&mut self, point: Point) {
        self.set_anchor(Anchor::Top, point);
    }

    pub fn top_right(&self) -> Point {
        self.anchor(Anchor::TopRight)
    }

    pub fn set_top_right(&mut self, point: Point) {
        self.set_anchor(Anchor::TopRight, point);
    }

    pub fn left(&self) -> Point {
        self.anchor(Anchor::Left)
    }

    pub fn set_left(&mut self, point: Point) {
        self.set_anchor(Anchor::Left, point);
    }

    pub fn center(&self) -> Point {
        self.anchor(Anchor::Center)
    }

    pub fn set_center(&mut self, point: Point) {
        self.set_anchor(Anchor::Center, point);
    }

    pub fn right(&self) -> Point {
        self.anchor(Anchor::Right)
    }

    pub fn set_right(&mut self, point: Point) {
        self.set_anchor(Anchor::Right, point);
    }

    pub fn bottom_left(&self) -> Point {
        self.anchor(Anchor::BottomLeft)
    }

    pub fn set_bottom_left(&mut self, point: Point) {
        self.set_anchor(Anchor::BottomLeft, point);
    }

    pub fn bottom(&self) -> Point {
        self.anchor(Anchor::Bottom)
    }

    pub fn set_bottom(&mut self, point: Point) {
        self.set_anchor(Anchor::Bottom, point);
    }

    pub fn bottom_right(&self) -> Point {
        self.anchor(Anchor::BottomRight)
    }

    pub fn set_bottom_right(&mut self, point: Point) {
        self.set_anchor(Anchor::BottomRight, point);
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x < self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y < self.bottom_right.y
    }

    pub fn intersect(&self, other: &LayoutBox) -> Option<LayoutBox> {
        let left = self.top_left.x.max(other.top_left.x);
        let top = self.top_left.y.max(other.top_left.y);
        let right = self.bottom_right.x.min(other.bottom_right.x);
        let bottom = self.bottom_right.y.min(other.bottom_right.y);
        if right <= left || bottom <= top {
            return None;
        }
        Some(LayoutBox::from_corners(
            Point::new(left, top),
            Point::new(right, bottom),
        ))
    }
}

const fn half_steps(length: i32, halves: i32) -> i32 {
    match halves {
        0 => 0,
        1 => length.div_euclid(2),
        _ => length,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const ORANGE: Color = Color::new(247, 130, 1);
    pub const BLUE: Color = Color::new(65, 148, 254);
    pub const GREEN: Color = Color::new(102, 190, 54);
    pub const RED: Color = Color::new(174, 37, 21);
    pub const SLATE: Color = Color::new(100, 119, 151);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Size an image of `width x height` takes after an aspect-preserving
/// downscale into `max_width x max_height`. Images that already fit are left
/// alone.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (width <= max_width && height <= max_height) {
        return (width, height);
    }

    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height));
    let scaled_width = (f64::from(width) * scale).round() as u32;
    let scaled_height = (f64::from(height) * scale).round() as u32;
    (
        scaled_width.clamp(1, max_width.max(1)),
        scaled_height.clamp(1, max_height.max(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> LayoutBox {
        LayoutBox::from_origin_size(Point::new(10, 20), 61, 33)
    }

    #[test]
    fn from_corners_normalizes_swapped_corners() {
        let layout = LayoutBox::from_corners(Point::new(50, 80), Point::new(10, 20));
        assert_eq!(layout.top_left(), Point::new(10, 20));
        assert_eq!(layout.bottom_right(), Point::new(50, 80));
        assert_eq!(layout.size(), (40, 60));
    }

    #[test]
    fn negative_size_extends_up_and_left() {
        let layout = LayoutBox::from_origin_size(Point::new(100, 100), -20, -30);
        assert_eq!(layout.top_left(), Point::new(80, 70));
        assert_eq!(layout.size(), (20, 30));
    }

    #[test]
    fn anchors_read_corners_edges_and_center() {
        let layout = LayoutBox::from_origin_size(Point::new(0, 0), 10, 20);
        assert_eq!(layout.top(), Point::new(5, 0));
        assert_eq!(layout.top_right(), Point::new(10, 0));
        assert_eq!(layout.left(), Point::new(0, 10));
        assert_eq!(layout.center(), Point::new(5, 10));
        assert_eq!(layout.right(), Point::new(10, 10));
        assert_eq!(layout.bottom_left(), Point::new(0, 20));
        assert_eq!(layout.bottom(), Point::new(5, 20));
        assert_eq!(layout.bottom_right(), Point::new(10, 20));
    }

    #[test]
    fn every_anchor_setter_preserves_size_and_hits_target() {
        let target = Point::new(-7, 404);
        for anchor in Anchor::ALL {
            let mut layout = sample_box();
            layout.set_anchor(anchor, target);
            assert_eq!(layout.size(), (61, 33), "anchor {anchor:?}");
            assert_eq!(layout.anchor(anchor), target, "anchor {anchor:?}");
        }
    }

    #[test]
    fn named_setters_delegate_to_anchor() {
        let mut layout = sample_box();
        layout.set_bottom_left(Point::new(804, 628));
        assert_eq!(layout.top_left(), Point::new(804, 595));

        layout.set_center(Point::new(0, 0));
        assert_eq!(layout.center(), Point::new(0, 0));
        assert_eq!(layout.size(), (61, 33));
    }

    #[test]
    fn string_keyed_access_accepts_compass_and_spelled_names() {
        let mut layout = sample_box();
        assert_eq!(layout.get("SE").unwrap(), layout.bottom_right());
        assert_eq!(layout.get("mid-top").unwrap(), layout.top());
        layout.set("bottom_left", Point::new(1, 2)).unwrap();
        assert_eq!(layout.bottom_left(), Point::new(1, 2));
    }

    #[test]
    fn unknown_anchor_name_fails_fast() {
        let mut layout = sample_box();
        let before = layout;
        assert_eq!(
            layout.get("XY").unwrap_err(),
            GeometryError::InvalidAnchor {
                name: "XY".to_string()
            }
        );
        assert!(layout.set("XY", Point::new(0, 0)).is_err());
        assert_eq!(layout, before);
    }

    #[test]
    fn intersect_clips_and_rejects_disjoint_boxes() {
        let canvas = LayoutBox::from_origin_size(Point::new(0, 0), 100, 100);
        let overhang = LayoutBox::from_origin_size(Point::new(90, -10), 20, 30);
        let clipped = canvas.intersect(&overhang).unwrap();
        assert_eq!(clipped.top_left(), Point::new(90, 0));
        assert_eq!(clipped.size(), (10, 20));

        let outside = LayoutBox::from_origin_size(Point::new(100, 0), 5, 5);
        assert!(canvas.intersect(&outside).is_none());
    }

    #[test]
    fn checked_offset_reports_overflow() {
        assert_eq!(
            Point::new(1, 628).checked_offset(2, -3),
            Some(Point::new(3, 625))
        );
        assert_eq!(Point::new(0, 628).checked_offset(0, i32::MAX), None);
        assert_eq!(Point::new(0, -628).checked_offset(0, i32::MIN), None);
    }

    #[test]
    fn contains_is_half_open() {
        let layout = LayoutBox::from_origin_size(Point::new(0, 0), 2, 2);
        assert!(layout.contains(Point::new(0, 0)));
        assert!(layout.contains(Point::new(1, 1)));
        assert!(!layout.contains(Point::new(2, 1)));
    }

    #[test]
    fn fit_within_halves_oversized_thumbnail() {
        assert_eq!(fit_within(920, 792, 460, 396), (460, 396));
    }

    #[test]
    fn fit_within_keeps_aspect_ratio_on_limiting_side() {
        assert_eq!(fit_within(1000, 500, 460, 396), (460, 230));
        assert_eq!(fit_within(300, 1188, 460, 396), (100, 396));
    }

    #[test]
    fn fit_within_never_upscales() {
        assert_eq!(fit_within(200, 100, 460, 396), (200, 100));
    }
}
