use serde::Serialize;

/// A corner of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Width and height are expected to be positive but are not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point {
            x: i64::from(self.x),
            y: i64::from(self.y),
        }
    }

    /// Corner opposite the origin, computed in `i64` so it cannot overflow
    pub fn bottom_right(&self) -> Point {
        Point {
            x: i64::from(self.x) + i64::from(self.width),
            y: i64::from(self.y) + i64::from(self.height),
        }
    }

    /// Check if the open extents of two rectangles overlap on both axes.
    ///
    /// All four comparisons are strict, so rectangles that only share an
    /// edge or a corner do not intersect. Sizes are used as given: a
    /// zero-width rectangle strictly inside another still intersects it.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        let (a_min, a_max) = (self.top_left(), self.bottom_right());
        let (b_min, b_max) = (other.top_left(), other.bottom_right());

        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}
