/*!
 * Geometric primitives.
 *
 * Points and path builders are publicly imported from tiny-skia-path.
 *
 * Y low coordinates are at the top.
 */

use strict_num::{FiniteF32, PositiveF32};
pub use tiny_skia_path::{Path, PathBuilder, Point};

/// A rectangle in 2D space represented by x, y, width and height.
///
/// The origin is finite and the dimensions are finite and non-negative.
/// A zero-sized rectangle is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: FiniteF32,
    y: FiniteF32,
    w: PositiveF32,
    h: PositiveF32,
}

impl Rect {
    /// Build a rectangle from x, y, width and height.
    /// Returns `None` if a coordinate is not finite or a dimension is negative.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Option<Self> {
        Some(Rect {
            x: FiniteF32::new(x)?,
            y: FiniteF32::new(y)?,
            w: finite_positive(w)?,
            h: finite_positive(h)?,
        })
    }

    /// Build a rectangle from top, right, bottom and left
    pub fn from_trbl(top: f32, right: f32, bottom: f32, left: f32) -> Option<Self> {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    /// Build the smallest rectangle containing two corner points
    pub fn from_corners(p1: Point, p2: Point) -> Option<Self> {
        Rect::from_trbl(
            p1.y.min(p2.y),
            p1.x.max(p2.x),
            p1.y.max(p2.y),
            p1.x.min(p2.x),
        )
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f32 {
        self.w.get()
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f32 {
        self.h.get()
    }

    /// The top Y coordinate
    pub const fn top(&self) -> f32 {
        self.y.get()
    }

    /// The right X coordinate
    pub const fn right(&self) -> f32 {
        self.x.get() + self.w.get()
    }

    /// The bottom Y coordinate
    pub const fn bottom(&self) -> f32 {
        self.y.get() + self.h.get()
    }

    /// The left X coordinate
    pub const fn left(&self) -> f32 {
        self.x.get()
    }

    /// Unite two rectangles into one that contains both
    pub fn unite(r1: &Rect, r2: &Rect) -> Rect {
        Rect {
            x: if r1.left() <= r2.left() { r1.x } else { r2.x },
            y: if r1.top() <= r2.top() { r1.y } else { r2.y },
            w: finite_positive(r1.right().max(r2.right()) - r1.left().min(r2.left()))
                .unwrap_or(r1.w),
            h: finite_positive(r1.bottom().max(r2.bottom()) - r1.top().min(r2.top()))
                .unwrap_or(r1.h),
        }
    }
}

fn finite_positive(v: f32) -> Option<PositiveF32> {
    if v.is_finite() {
        PositiveF32::new(v)
    } else {
        None
    }
}
