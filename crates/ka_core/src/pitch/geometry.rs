//! Pitch geometry primitives for the formation board.
//!
//! Two coordinate spaces are in play and must never be mixed:
//!
//! **Percent Coordinates** (used in formation templates):
//! - X: 0 = left touchline, 100 = right touchline
//! - Y: 0 = top of the pitch graphic, 100 = bottom (own goal)
//! - Slot templates store the CENTER of the marker in this space.
//!
//! **Pixel Coordinates** (used for hit-testing, reported by the host view):
//! - Origin at the top-left of the rendered pitch, in view pixels.
//! - `Rect` is top-left anchored with a width and height.
//!
//! Percent coordinates are layout-independent. Pixel rects are only valid
//! for the most recent layout pass and are cached per slot id.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Squared distance to another point (for comparisons without sqrt overhead).
    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// An axis-aligned rectangle in pixel coordinates, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// Containment check. Both edges are inclusive, so a point exactly on
    /// the right or bottom edge still counts as inside.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grow the rectangle by `pad` pixels on every side. Negative padding
    /// shrinks it; width and height are floored at zero.
    #[inline]
    pub fn inflate(self, pad: f32) -> Rect {
        Rect {
            x: self.x - pad,
            y: self.y - pad,
            width: (self.width + pad * 2.0).max(0.0),
            height: (self.height + pad * 2.0).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges_inclusive() {
        let rect = Rect::new(10.0, 20.0, 40.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 20.0)), "top-left corner should be inside");
        assert!(rect.contains(Point::new(50.0, 70.0)), "bottom-right corner should be inside");
        assert!(rect.contains(Point::new(30.0, 45.0)), "interior point should be inside");
        assert!(!rect.contains(Point::new(9.9, 45.0)), "left of rect should be outside");
        assert!(!rect.contains(Point::new(50.1, 45.0)), "right of rect should be outside");
        assert!(!rect.contains(Point::new(30.0, 70.1)), "below rect should be outside");
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 20.0, 40.0, 60.0);
        let c = rect.center();
        assert!((c.x - 30.0).abs() < f32::EPSILON, "center x should be 30, got {}", c.x);
        assert!((c.y - 50.0).abs() < f32::EPSILON, "center y should be 50, got {}", c.y);
    }

    #[test]
    fn test_inflate_grows_every_side() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        let padded = rect.inflate(5.0);
        assert!(padded.contains(Point::new(5.0, 5.0)));
        assert!(padded.contains(Point::new(35.0, 35.0)));
        assert!(!rect.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_inflate_negative_floors_at_zero() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        let shrunk = rect.inflate(-10.0);
        assert_eq!(shrunk.width, 0.0);
        assert_eq!(shrunk.height, 0.0);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6, "3-4-5 triangle, got {}", a.distance(b));
        assert!((a.distance_squared(b) - 25.0).abs() < 1e-6);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a rect always contains its own center.
            #[test]
            fn prop_rect_contains_center(
                x in -500.0f32..500.0f32,
                y in -500.0f32..500.0f32,
                w in 0.0f32..400.0f32,
                h in 0.0f32..400.0f32
            ) {
                let rect = Rect::new(x, y, w, h);
                prop_assert!(rect.contains(rect.center()));
            }

            /// Property: inflating by a non-negative pad never loses containment.
            #[test]
            fn prop_inflate_preserves_containment(
                px in -100.0f32..200.0f32,
                py in -100.0f32..200.0f32,
                pad in 0.0f32..50.0f32
            ) {
                let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
                let p = Point::new(px, py);
                if rect.contains(p) {
                    prop_assert!(rect.inflate(pad).contains(p));
                }
            }

            /// Property: distance is symmetric.
            #[test]
            fn prop_distance_symmetric(
                ax in -1000.0f32..1000.0f32,
                ay in -1000.0f32..1000.0f32,
                bx in -1000.0f32..1000.0f32,
                by in -1000.0f32..1000.0f32
            ) {
                let a = Point::new(ax, ay);
                let b = Point::new(bx, by);
                prop_assert!((a.distance(b) - b.distance(a)).abs() < 1e-3);
            }
        }
    }
}
