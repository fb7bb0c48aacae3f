//! Plain rectangle value type
//!
//! Framework-free geometry used by the layout and crop modules so the
//! core math stays testable without any GUI dependency.

/// Axis-aligned rectangle in integer pixel coordinates.
///
/// Half-open on the right/bottom edge: a pixel (px, py) is inside iff
/// `x0 <= px < x1 && y0 <= py < y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x0: i32,
    /// Top edge (inclusive)
    pub y0: i32,
    /// Right edge (exclusive)
    pub x1: i32,
    /// Bottom edge (exclusive)
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width as i32,
            y1: y + height as i32,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }

    /// True if `self` lies entirely within `bounds` (edges may touch).
    pub fn contained_in(&self, bounds: &Rect) -> bool {
        self.x0 >= bounds.x0 && self.y0 >= bounds.y0 && self.x1 <= bounds.x1 && self.y1 <= bounds.y1
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size(100, -50, 1920, 1080);
        assert_eq!(r.x0, 100);
        assert_eq!(r.y0, -50);
        assert_eq!(r.x1, 2020);
        assert_eq!(r.y1, 1030);
        assert_eq!(r.width(), 1920);
        assert_eq!(r.height(), 1080);
    }

    #[test]
    fn test_containment() {
        let bounds = Rect::from_origin_size(0, 0, 1920, 1080);
        let inner = Rect::from_origin_size(10, 10, 100, 100);
        let edge = Rect::from_origin_size(0, 0, 1920, 1080);
        let spill = Rect::from_origin_size(1900, 0, 100, 100);

        assert!(inner.contained_in(&bounds));
        assert!(edge.contained_in(&bounds));
        assert!(!spill.contained_in(&bounds));
    }

    #[test]
    fn test_degenerate_width_clamps_to_zero() {
        let r = Rect {
            x0: 10,
            y0: 10,
            x1: 5,
            y1: 20,
        };
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 10);
    }
}
