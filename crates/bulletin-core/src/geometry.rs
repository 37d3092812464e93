#![forbid(unsafe_code)]

//! Geometry primitives in logical units.
//!
//! All values are `f64` logical points (not pixels). The y axis grows
//! downward, so "down the screen" is a positive `dy`.

/// A point (or a 2D vector such as a translation or velocity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// An empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Whether the point lies inside the rectangle (half-open on right/bottom).
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Shift the rectangle by the transform's translation.
    pub fn apply(self, transform: Transform) -> Self {
        Self::new(
            self.x + transform.tx,
            self.y + transform.ty,
            self.width,
            self.height,
        )
    }

    /// Shrink the rectangle by the given insets.
    ///
    /// Never produces negative dimensions.
    pub fn inset(self, insets: EdgeInsets) -> Self {
        let width = (self.width - insets.left - insets.right).max(0.0);
        let height = (self.height - insets.top - insets.bottom).max(0.0);
        Self::new(self.x + insets.left, self.y + insets.top, width, height)
    }

    /// Linear interpolation between two rectangles.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            lerp(self.x, to.x, t),
            lerp(self.y, to.y, t),
            lerp(self.width, to.width, t),
            lerp(self.height, to.height, t),
        )
    }
}

/// Insets from each edge (safe area, padding).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create new insets.
    #[inline]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with only the bottom edge set.
    #[inline]
    pub const fn bottom(bottom: f64) -> Self {
        Self::new(0.0, 0.0, bottom, 0.0)
    }
}

/// A 2D translation applied on top of a resolved frame.
///
/// Only translation is modeled; the card never scales or rotates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self { tx: 0.0, ty: 0.0 };

    /// Pure translation.
    #[inline]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self { tx, ty }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self.tx == 0.0 && self.ty == 0.0
    }

    /// Linear interpolation between two transforms.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::translation(lerp(self.tx, to.tx, t), lerp(self.ty, to.ty, t))
    }
}

/// Linear interpolation, `t` unclamped.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 19.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 20.0)));
        assert!(!r.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn rect_apply_translates_origin_only() {
        let r = Rect::new(0.0, 100.0, 50.0, 40.0).apply(Transform::translation(0.0, 25.0));
        assert_eq!(r, Rect::new(0.0, 125.0, 50.0, 40.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(EdgeInsets::new(8.0, 8.0, 8.0, 8.0));
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rect::new(5.0, 10.0, 20.0, 25.0));
    }

    #[test]
    fn identity_transform() {
        assert!(Transform::IDENTITY.is_identity());
        assert!(!Transform::translation(0.0, 1.0).is_identity());
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }
}
