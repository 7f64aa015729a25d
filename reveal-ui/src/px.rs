//! Physical pixel coordinates for hosts and components.
//!
//! Hosts report element bounding boxes and pointer coordinates in physical
//! pixels. These types carry those measurements into the component layer.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel coordinate value that supports negative
//!   values (elements scrolled off-screen report negative origins)
//! - [`PxPosition`] - A 2D position in physical pixel space
//! - [`PxSize`] - A 2D size in physical pixel space
//! - [`PxRect`] - An axis-aligned bounding box, as returned by a layout query
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the viewport
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use reveal_ui::px::{Px, PxPosition, PxRect};
//!
//! let region = PxRect::new(Px::new(100), Px::new(40), Px::new(600), Px::new(400));
//! let pointer = PxPosition::new(Px::new(400), Px::new(200));
//!
//! assert!(region.contains(pointer));
//! assert_eq!(region.right(), Px::new(700));
//! ```

/// A physical pixel coordinate value.
///
/// Supports negative values and saturating arithmetic. Conversions from
/// floating point clamp to the representable range instead of overflowing.
///
/// # Examples
///
/// ```
/// use reveal_ui::px::Px;
///
/// let px1 = Px::new(100);
/// let px2 = Px::new(-50);
///
/// assert_eq!(px1 + px2, Px::new(50));
/// assert_eq!(Px::new(i32::MAX).saturating_add(px1), Px::new(i32::MAX));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Creates a new `Px` instance from an i32 value.
    ///
    /// ```
    /// use reveal_ui::px::Px;
    ///
    /// let positive = Px::new(100);
    /// let negative = Px::new(-50);
    /// assert_eq!(positive.raw() + negative.raw(), 50);
    /// ```
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing.
    ///
    /// NaN maps to zero.
    ///
    /// ```
    /// use reveal_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// assert_eq!(Px::saturating_from_f32(f32::MIN).raw(), i32::MIN);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Returns `true` when the value is strictly greater than zero.
    ///
    /// Layout queries against elements that are not mounted yet report a zero
    /// size; callers use this to tell a real measurement from a placeholder.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxPosition {
    /// The x-coordinate (horizontal position) in pixels
    pub x: Px,
    /// The y-coordinate (vertical position) in pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the origin point (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width dimension in pixels
    pub width: Px,
    /// The height dimension in pixels
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height values.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in physical pixel space.
///
/// This is the shape of a bounding-box query: the origin is the element's
/// top-left corner in viewport coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The left edge.
    pub fn left(&self) -> Px {
        self.x
    }

    /// The right edge (exclusive).
    pub fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// The top edge.
    pub fn top(&self) -> Px {
        self.y
    }

    /// The bottom edge (exclusive).
    pub fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }

    /// The size of the rectangle.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a / 2, Px(5));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
        assert_eq!(Px::saturating_from_f32(f32::NAN), Px(0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = PxRect::new(Px(50), Px(10), Px(600), Px(400));
        assert_eq!(rect.left(), Px(50));
        assert_eq!(rect.right(), Px(650));
        assert_eq!(rect.top(), Px(10));
        assert_eq!(rect.bottom(), Px(410));
        assert_eq!(rect.size(), PxSize::new(Px(600), Px(400)));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = PxRect::new(Px(0), Px(0), Px(100), Px(100));
        assert!(rect.contains(PxPosition::new(Px(0), Px(0))));
        assert!(rect.contains(PxPosition::new(Px(99), Px(99))));
        assert!(!rect.contains(PxPosition::new(Px(100), Px(50))));
        assert!(!rect.contains(PxPosition::new(Px(-1), Px(50))));
    }

    #[test]
    fn test_zero_rect_is_not_measurable() {
        assert!(!PxRect::ZERO.width.is_positive());
        assert!(PxRect::new(Px(0), Px(0), Px(1), Px(1)).width.is_positive());
    }
}
