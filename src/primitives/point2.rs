//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::fmt;
use std::ops::Sub;

/// A point in the plane, such as a query point or a placed triangle vertex.
///
/// # Example
///
/// ```
/// use triarea::primitives::Point2;
///
/// let p: Point2<f64> = Point2::new(1.0, 0.5);
/// assert_eq!(p.to_string(), "(1, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns the squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
