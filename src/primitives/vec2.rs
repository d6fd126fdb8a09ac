//! 2D vector type for offsets between points.

use num_traits::Float;

/// A 2D vector, typically the offset from one triangle vertex to another.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_length() {
        let a: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(Vec2::new(1.0, 2.0)), 11.0);
        assert_eq!(a.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_perpendicular_dot_is_zero() {
        let a: Vec2<f64> = Vec2::new(2.0, -1.0);
        assert_eq!(a.dot(Vec2::new(1.0, 2.0)), 0.0);
    }
}
