//! Triangles described by their three side lengths.
//!
//! A [`Triangle`] knows nothing about where it sits in the plane. Area comes
//! straight from Heron's formula. Point containment needs vertices, so the
//! triangle is first placed canonically: `A` at the origin, `B` on the
//! positive x axis and `C` above it.
//!
//! # Example
//!
//! ```
//! use triarea::{Point2, Triangle};
//!
//! let t: Triangle<f64> = "3,4,5".parse().unwrap();
//! assert_eq!(t.area(), 6.0);
//! assert!(t.contains_point(Point2::new(1.0, 0.5)));
//! ```

use crate::error::{Result, TriangleError};
use crate::input::parse_values;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a query point is tested against a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Containment {
    /// Place the triangle canonically and use its barycentric coordinates.
    #[default]
    Placed,
    /// Treat the side lengths themselves as coordinates.
    ///
    /// This is the historical behaviour of the exercise this tool replaces.
    /// It is not a geometric containment test: the "triangle" it checks has
    /// no fixed relation to the one described by the sides.
    SideCoordinates,
}

/// Outcome of comparing two triangles by area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaComparison {
    /// The first triangle has the strictly larger area.
    FirstLarger,
    /// The second triangle has the strictly larger area.
    SecondLarger,
    /// Neither area is larger. Also reported when an area is NaN.
    Equal,
}

/// A triangle given by the lengths of its sides.
///
/// Side `a` is opposite vertex `A`, `b` opposite `B` and `c` opposite `C`.
/// Every side is positive and finite; the triangle inequality is *not*
/// enforced, so impossible triangles such as `1,1,10` can be built and
/// report a NaN area. Use [`Triangle::is_valid`] to detect them.
///
/// Equality and ordering compare areas exactly, so two differently shaped
/// triangles with the same area are equal.
#[derive(Debug, Clone)]
pub struct Triangle<F> {
    a: F,
    b: F,
    c: F,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three side lengths.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::InvalidSide`] for the first side that is not
    /// a positive finite number.
    pub fn new(a: F, b: F, c: F) -> Result<Self> {
        for (name, side) in [("a", a), ("b", b), ("c", c)] {
            if !(side > F::zero()) || side.is_infinite() {
                return Err(TriangleError::InvalidSide {
                    name,
                    value: side.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self { a, b, c })
    }

    #[inline]
    pub fn a(&self) -> F {
        self.a
    }

    #[inline]
    pub fn b(&self) -> F {
        self.b
    }

    #[inline]
    pub fn c(&self) -> F {
        self.c
    }

    /// Returns the sides as `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [F; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn perimeter(&self) -> F {
        self.a + self.b + self.c
    }

    #[inline]
    pub fn semi_perimeter(&self) -> F {
        self.perimeter() / (F::one() + F::one())
    }

    /// Returns the area using Heron's formula.
    ///
    /// NaN when the sides violate the triangle inequality.
    pub fn area(&self) -> F {
        let s = self.semi_perimeter();
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }

    /// Returns `true` if the sides satisfy the strict triangle inequality.
    pub fn is_valid(&self) -> bool {
        self.a + self.b > self.c && self.a + self.c > self.b && self.b + self.c > self.a
    }

    /// Returns `true` if the sides cannot close into a triangle with positive area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the canonical placement `[A, B, C]`.
    ///
    /// `A = (0, 0)`, `B = (c, 0)` and `C` lies above the x axis with
    /// `|BC| = a` and `|CA| = b`. Returns `None` for degenerate triangles.
    pub fn vertices(&self) -> Option<[Point2<F>; 3]> {
        if self.is_degenerate() {
            return None;
        }

        let two = F::one() + F::one();
        let (a, b, c) = (self.a, self.b, self.c);
        let cx = (b * b + c * c - a * a) / (two * c);
        let cy = (b * b - cx * cx).max(F::zero()).sqrt();

        Some([
            Point2::origin(),
            Point2::new(c, F::zero()),
            Point2::new(cx, cy),
        ])
    }

    /// Tests whether `point` lies inside the canonically placed triangle.
    ///
    /// The boundary counts as inside. Degenerate triangles contain nothing.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        self.contains_point_with(point, Containment::Placed)
    }

    /// Tests `point` using the given containment rule.
    pub fn contains_point_with(&self, point: Point2<F>, mode: Containment) -> bool {
        let weights = match mode {
            Containment::Placed => self
                .vertices()
                .and_then(|[a, b, c]| barycentric(point, a, b, c)),
            Containment::SideCoordinates => Some(self.side_coordinate_weights(point)),
        };

        weights.is_some_and(|(u, v, w)| in_unit(u) && in_unit(v) && in_unit(w))
    }

    // Weights of the historical test. A zero denominator yields NaN or an
    // infinity, both of which fail the unit-interval check.
    fn side_coordinate_weights(&self, point: Point2<F>) -> (F, F, F) {
        let (a, b, c) = (self.a, self.b, self.c);
        let (dx, dy) = (point.x - c, point.y - c);

        let denominator = (b - c) * (a - c) + c * c - b * b;
        let u = ((b - c) * dx + (c * c - b * b) * dy) / denominator;
        let v = ((c - a) * dx + (a * a - c * c) * dy) / denominator;

        (u, v, F::one() - u - v)
    }
}

impl<F: Float + FromStr> Triangle<F> {
    /// Parses a triangle from `a,b,c`.
    ///
    /// # Errors
    ///
    /// [`TriangleError::WrongValueCount`] or [`TriangleError::InvalidNumber`]
    /// for malformed text, [`TriangleError::InvalidSide`] for bad lengths.
    pub fn parse(input: &str) -> Result<Self> {
        let [a, b, c] = parse_values::<F, 3>(input)?;
        Self::new(a, b, c)
    }
}

impl<F: Float + FromStr> FromStr for Triangle<F> {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.area() == other.area()
    }
}

impl<F: Float> PartialOrd for Triangle<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.area().partial_cmp(&other.area())
    }
}

impl<F: fmt::Display> fmt::Display for Triangle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle with sides: {}, {}, {}", self.a, self.b, self.c)
    }
}

impl<F> Drop for Triangle<F> {
    fn drop(&mut self) {
        tracing::trace!("triangle dropped");
    }
}

impl From<&Triangle<f64>> for f64 {
    fn from(triangle: &Triangle<f64>) -> f64 {
        triangle.area()
    }
}

impl From<&Triangle<f32>> for f32 {
    fn from(triangle: &Triangle<f32>) -> f32 {
        triangle.area()
    }
}

/// Compares two triangles by area.
pub fn compare_areas<F: Float>(first: &Triangle<F>, second: &Triangle<F>) -> AreaComparison {
    if first > second {
        AreaComparison::FirstLarger
    } else if first < second {
        AreaComparison::SecondLarger
    } else {
        AreaComparison::Equal
    }
}

/// Computes the barycentric coordinates `(u, v, w)` of `p` with respect to
/// the triangle `a`, `b`, `c`, so that `p = u*a + v*b + w*c`.
///
/// Returns `None` if the three vertices are collinear.
pub fn barycentric<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> Option<(F, F, F)> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    if denom == F::zero() || denom.is_nan() {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some((F::one() - v - w, v, w))
}

#[inline]
fn in_unit<F: Float>(t: F) -> bool {
    t >= F::zero() && t <= F::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn tri(a: f64, b: f64, c: f64) -> Triangle<f64> {
        Triangle::new(a, b, c).unwrap()
    }

    #[test]
    fn test_area_heron() {
        assert_eq!(tri(3.0, 4.0, 5.0).area(), 6.0);
        assert_eq!(tri(6.0, 8.0, 10.0).area(), 24.0);
        assert_relative_eq!(
            tri(1.0, 1.0, 1.0).area(),
            3.0_f64.sqrt() / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_area_f32() {
        let t: Triangle<f32> = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_relative_eq!(t.area(), 6.0_f32, epsilon = 1e-5);
        assert_relative_eq!(f32::from(&t), 6.0_f32, epsilon = 1e-5);
    }

    #[test]
    fn test_rejects_non_positive_sides() {
        let err = Triangle::new(0.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TriangleError::InvalidSide { name: "a", value } if value == 0.0
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Triangle::new(-1.0, 2.0, 2.0).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidSide { name: "a", .. }));

        let err = Triangle::new(2.0, 2.0, -0.5).unwrap_err();
        assert!(matches!(err, TriangleError::InvalidSide { name: "c", .. }));
    }

    #[test]
    fn test_rejects_nan_and_infinite_sides() {
        assert!(Triangle::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(Triangle::new(1.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_impossible_sides_are_accepted() {
        let t = tri(1.0, 1.0, 10.0);
        assert!(t.is_degenerate());
        assert!(t.area().is_nan());
        assert!(t.vertices().is_none());
        assert!(!t.contains_point(Point2::origin()));
    }

    #[test]
    fn test_flat_triangle() {
        let t = tri(1.0, 2.0, 3.0);
        assert!(!t.is_valid());
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn test_parse() {
        let parsed: Triangle<f64> = Triangle::parse("3,4,5").unwrap();
        assert_eq!(parsed, tri(3.0, 4.0, 5.0));
        assert_eq!(parsed.sides(), [3.0, 4.0, 5.0]);

        let via_from_str: Triangle<f64> = " 6 , 8 , 10 ".parse().unwrap();
        assert_eq!(via_from_str.area(), 24.0);
    }

    #[test]
    fn test_parse_errors() {
        let err = Triangle::<f64>::parse("1,2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = Triangle::<f64>::parse("a,b,c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, TriangleError::InvalidNumber { ref token } if token == "a"));

        let err = Triangle::<f64>::parse("0,1,1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_comparison_by_area() {
        let small = tri(3.0, 4.0, 5.0);
        let large = tri(6.0, 8.0, 10.0);

        assert!(small < large);
        assert!(large > small);
        assert_ne!(small, large);
        assert_eq!(small, tri(5.0, 3.0, 4.0));

        assert_eq!(compare_areas(&large, &small), AreaComparison::FirstLarger);
        assert_eq!(compare_areas(&small, &large), AreaComparison::SecondLarger);
        assert_eq!(compare_areas(&small, &small.clone()), AreaComparison::Equal);
    }

    #[test]
    fn test_nan_area_compares_equal_outcome() {
        let broken = tri(1.0, 1.0, 10.0);
        let fine = tri(3.0, 4.0, 5.0);
        assert_ne!(broken, broken.clone());
        assert_eq!(compare_areas(&broken, &fine), AreaComparison::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            tri(3.0, 4.0, 5.5).to_string(),
            "Triangle with sides: 3, 4, 5.5"
        );
    }

    #[test]
    fn test_area_conversion() {
        let t = tri(6.0, 8.0, 10.0);
        assert_eq!(f64::from(&t), 24.0);
    }

    #[test]
    fn test_vertices_reproduce_sides() {
        let t = tri(3.0, 4.0, 5.0);
        let [a, b, c] = t.vertices().unwrap();

        assert_eq!(a, Point2::origin());
        assert_eq!(b, Point2::new(5.0, 0.0));
        assert_relative_eq!(c.x, 3.2, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.4, epsilon = 1e-12);

        assert_relative_eq!(b.distance(c), 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.distance(a), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_contains_point_placed() {
        let t = tri(3.0, 4.0, 5.0);

        assert!(t.contains_point(Point2::new(1.0, 0.5)));
        assert!(t.contains_point(Point2::new(3.2, 2.0)));
        assert!(!t.contains_point(Point2::new(1.0, 1.0)));
        assert!(!t.contains_point(Point2::new(3.0, -0.1)));
        assert!(!t.contains_point(Point2::new(6.0, 0.0)));
    }

    #[test]
    fn test_contains_vertices() {
        let t = tri(3.0, 4.0, 5.0);
        assert!(t.contains_point(Point2::origin()));
        assert!(t.contains_point(Point2::new(5.0, 0.0)));
        assert!(t.contains_point(Point2::new(3.2, 2.4)));

        let [_, _, c] = t.vertices().unwrap();
        assert!(t.contains_point(c));
    }

    #[test]
    fn test_contains_point_side_coordinates() {
        let t = tri(3.0, 4.0, 5.0);
        let mode = Containment::SideCoordinates;

        assert!(t.contains_point_with(Point2::new(5.0, 5.0), mode));
        assert!(!t.contains_point_with(Point2::new(1.0, 1.0), mode));
        assert!(!t.contains_point_with(Point2::new(4.0, 4.0), mode));
    }

    #[test]
    fn test_side_coordinates_zero_denominator() {
        // (b - c)(a - c) + c² - b² vanishes for equilateral sides.
        let t = tri(2.0, 2.0, 2.0);
        let mode = Containment::SideCoordinates;
        assert!(!t.contains_point_with(Point2::new(1.0, 1.0), mode));
        assert!(!t.contains_point_with(Point2::new(2.0, 2.0), mode));
    }

    #[test]
    fn test_barycentric() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);

        let (u, v, w) = barycentric(Point2::new(1.0, 1.0), a, b, c).unwrap();
        assert_relative_eq!(u, 0.5, epsilon = 1e-12);
        assert_relative_eq!(v, 0.25, epsilon = 1e-12);
        assert_relative_eq!(w, 0.25, epsilon = 1e-12);

        let collinear = Point2::new(8.0, 0.0);
        assert!(barycentric(Point2::new(1.0, 1.0), a, b, collinear).is_none());
    }
}
