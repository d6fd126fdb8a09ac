//! Floating-point plane primitives used to place triangles and query points.

mod point2;
mod vec2;

pub use point2::Point2;
pub use vec2::Vec2;
