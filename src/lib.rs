//! triarea - compare triangles given by their side lengths
//!
//! A [`Triangle`] is built from three positive side lengths, either directly
//! or parsed from text such as `3,4,5`. It reports its area via Heron's
//! formula, compares to other triangles by area, and tests whether a point
//! lies inside it. The [`session`] module wraps this in the console dialogue
//! used by the `triarea` binary.

#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod primitives;
pub mod session;
pub mod triangle;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use error::{ErrorKind, Result, TriangleError};
pub use input::{parse_point, parse_values};
pub use primitives::{Point2, Vec2};
pub use session::{Report, Session, SessionSettings};
pub use triangle::{barycentric, compare_areas, AreaComparison, Containment, Triangle};
