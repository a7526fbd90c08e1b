//! Generic 2d vector value type for numeric coordinates.
//!
//! The crate provides a single value type, [`Vec2`], holding a pair of
//! same-typed numeric components, together with the trait layer that
//! decides at compile time which component types and type combinations
//! are legal: [`Number`] for qualifying scalars and [`Operand`] for
//! operable pairs. Arithmetic, conversions, equality, bit-pattern
//! hashing and text formatting are covered; vector geometry (dot
//! product, length, normalization) is out of scope.
//!
//! ```
//! use planar::{Vec2, Vec2I32};
//!
//! let mut position = Vec2I32::new(32, 42);
//! position *= 2;
//! position += Vec2::new(0, 4);
//!
//! assert_eq!(position, Vec2::new(64, 88));
//! assert_eq!(position.to_string(), "64 88");
//! ```
//!
//! Foreign two-component values are ingested through the [`Coord2d`]
//! adapter trait; impls for `nalgebra` points and vectors are available
//! behind the default-on `nalgebra` feature.

mod coord;
mod error;
mod hash;
#[cfg(feature = "nalgebra")]
mod nalgebra;
mod number;
mod ops;
mod vec2;

pub use coord::Coord2d;
pub use error::PlanarError;
pub use number::{Number, Operand};
pub use vec2::Vec2;

/// Vector of `u8` components.
pub type Vec2U8 = Vec2<u8>;
/// Vector of `u16` components.
pub type Vec2U16 = Vec2<u16>;
/// Vector of `u32` components.
pub type Vec2U32 = Vec2<u32>;
/// Vector of `u64` components.
pub type Vec2U64 = Vec2<u64>;
/// Vector of `i8` components.
pub type Vec2I8 = Vec2<i8>;
/// Vector of `i16` components.
pub type Vec2I16 = Vec2<i16>;
/// Vector of `i32` components.
pub type Vec2I32 = Vec2<i32>;
/// Vector of `i64` components.
pub type Vec2I64 = Vec2<i64>;
/// Vector of `f32` components.
pub type Vec2F32 = Vec2<f32>;
/// Vector of `f64` components.
pub type Vec2F64 = Vec2<f64>;
