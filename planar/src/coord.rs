//! Adapter interface for ingesting foreign two-component values.

use crate::error::PlanarError;
use crate::number::Number;
use crate::vec2::Vec2;

/// Read-only view of a value holding an `x`/`y` coordinate pair.
///
/// Implement this for a foreign vector-like type to make it usable with
/// [`Vec2::from_coord`]. The crate provides impls for `Vec2` itself and
/// for the structural shapes `(N, N)` and `[N; 2]`.
pub trait Coord2d {
    /// Component type of the coordinates.
    type Num: Number;

    /// First (horizontal) component.
    fn x(&self) -> Self::Num;

    /// Second (vertical) component.
    fn y(&self) -> Self::Num;
}

impl<N: Number> Coord2d for Vec2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Number> Coord2d for (N, N) {
    type Num = N;

    fn x(&self) -> N {
        self.0
    }

    fn y(&self) -> N {
        self.1
    }
}

impl<N: Number> Coord2d for [N; 2] {
    type Num = N;

    fn x(&self) -> N {
        self[0]
    }

    fn y(&self) -> N {
        self[1]
    }
}

impl<N: Number> From<(N, N)> for Vec2<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: Number> From<[N; 2]> for Vec2<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: Number> TryFrom<&[N]> for Vec2<N> {
    type Error = PlanarError;

    fn try_from(slice: &[N]) -> Result<Self, Self::Error> {
        match slice {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(PlanarError::InvalidComponentCount(slice.len())),
        }
    }
}
