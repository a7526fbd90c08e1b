use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{AsPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::coord::Coord2d;
use crate::number::{Number, Operand};

/// A pair of same-typed numeric coordinates with plain value semantics.
///
/// `Vec2` is `Copy`, allocates nothing and owns no resources. Both
/// components always have the same concrete component type; converting
/// between component types is an explicit element-wise [`cast`](Vec2::cast).
///
/// ```
/// use planar::Vec2;
///
/// let v = Vec2::new(32, 42) * 2;
/// assert_eq!((v.x(), v.y()), (64, 84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec2<N = f64> {
    pub(crate) x: N,
    pub(crate) y: N,
}

impl<N: Number> Vec2<N> {
    /// Creates a new vector from two same-typed components.
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// Creates a new vector from two values independently convertible to
    /// the component type with `as`-cast semantics.
    ///
    /// ```
    /// use planar::Vec2;
    ///
    /// assert_eq!(Vec2::<u8>::from_xy(32.75f32, 42u64), Vec2::new(32, 42));
    /// ```
    pub fn from_xy<X, Y>(x: X, y: Y) -> Self
    where
        X: Operand<N>,
        Y: Operand<N>,
    {
        Self::new(x.as_(), y.as_())
    }

    /// Creates a new vector from any two-component coordinate value,
    /// converting each component with `as`-cast semantics.
    pub fn from_coord<P>(coord: &P) -> Self
    where
        P: Coord2d,
        P::Num: Operand<N>,
    {
        Self::new(coord.x().as_(), coord.y().as_())
    }

    /// Element-wise conversion to another component type, with the same
    /// rules as a direct scalar `as` cast.
    ///
    /// ```
    /// use planar::Vec2;
    ///
    /// let v = Vec2::new(32.75f32, 42.25).cast::<u8>();
    /// assert_eq!(v, Vec2::new(32, 42));
    /// ```
    pub fn cast<M>(self) -> Vec2<M>
    where
        M: Number,
        N: AsPrimitive<M>,
    {
        Vec2::new(self.x.as_(), self.y.as_())
    }

    /// First (horizontal) component.
    pub fn x(&self) -> N {
        self.x
    }

    /// Second (vertical) component.
    pub fn y(&self) -> N {
        self.y
    }

    /// Mutable access to the first component.
    pub fn x_mut(&mut self) -> &mut N {
        &mut self.x
    }

    /// Mutable access to the second component.
    pub fn y_mut(&mut self) -> &mut N {
        &mut self.y
    }

    /// Compares coordinate values across component types, promoting both
    /// sides to `f64` first.
    ///
    /// The usual mixed-type comparison caveats carry through: a truncated
    /// integer copy of a fractional vector is not value-equal to the
    /// original, and integers beyond 2^53 inherit `f64` rounding.
    pub fn value_eq<O>(&self, other: &Vec2<O>) -> bool
    where
        N: AsPrimitive<f64>,
        O: Number + AsPrimitive<f64>,
    {
        let (x1, y1): (f64, f64) = (self.x.as_(), self.y.as_());
        let (x2, y2): (f64, f64) = (other.x.as_(), other.y.as_());
        x1 == x2 && y1 == y2
    }
}

impl<N: Number> Default for Vec2<N> {
    fn default() -> Self {
        Self::new(N::zero(), N::zero())
    }
}

impl<N: Number + AsPrimitive<N>> Zero for Vec2<N> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<N: Number + fmt::Display> fmt::Display for Vec2<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl<N> AbsDiffEq for Vec2<N>
where
    N: Number + AbsDiffEq,
    N::Epsilon: Copy,
{
    type Epsilon = N::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<N> RelativeEq for Vec2<N>
where
    N: Number + RelativeEq,
    N::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        N::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
