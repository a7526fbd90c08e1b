//! Compile-time constraints on the types usable as vector components.

use num_traits::{AsPrimitive, NumAssign};

/// A scalar type that qualifies as a component of [`Vec2`](crate::Vec2).
///
/// Implemented for every type supporting the full arithmetic operator set
/// (`+ - * / %` in binary and compound-assignment form), equality and
/// ordering comparisons, and copy semantics. All built-in integer and
/// float types qualify, as does any user type implementing
/// [`num_traits::NumAssign`]. Using a non-qualifying type as a component
/// is rejected at compile time; there is no runtime check.
pub trait Number: NumAssign + PartialOrd + Copy + 'static {}

impl<T: NumAssign + PartialOrd + Copy + 'static> Number for T {}

/// A scalar type usable as the right-hand operand of operations on
/// vectors with `N` components.
///
/// Two component types form an operable pair when the right one converts
/// into the left one with `as`-cast semantics ([`num_traits::AsPrimitive`]).
/// Mixed-type vector operators convert the right operand to `N` first and
/// then combine, so their result keeps the left operand's component type.
/// Combining an inoperable pair is rejected at compile time.
pub trait Operand<N: Number>: Number + AsPrimitive<N> {}

impl<N: Number, T: Number + AsPrimitive<N>> Operand<N> for T {}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

    use num_traits::{AsPrimitive, Num, One, Zero};

    use crate::Vec2;

    // A minimal user-defined scalar: a fixed-point millimeter count.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Millis(i64);

    impl Add for Millis {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Self(self.0 + rhs.0)
        }
    }

    impl Sub for Millis {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Self(self.0 - rhs.0)
        }
    }

    impl Mul for Millis {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Self(self.0 * rhs.0 / 1000)
        }
    }

    impl Div for Millis {
        type Output = Self;
        fn div(self, rhs: Self) -> Self {
            Self(self.0 * 1000 / rhs.0)
        }
    }

    impl Rem for Millis {
        type Output = Self;
        fn rem(self, rhs: Self) -> Self {
            Self(self.0 % rhs.0)
        }
    }

    impl AddAssign for Millis {
        fn add_assign(&mut self, rhs: Self) {
            *self = *self + rhs;
        }
    }

    impl SubAssign for Millis {
        fn sub_assign(&mut self, rhs: Self) {
            *self = *self - rhs;
        }
    }

    impl MulAssign for Millis {
        fn mul_assign(&mut self, rhs: Self) {
            *self = *self * rhs;
        }
    }

    impl DivAssign for Millis {
        fn div_assign(&mut self, rhs: Self) {
            *self = *self / rhs;
        }
    }

    impl RemAssign for Millis {
        fn rem_assign(&mut self, rhs: Self) {
            *self = *self % rhs;
        }
    }

    impl Zero for Millis {
        fn zero() -> Self {
            Self(0)
        }

        fn is_zero(&self) -> bool {
            self.0 == 0
        }
    }

    impl One for Millis {
        fn one() -> Self {
            Self(1000)
        }
    }

    impl Num for Millis {
        type FromStrRadixErr = ParseIntError;

        fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
            i64::from_str_radix(str, radix).map(Self)
        }
    }

    impl AsPrimitive<Millis> for Millis {
        fn as_(self) -> Millis {
            self
        }
    }

    #[test]
    fn user_defined_scalar_qualifies() {
        let mut v = Vec2::new(Millis(2000), Millis(3000));
        v += Vec2::new(Millis(500), Millis(250));

        assert_eq!(v, Vec2::new(Millis(2500), Millis(3250)));
        assert_eq!(Vec2::<Millis>::default().x(), Millis(0));

        let sum = v + Vec2::new(Millis(500), Millis(750));
        assert_eq!(sum, Vec2::new(Millis(3000), Millis(4000)));
    }
}
