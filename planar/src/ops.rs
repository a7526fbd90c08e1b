use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::number::{Number, Operand};
use crate::vec2::Vec2;

impl<N: Number + Neg<Output = N>> Neg for Vec2<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<N: Number, O: Operand<N>> AddAssign<Vec2<O>> for Vec2<N> {
    fn add_assign(&mut self, rhs: Vec2<O>) {
        self.x += rhs.x.as_();
        self.y += rhs.y.as_();
    }
}

impl<N: Number, O: Operand<N>> SubAssign<Vec2<O>> for Vec2<N> {
    fn sub_assign(&mut self, rhs: Vec2<O>) {
        self.x -= rhs.x.as_();
        self.y -= rhs.y.as_();
    }
}

impl<N: Number, O: Operand<N>> MulAssign<O> for Vec2<N> {
    fn mul_assign(&mut self, rhs: O) {
        let value: N = rhs.as_();
        self.x *= value;
        self.y *= value;
    }
}

impl<N: Number, O: Operand<N>> DivAssign<O> for Vec2<N> {
    fn div_assign(&mut self, rhs: O) {
        let value: N = rhs.as_();
        self.x /= value;
        self.y /= value;
    }
}

impl<N: Number, O: Operand<N>> RemAssign<O> for Vec2<N> {
    fn rem_assign(&mut self, rhs: O) {
        let value: N = rhs.as_();
        self.x %= value;
        self.y %= value;
    }
}

// The free operators are built on top of the compound-assignment forms.

impl<N: Number, O: Operand<N>> Add<Vec2<O>> for Vec2<N> {
    type Output = Self;

    fn add(mut self, rhs: Vec2<O>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<N: Number, O: Operand<N>> Sub<Vec2<O>> for Vec2<N> {
    type Output = Self;

    fn sub(mut self, rhs: Vec2<O>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<N: Number, O: Operand<N>> Mul<O> for Vec2<N> {
    type Output = Self;

    fn mul(mut self, rhs: O) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<N: Number, O: Operand<N>> Div<O> for Vec2<N> {
    type Output = Self;

    fn div(mut self, rhs: O) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<N: Number, O: Operand<N>> Rem<O> for Vec2<N> {
    type Output = Self;

    fn rem(mut self, rhs: O) -> Self::Output {
        self %= rhs;
        self
    }
}
