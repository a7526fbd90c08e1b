use nalgebra::{Point2, Scalar, Vector2};

use crate::coord::Coord2d;
use crate::number::Number;

impl<N: Number + Scalar> Coord2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Number + Scalar> Coord2d for Vector2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}
