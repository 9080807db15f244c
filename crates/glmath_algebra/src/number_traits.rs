use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait OneQuarter {
    fn one_quarter() -> Self;
}

impl OneQuarter for f32 {
    fn one_quarter() -> Self {
        0.25
    }
}

impl OneQuarter for f64 {
    fn one_quarter() -> Self {
        0.25
    }
}

pub trait Three {
    fn three() -> Self;
}

impl Three for f32 {
    fn three() -> Self {
        3.0
    }
}

impl Three for f64 {
    fn three() -> Self {
        3.0
    }
}

pub trait Two {
    fn two() -> Self;
}

impl Two for f32 {
    fn two() -> Self {
        2.0
    }
}

impl Two for f64 {
    fn two() -> Self {
        2.0
    }
}

pub trait One {
    fn one() -> Self;
}

impl One for i32 {
    fn one() -> Self {
        1
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for i32 {
    fn zero() -> Self {
        0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

/// Threshold below which lengths and sines are treated as degenerate.
pub trait Epsilon {
    fn epsilon() -> Self;
}

impl Epsilon for f32 {
    fn epsilon() -> Self {
        0.000_001
    }
}

impl Epsilon for f64 {
    fn epsilon() -> Self {
        0.000_001
    }
}

pub trait Pi {
    fn pi() -> Self;
}

impl Pi for f32 {
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

impl Pi for f64 {
    fn pi() -> Self {
        std::f64::consts::PI
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Scalar type the vector, matrix and quaternion operations are written against.
pub trait Float:
    Display + Copy + Zero + One + Two + Three + OneQuarter + Pi + Epsilon + NumericOps
{
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn half(self) -> Self;
    fn squared(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    /// Minimum with C `fmin` semantics: a NaN operand yields the other one.
    fn min(self, other: Self) -> Self;
    /// Maximum with C `fmax` semantics: a NaN operand yields the other one.
    fn max(self, other: Self) -> Self;
    fn to_radians(self) -> Self;
    /// Largest finite value, used as the "infinite far plane" sentinel.
    fn max_value() -> Self;
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Float for $ty {
            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn tan(self) -> Self {
                self.tan()
            }

            fn acos(self) -> Self {
                self.acos()
            }

            fn half(self) -> Self {
                self * 0.5
            }

            fn squared(self) -> Self {
                self * self
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn ceil(self) -> Self {
                self.ceil()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn min(self, other: Self) -> Self {
                self.min(other)
            }

            fn max(self, other: Self) -> Self {
                self.max(other)
            }

            fn to_radians(self) -> Self {
                self.to_radians()
            }

            fn max_value() -> Self {
                <$ty>::MAX
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
