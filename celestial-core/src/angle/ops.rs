use super::core::Angle;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

impl Add for Angle {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians() + rhs.radians())
    }
}

impl Sub for Angle {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians() - rhs.radians())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        Self::from_radians(self.radians() * k)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    #[inline]
    fn div(self, k: f64) -> Self {
        Self::from_radians(self.radians() / k)
    }
}

impl Neg for Angle {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_radians(-self.radians())
    }
}

impl Sum for Angle {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Angle::ZERO, |acc, a| acc + a)
    }
}
