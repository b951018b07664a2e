//! `std::ops` overloads. Each operator forwards to the named method so the
//! two spellings can never drift apart.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector2D;

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        self.multiply_scalar(scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        v.multiply_scalar(self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        self.divide_scalar(scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector2D::add(*self, rhs);
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl MulAssign<f64> for Vector2D {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        *self = self.multiply_scalar(scalar);
    }
}

impl DivAssign<f64> for Vector2D {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        *self = self.divide_scalar(scalar);
    }
}
