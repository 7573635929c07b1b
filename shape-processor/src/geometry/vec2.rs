//--------------------------------------------------------------------
// vec2.rs
//--------------------------------------------------------------------
// Provides a two-element vector class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// Vec2
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "({},{})", x, y)]
pub struct Vec2 { pub x: Coord, pub y: Coord }

impl Vec2 {
    pub fn zero() -> Vec2 { Vec2 { x: 0.0, y: 0.0 } }
    pub fn from_angle(angle: Coord) -> Vec2 { Vec2::new(angle.cos(), angle.sin()) }
    pub fn from_length_and_angle(length: Coord, angle: Coord) -> Vec2 { length * Vec2::from_angle(angle) }

    pub fn dot(&self, other: Vec2) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Vec2) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }
    pub fn normalized(&self) -> Vec2 { *self / self.length() }

    // Zero-length vectors have no direction, keep them at zero instead of NaN
    pub fn normalized_or_zero(&self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { *self / len } else { Vec2::zero() }
    }

    pub fn distance(&self, other: Vec2) -> Coord { (*self - other).length() }
    pub fn lerp(&self, other: Vec2, t: Coord) -> Vec2 { (1.0 - t) * *self + t * other }

    pub fn ccw_perpendicular(&self) -> Vec2 { Vec2 { x: -self.y, y: self.x } }
    pub fn cw_perpendicular(&self) -> Vec2 { -self.ccw_perpendicular() }

    pub fn angle(&self) -> Coord { self.y.atan2(self.x) }

    pub fn roughly_zero(&self) -> bool { self.length_sq().roughly_zero_squared() }
    pub fn roughly_equals(&self, other: Vec2) -> bool { (*self - other).length_sq().roughly_zero_squared() }
}

// Implement scalar * mul as required
impl core::ops::Mul<Vec2> for Coord {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
