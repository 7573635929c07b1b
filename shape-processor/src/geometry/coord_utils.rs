//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;
use CoordM::consts::PI;

pub const TWO_PI: Coord = 2.0 * PI;
pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn sign(self) -> i32;
}

impl Geometry for Coord {
    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }

    // Like signum, but zero stays zero
    fn sign(self) -> i32 {
        if self > 0.0 { 1 } else if self < 0.0 { -1 } else { 0 }
    }
}

pub fn inside01(t: Coord) -> bool { t >= 0.0 && t <= 1.0 }

// Positive finite values are the only acceptable sizes, spacings and tolerances
pub fn is_positive(v: Coord) -> bool { v.is_finite() && v > 0.0 }
