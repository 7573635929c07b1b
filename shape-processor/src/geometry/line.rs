//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Provides an oriented infinite line, used as a fluid surface
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// The points with positive distance lie on the side the normal points to
#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "Line(n={}, d={})", normal, d)]
pub struct Line { pub normal: Vec2, pub d: Coord }

impl Line {
    pub fn through_point(normal: Vec2, point: Vec2) -> Line {
        let normal = normal.normalized();
        Line { normal, d: -normal.dot(point) }
    }

    pub fn distance(&self, p: Vec2) -> Coord { self.normal.dot(p) + self.d }

    pub fn transformed(&self, matrix: &Matrix2x3) -> Line {
        let point = matrix.transform(-self.d * self.normal);
        let normal = matrix.transform_normal(self.normal.ccw_perpendicular()).cw_perpendicular();
        Line::through_point(normal, point)
    }
}
