//--------------------------------------------------------------------
// matrix.rs
//--------------------------------------------------------------------
// Provides a 2x3 affine transformation matrix
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// Row-major, the last column is the translation
#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "[{} {} {}; {} {} {}]", m00, m01, m02, m10, m11, m12)]
pub struct Matrix2x3 {
    pub m00: Coord, pub m01: Coord, pub m02: Coord,
    pub m10: Coord, pub m11: Coord, pub m12: Coord
}

impl Matrix2x3 {
    pub fn identity() -> Matrix2x3 { Matrix2x3::from_parts(1.0, 0.0, 0.0, 1.0, Vec2::zero()) }

    pub fn translation(t: Vec2) -> Matrix2x3 { Matrix2x3::from_parts(1.0, 0.0, 0.0, 1.0, t) }
    pub fn scale(sx: Coord, sy: Coord) -> Matrix2x3 { Matrix2x3::from_parts(sx, 0.0, 0.0, sy, Vec2::zero()) }

    pub fn rotation(angle: Coord) -> Matrix2x3 { Matrix2x3::from_rotation_translation(angle, Vec2::zero()) }

    pub fn from_rotation_translation(angle: Coord, t: Vec2) -> Matrix2x3 {
        let (s, c) = angle.sin_cos();
        Matrix2x3::from_parts(c, -s, s, c, t)
    }

    fn from_parts(m00: Coord, m01: Coord, m10: Coord, m11: Coord, t: Vec2) -> Matrix2x3 {
        Matrix2x3 { m00, m01, m02: t.x, m10, m11, m12: t.y }
    }

    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.m00 * v.x + self.m01 * v.y + self.m02, self.m10 * v.x + self.m11 * v.y + self.m12)
    }

    // Applies only the linear part, for directions and normals
    pub fn transform_normal(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.m00 * v.x + self.m01 * v.y, self.m10 * v.x + self.m11 * v.y)
    }

    pub fn translation_part(&self) -> Vec2 { Vec2::new(self.m02, self.m12) }

    pub fn determinant(&self) -> Coord { self.m00 * self.m11 - self.m01 * self.m10 }

    // Length of the images of the unit axes
    pub fn axis_scales(&self) -> Vec2 {
        Vec2::new(Vec2::new(self.m00, self.m10).length(), Vec2::new(self.m01, self.m11).length())
    }

    pub fn inverse(&self) -> Option<Matrix2x3> {
        let det = self.determinant();
        if det.roughly_zero_squared() || !det.is_finite() { return None; }

        let inv = 1.0 / det;
        let m00 = self.m11 * inv;
        let m01 = -self.m01 * inv;
        let m10 = -self.m10 * inv;
        let m11 = self.m00 * inv;
        let t = -Vec2::new(m00 * self.m02 + m01 * self.m12, m10 * self.m02 + m11 * self.m12);
        Some(Matrix2x3::from_parts(m00, m01, m10, m11, t))
    }

    pub fn is_identity(&self) -> bool { *self == Matrix2x3::identity() }
}

impl Default for Matrix2x3 {
    fn default() -> Matrix2x3 { Matrix2x3::identity() }
}

// (a * b).transform(v) == a.transform(b.transform(v))
impl core::ops::Mul<Matrix2x3> for Matrix2x3 {
    type Output = Matrix2x3;
    fn mul(self, rhs: Matrix2x3) -> Matrix2x3 {
        Matrix2x3::from_parts(
            self.m00 * rhs.m00 + self.m01 * rhs.m10,
            self.m00 * rhs.m01 + self.m01 * rhs.m11,
            self.m10 * rhs.m00 + self.m11 * rhs.m10,
            self.m10 * rhs.m01 + self.m11 * rhs.m11,
            self.transform(rhs.translation_part()))
    }
}

impl core::ops::Mul<Vec2> for Matrix2x3 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 { self.transform(rhs) }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inverse_roundtrip() {
        let m = Matrix2x3::translation(Vec2::new(3.0, -2.0))
            * Matrix2x3::rotation(0.7) * Matrix2x3::scale(2.0, 0.5);
        let inv = m.inverse().unwrap();
        let p = Vec2::new(1.25, 4.0);
        let q = inv.transform(m.transform(p));
        assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn test_composition_order() {
        let m = Matrix2x3::translation(Vec2::new(10.0, 0.0)) * Matrix2x3::rotation(CoordM::consts::FRAC_PI_2);
        let p = m * Vec2::new(1.0, 0.0);
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Matrix2x3::scale(0.0, 1.0).inverse().is_none());
    }
}
