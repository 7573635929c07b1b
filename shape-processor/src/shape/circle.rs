//--------------------------------------------------------------------
// circle.rs
//--------------------------------------------------------------------
// Provides the analytic circle shape
//--------------------------------------------------------------------

use super::*;
use crate::arrayvec::ArrayVec;

const UNIT_CIRCLE_VERTICES: usize = 32;

#[derive(Clone, Debug)]
pub struct CircleShape {
    radius: Coord,
    // Polygonal approximation used for clipping
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
    inertia: Coord
}

// Moment of inertia per unit mass of a solid disk
pub fn solid_disk_inertia(radius: Coord) -> Coord { radius * radius / 2.0 }

impl CircleShape {
    pub fn new(radius: Coord, vertex_count: usize) -> ShapeResult<CircleShape> {
        CircleShape::with_inertia(radius, vertex_count, solid_disk_inertia(radius))
    }

    pub fn with_inertia(radius: Coord, vertex_count: usize, inertia: Coord) -> ShapeResult<CircleShape> {
        if !is_positive(radius) { return Err(ShapeError::InvalidRadius(radius)); }
        if vertex_count < 3 { return Err(ShapeError::InvalidVertexCount(vertex_count)); }
        Ok(CircleShape::from_parts(radius, vertex_count, inertia))
    }

    fn from_parts(radius: Coord, vertex_count: usize, inertia: Coord) -> CircleShape {
        CircleShape {
            radius,
            vertices: circle_loop(radius, vertex_count),
            normals: circle_loop(1.0, vertex_count),
            inertia
        }
    }

    pub(super) fn unit() -> CircleShape {
        CircleShape::from_parts(1.0, UNIT_CIRCLE_VERTICES, solid_disk_inertia(1.0))
    }

    pub fn radius(&self) -> Coord { self.radius }

    pub fn name(&self) -> &'static str { "circle" }

    pub fn mass(&self) -> MassProperties {
        MassProperties {
            area: CoordM::consts::PI * self.radius * self.radius,
            centroid: Vec2::zero(),
            inertia: self.inertia
        }
    }

    pub fn vertices(&self) -> &[Vec2] { &self.vertices }
    pub fn vertex_normals(&self) -> &[Vec2] { &self.normals }
    pub fn can_intersect(&self) -> bool { true }

    // The image of a circle is an ellipse; its half-extents are the row lengths
    pub fn bounding_box(&self, transform: &Matrix2x3) -> Rect {
        let center = transform.translation_part();
        let hx = self.radius * Vec2::new(transform.m00, transform.m01).length();
        let hy = self.radius * Vec2::new(transform.m10, transform.m11).length();
        Rect::new(center.x - hx, center.y - hy, 2.0 * hx, 2.0 * hy)
    }

    pub fn distance(&self, point: Vec2) -> ShapeResult<Coord> { Ok(point.length() - self.radius) }

    pub fn try_intersect(&self, point: Vec2) -> ShapeResult<Option<IntersectionInfo>> {
        let distance = point.length() - self.radius;
        Ok(if distance <= 0.0 {
            Some(IntersectionInfo { position: point, normal: point.normalized_or_zero(), distance })
        } else { None })
    }

    // The rays are brought to the circle's space, where the hit parameter
    // still measures distance along the ray's unit direction
    pub fn try_intersect_ray_segments(&self, transform: &Matrix2x3, segments: &[RaySegment]) -> ShapeResult<RayHits> {
        let inverse = match transform.inverse() {
            Some(inverse) => inverse,
            None => return Ok(None)
        };

        let hits: Vec<_> = segments.iter().map(|segment| {
            let origin = inverse.transform(segment.origin);
            let dir = inverse.transform_normal(segment.direction);
            let roots = roots::find_roots_quadratic(dir.length_sq(), 2.0 * origin.dot(dir),
                origin.length_sq() - self.radius * self.radius);

            let candidates: ArrayVec<[Coord; 2]> = roots.as_ref().iter().copied()
                .filter(|&t| t >= 0.0 && t <= segment.length).collect();
            candidates.iter().copied().fold(None, |best: Option<Coord>, t| Some(best.map_or(t, |b| b.min(t))))
        }).collect();

        Ok(if hits.iter().any(Option::is_some) { Some(hits) } else { None })
    }

    pub fn drag_info(&self, _tangent: Vec2) -> ShapeResult<DragInfo> {
        Ok(DragInfo::new(Vec2::zero(), 2.0 * self.radius))
    }

    pub fn fluid_info(&self, tangent_for: TangentFn, line: &Line) -> ShapeResult<Option<FluidInfo>> {
        Ok(fluid_info_of_loops(std::slice::from_ref(&self.vertices), tangent_for, line))
    }

    pub fn explosion_info(&self, transform: &Matrix2x3, blast_radius: Coord, tangent_for: TangentFn)
        -> ShapeResult<Option<DragInfo>> {
        explosion_info_of_loops(std::slice::from_ref(&self.vertices), transform, blast_radius, tangent_for)
    }

    pub fn transformed(&self, matrix: &Matrix2x3) -> ShapeResult<CircleShape> {
        let scales = matrix.axis_scales();
        CircleShape::new(self.radius * (scales.x + scales.y) / 2.0, self.vertices.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mass() {
        let c = CircleShape::new(2.0, 16).unwrap();
        assert_abs_diff_eq!(c.mass().area, 4.0 * CoordM::consts::PI);
        assert_abs_diff_eq!(c.mass().inertia, 2.0);
        assert!(CircleShape::new(0.0, 16).is_err());
        assert!(CircleShape::new(1.0, 2).is_err());
        assert_abs_diff_eq!(CircleShape::with_inertia(1.0, 8, 5.0).unwrap().mass().inertia, 5.0);
    }

    #[test]
    fn test_point_queries() {
        let c = CircleShape::new(2.0, 16).unwrap();
        assert_abs_diff_eq!(c.distance(Vec2::new(3.0, 4.0)).unwrap(), 3.0);
        let hit = c.try_intersect(Vec2::new(0.0, 1.5)).unwrap().unwrap();
        assert_abs_diff_eq!(hit.distance, -0.5);
        assert_abs_diff_eq!(hit.normal.y, 1.0);
        assert!(c.try_intersect(Vec2::new(0.0, 2.5)).unwrap().is_none());
    }

    #[test]
    fn test_ray_segments() {
        let c = CircleShape::new(1.0, 16).unwrap();
        let transform = Matrix2x3::translation(Vec2::new(10.0, 0.0));
        let rays = [
            RaySegment::new(Vec2::zero(), Vec2::new(1.0, 0.0), 20.0).unwrap(),
            RaySegment::new(Vec2::zero(), Vec2::new(1.0, 0.0), 5.0).unwrap(),
            RaySegment::new(Vec2::zero(), Vec2::new(0.0, 1.0), 20.0).unwrap()
        ];
        let hits = c.try_intersect_ray_segments(&transform, &rays).unwrap().unwrap();
        assert_abs_diff_eq!(hits[0].unwrap(), 9.0, epsilon = 1e-9);
        assert_eq!(hits[1], None);
        assert_eq!(hits[2], None);

        let miss = [RaySegment::new(Vec2::zero(), Vec2::new(-1.0, 0.0), 20.0).unwrap()];
        assert_eq!(c.try_intersect_ray_segments(&transform, &miss).unwrap(), None);
    }

    #[test]
    fn test_bounding_box() {
        let c = CircleShape::new(1.0, 16).unwrap();
        let transform = Matrix2x3::translation(Vec2::new(1.0, 2.0)) * Matrix2x3::scale(2.0, 3.0);
        let rect = c.bounding_box(&transform);
        assert_abs_diff_eq!(rect.x, -1.0);
        assert_abs_diff_eq!(rect.y, -1.0);
        assert_abs_diff_eq!(rect.width, 4.0);
        assert_abs_diff_eq!(rect.height, 6.0);
    }

    #[test]
    fn test_fluid_half_submerged() {
        let c = CircleShape::new(1.0, 64).unwrap();
        let line = Line::through_point(Vec2::new(0.0, -1.0), Vec2::zero());
        let info = c.fluid_info(&|_| Vec2::new(1.0, 0.0), &line).unwrap().unwrap();
        assert_abs_diff_eq!(info.area, CoordM::consts::PI / 2.0, epsilon = 1e-2);
        assert!(info.centroid.y < 0.0);
        assert_abs_diff_eq!(info.drag.length, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_explosion() {
        let c = CircleShape::new(1.0, 32).unwrap();
        let tangent = |_: Vec2| Vec2::new(0.0, 1.0);
        let far = Matrix2x3::translation(Vec2::new(50.0, 0.0));
        assert!(c.explosion_info(&far, 5.0, &tangent).unwrap().is_none());
        assert!(c.explosion_info(&Matrix2x3::identity(), 5.0, &tangent).unwrap().is_some());
        assert!(c.explosion_info(&Matrix2x3::identity(), 0.0, &tangent).is_err());
    }
}
