//--------------------------------------------------------------------
// polygon.rs
//--------------------------------------------------------------------
// Provides the single-loop polygon shape
//--------------------------------------------------------------------

use super::*;

const UNIT_SQUARE_SPACING: Coord = 0.1;

#[derive(Clone, Debug)]
pub struct PolygonShape {
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
    mass: MassProperties,
    field: Arc<dyn DistanceField>
}

impl PolygonShape {
    pub fn new(vertices: Vec<Vec2>, grid_spacing: Coord) -> ShapeResult<PolygonShape> {
        let field = DistanceGrid::new(std::slice::from_ref(&vertices), grid_spacing)?;
        PolygonShape::with_field(vertices, Arc::new(field))
    }

    pub fn with_inertia(vertices: Vec<Vec2>, grid_spacing: Coord, inertia: Coord) -> ShapeResult<PolygonShape> {
        let mut shape = PolygonShape::new(vertices, grid_spacing)?;
        shape.mass.inertia = inertia;
        Ok(shape)
    }

    pub fn with_field(vertices: Vec<Vec2>, field: Arc<dyn DistanceField>) -> ShapeResult<PolygonShape> {
        let mass = mass_properties(&vertices)?;
        Ok(PolygonShape { normals: vertex_normals(&vertices), vertices, mass, field })
    }

    pub(super) fn unit_square() -> PolygonShape {
        let vertices = vec![Vec2::new(0.5, 0.5), Vec2::new(-0.5, 0.5), Vec2::new(-0.5, -0.5), Vec2::new(0.5, -0.5)];
        let field = DistanceGrid::build(std::slice::from_ref(&vertices), UNIT_SQUARE_SPACING);
        PolygonShape {
            normals: vertex_normals(&vertices),
            mass: MassProperties { area: area(&vertices), centroid: centroid(&vertices), inertia: inertia(&vertices) },
            vertices,
            field: Arc::new(field)
        }
    }

    pub fn field(&self) -> &Arc<dyn DistanceField> { &self.field }

    pub fn name(&self) -> &'static str { "polygon" }
    pub fn mass(&self) -> MassProperties { self.mass }
    pub fn vertices(&self) -> &[Vec2] { &self.vertices }
    pub fn vertex_normals(&self) -> &[Vec2] { &self.normals }
    pub fn can_intersect(&self) -> bool { true }

    pub fn bounding_box(&self, transform: &Matrix2x3) -> Rect {
        Rect::enclosing_rect(self.vertices.iter().map(|&v| transform.transform(v)))
            .unwrap_or_else(|| Rect::from_point(transform.translation_part()))
    }

    // Sampled from the field, exact where the field does not reach
    pub fn distance(&self, point: Vec2) -> ShapeResult<Coord> {
        Ok(self.field.distance(point).unwrap_or_else(|| signed_distance(&self.vertices, point)))
    }

    pub fn try_intersect(&self, point: Vec2) -> ShapeResult<Option<IntersectionInfo>> {
        Ok(self.field.try_intersect(point))
    }

    pub fn try_intersect_ray_segments(&self, transform: &Matrix2x3, segments: &[RaySegment]) -> ShapeResult<RayHits> {
        Ok(ray_hits_of_loops(std::iter::once(self.vertices.as_slice()), transform, segments))
    }

    pub fn drag_info(&self, tangent: Vec2) -> ShapeResult<DragInfo> { Ok(drag_of_loop(&self.vertices, tangent)) }

    pub fn fluid_info(&self, tangent_for: TangentFn, line: &Line) -> ShapeResult<Option<FluidInfo>> {
        Ok(fluid_info_of_loops(std::slice::from_ref(&self.vertices), tangent_for, line))
    }

    pub fn explosion_info(&self, transform: &Matrix2x3, blast_radius: Coord, tangent_for: TangentFn)
        -> ShapeResult<Option<DragInfo>> {
        explosion_info_of_loops(std::slice::from_ref(&self.vertices), transform, blast_radius, tangent_for)
    }

    pub fn transformed(&self, matrix: &Matrix2x3) -> ShapeResult<PolygonShape> {
        let vertices = transform_loop(matrix, &self.vertices);
        let field = self.field.rebuilt(std::slice::from_ref(&vertices))?;
        PolygonShape::with_field(vertices, field)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rect_shape() -> PolygonShape { PolygonShape::new(create_rectangle(4.0, 2.0).unwrap(), 0.25).unwrap() }

    #[test]
    fn test_construction_errors() {
        let two = vec![Vec2::zero(), Vec2::new(1.0, 0.0)];
        assert_eq!(PolygonShape::new(two, 1.0).unwrap_err(), ShapeError::TooFewVertices(2));
        assert_eq!(PolygonShape::new(create_rectangle(1.0, 1.0).unwrap(), -1.0).unwrap_err(),
            ShapeError::InvalidGridSpacing(-1.0));
    }

    #[test]
    fn test_mass() {
        let shape = rect_shape();
        assert_abs_diff_eq!(shape.mass().area, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape.mass().inertia, (16.0 + 4.0) / 12.0, epsilon = 1e-12);
        let heavy = PolygonShape::with_inertia(create_rectangle(4.0, 2.0).unwrap(), 0.25, 9.0).unwrap();
        assert_abs_diff_eq!(heavy.mass().inertia, 9.0);
    }

    #[test]
    fn test_point_queries() {
        let shape = rect_shape();
        // The centre falls on a grid node, the far point lies outside the grid
        assert_abs_diff_eq!(shape.distance(Vec2::zero()).unwrap(), -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.distance(Vec2::new(5.0, 0.0)).unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape.distance(Vec2::new(1.0, 0.5)).unwrap(), -0.5, epsilon = 1e-9);
        assert!(shape.try_intersect(Vec2::new(1.0, 0.5)).unwrap().is_some());
        assert!(shape.try_intersect(Vec2::new(3.0, 0.5)).unwrap().is_none());
    }

    #[test]
    fn test_drag_and_fluid() {
        let shape = rect_shape();
        let drag = shape.drag_info(Vec2::new(0.0, 1.0)).unwrap();
        assert_abs_diff_eq!(drag.length, 2.0);

        // Water below y = 0.5
        let line = Line::through_point(Vec2::new(0.0, -1.0), Vec2::new(0.0, 0.5));
        let info = shape.fluid_info(&|_| Vec2::new(1.0, 0.0), &line).unwrap().unwrap();
        assert_abs_diff_eq!(info.area, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(info.centroid.y, -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(info.drag.length, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_box_rotated() {
        let shape = rect_shape();
        let rect = shape.bounding_box(&Matrix2x3::rotation(CoordM::consts::FRAC_PI_2));
        assert_abs_diff_eq!(rect.width, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.height, 4.0, epsilon = 1e-12);
    }
}
