//--------------------------------------------------------------------
// compound.rs
//--------------------------------------------------------------------
// Provides the multi-polygon shape
//--------------------------------------------------------------------

use super::*;

#[derive(Clone, Debug)]
pub struct CompoundShape {
    polygons: Vec<Vec<Vec2>>,
    // Concatenation of all the loops
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
    mass: MassProperties,
    field: Arc<dyn DistanceField>
}

impl CompoundShape {
    pub fn new(polygons: Vec<Vec<Vec2>>, grid_spacing: Coord) -> ShapeResult<CompoundShape> {
        if !is_positive(grid_spacing) { return Err(ShapeError::InvalidGridSpacing(grid_spacing)); }
        let field = DistanceGrid::new(&polygons, grid_spacing)?;
        CompoundShape::with_field(polygons, Arc::new(field))
    }

    pub fn with_inertia(polygons: Vec<Vec<Vec2>>, grid_spacing: Coord, inertia: Coord) -> ShapeResult<CompoundShape> {
        let mut shape = CompoundShape::new(polygons, grid_spacing)?;
        shape.mass.inertia = inertia;
        Ok(shape)
    }

    pub fn with_field(polygons: Vec<Vec<Vec2>>, field: Arc<dyn DistanceField>) -> ShapeResult<CompoundShape> {
        let mass = mass_properties_of_range(&polygons)?;
        let vertices = polygons.iter().flat_map(|p| p.iter().copied()).collect();
        let normals = vertex_normals_of_range(&polygons);
        Ok(CompoundShape { polygons, vertices, normals, mass, field })
    }

    pub fn polygons(&self) -> &[Vec<Vec2>] { &self.polygons }
    pub fn field(&self) -> &Arc<dyn DistanceField> { &self.field }

    pub fn name(&self) -> &'static str { "compound" }
    pub fn mass(&self) -> MassProperties { self.mass }
    pub fn vertices(&self) -> &[Vec2] { &self.vertices }
    pub fn vertex_normals(&self) -> &[Vec2] { &self.normals }
    pub fn can_intersect(&self) -> bool { true }

    pub fn bounding_box(&self, transform: &Matrix2x3) -> Rect {
        Rect::enclosing_rect(self.vertices.iter().map(|&v| transform.transform(v)))
            .unwrap_or_else(|| Rect::from_point(transform.translation_part()))
    }

    pub fn distance(&self, point: Vec2) -> ShapeResult<Coord> {
        Ok(self.field.distance(point).unwrap_or_else(|| signed_distance_to_loops(&self.polygons, point)))
    }

    pub fn try_intersect(&self, point: Vec2) -> ShapeResult<Option<IntersectionInfo>> {
        Ok(self.field.try_intersect(point))
    }

    pub fn try_intersect_ray_segments(&self, transform: &Matrix2x3, segments: &[RaySegment]) -> ShapeResult<RayHits> {
        Ok(ray_hits_of_loops(self.polygons.iter().map(|p| p.as_slice()), transform, segments))
    }

    pub fn drag_info(&self, tangent: Vec2) -> ShapeResult<DragInfo> {
        Ok(aggregate_overlap_length(&self.polygons, tangent))
    }

    pub fn fluid_info(&self, tangent_for: TangentFn, line: &Line) -> ShapeResult<Option<FluidInfo>> {
        Ok(fluid_info_of_loops(&self.polygons, tangent_for, line))
    }

    pub fn explosion_info(&self, transform: &Matrix2x3, blast_radius: Coord, tangent_for: TangentFn)
        -> ShapeResult<Option<DragInfo>> {
        explosion_info_of_loops(&self.polygons, transform, blast_radius, tangent_for)
    }

    pub fn transformed(&self, matrix: &Matrix2x3) -> ShapeResult<CompoundShape> {
        let polygons = apply_matrix_to_range(matrix, &self.polygons);
        let field = self.field.rebuilt(&polygons)?;
        CompoundShape::with_field(polygons, field)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_square_at(x: Coord) -> Vec<Vec2> {
        apply_matrix(&Matrix2x3::translation(Vec2::new(x, 0.0)), &create_rectangle(1.0, 1.0).unwrap())
    }

    fn pair() -> CompoundShape { CompoundShape::new(vec![unit_square_at(-2.0), unit_square_at(2.0)], 0.1).unwrap() }

    #[test]
    fn test_mass_of_disjoint_squares() {
        let shape = pair();
        assert_abs_diff_eq!(shape.mass().area, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape.mass().inertia, 1.0 / 6.0 + 4.0, epsilon = 1e-12);
        assert_eq!(shape.vertices().len(), 8);
        assert_eq!(shape.vertex_normals().len(), 8);
        assert!(CompoundShape::new(vec![], 0.1).is_err());
    }

    #[test]
    fn test_distance_picks_closest_part() {
        let shape = pair();
        assert_abs_diff_eq!(shape.distance(Vec2::new(2.0, 0.0)).unwrap(), -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.distance(Vec2::zero()).unwrap(), 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.distance(Vec2::new(10.0, 0.0)).unwrap(), 7.5, epsilon = 1e-12);
        assert!(shape.try_intersect(Vec2::new(-2.0, 0.1)).unwrap().is_some());
        assert!(shape.try_intersect(Vec2::zero()).unwrap().is_none());
    }

    #[test]
    fn test_drag_does_not_double_count() {
        // Both parts project onto the same vertical extent
        let shape = pair();
        assert_abs_diff_eq!(shape.drag_info(Vec2::new(0.0, 1.0)).unwrap().length, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape.drag_info(Vec2::new(1.0, 0.0)).unwrap().length, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fluid_over_parts() {
        let shape = pair();
        let line = Line::through_point(Vec2::new(0.0, -1.0), Vec2::zero());
        let info = shape.fluid_info(&|_| Vec2::new(1.0, 0.0), &line).unwrap().unwrap();
        assert_abs_diff_eq!(info.area, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(info.centroid.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(info.centroid.y, -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(info.drag.length, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explosion_reaches_one_part() {
        let shape = pair();
        // Blast centred on the right part
        let to_blast = Matrix2x3::translation(Vec2::new(-2.0, 0.0));
        let drag = shape.explosion_info(&to_blast, 1.0, &|_| Vec2::new(0.0, 1.0)).unwrap().unwrap();
        assert_abs_diff_eq!(drag.length, 1.0, epsilon = 1e-12);
    }
}
