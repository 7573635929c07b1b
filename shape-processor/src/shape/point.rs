//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// A zero-size particle shape, which answers no geometric query
//--------------------------------------------------------------------

use super::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointShape;

fn unsupported<T>(operation: &'static str) -> ShapeResult<T> {
    Err(ShapeError::Unsupported { operation, shape: "point" })
}

impl PointShape {
    pub fn name(&self) -> &'static str { "point" }

    pub fn mass(&self) -> MassProperties {
        MassProperties { area: 0.0, centroid: Vec2::zero(), inertia: DEGENERATE_INERTIA }
    }

    pub fn vertices(&self) -> &[Vec2] { &[] }
    pub fn vertex_normals(&self) -> &[Vec2] { &[] }
    pub fn can_intersect(&self) -> bool { false }

    pub fn bounding_box(&self, transform: &Matrix2x3) -> Rect { Rect::from_point(transform.translation_part()) }

    pub fn distance(&self, _point: Vec2) -> ShapeResult<Coord> { unsupported("distance") }

    pub fn try_intersect(&self, _point: Vec2) -> ShapeResult<Option<IntersectionInfo>> {
        unsupported("try_intersect")
    }

    pub fn try_intersect_ray_segments(&self, _transform: &Matrix2x3, _segments: &[RaySegment]) -> ShapeResult<RayHits> {
        unsupported("try_intersect_ray_segments")
    }

    pub fn drag_info(&self, _tangent: Vec2) -> ShapeResult<DragInfo> { unsupported("drag_info") }

    pub fn fluid_info(&self, _tangent_for: TangentFn, _line: &Line) -> ShapeResult<Option<FluidInfo>> {
        unsupported("fluid_info")
    }

    pub fn explosion_info(&self, _transform: &Matrix2x3, _blast_radius: Coord, _tangent_for: TangentFn)
        -> ShapeResult<Option<DragInfo>> {
        unsupported("explosion_info")
    }
}
