//--------------------------------------------------------------------
// shape.rs
//--------------------------------------------------------------------
// Provides the closed enumeration Shape, which dispatches the
// collision queries to the known shape variants
//--------------------------------------------------------------------

use crate::derive_more::*;

mod point;
mod circle;
mod polygon;
mod compound;
mod distance_grid;

pub use point::*;
pub use circle::*;
pub use polygon::*;
pub use compound::*;
pub use distance_grid::*;

use std::sync::{Arc, OnceLock};

use crate::contour::{DetectedPolygon, splice_holes};
use crate::error::*;
use crate::geometry::*;
use crate::projection::*;
use crate::vertices::*;

// Result of a point query; a non-positive distance is the penetration depth
#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(fmt = "IntersectionInfo(position={}, normal={}, distance={})", position, normal, distance)]
pub struct IntersectionInfo { pub position: Vec2, pub normal: Vec2, pub distance: Coord }

#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(fmt = "RaySegment({} -> {}, length={})", origin, direction, length)]
pub struct RaySegment { pub origin: Vec2, pub direction: Vec2, pub length: Coord }

impl RaySegment {
    pub fn new(origin: Vec2, direction: Vec2, length: Coord) -> ShapeResult<RaySegment> {
        if !is_positive(length) { return Err(ShapeError::InvalidLength(length)); }
        if direction.roughly_zero() { return Err(ShapeError::ZeroDirection); }
        Ok(RaySegment { origin, direction: direction.normalized(), length })
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(fmt = "FluidInfo(drag={}, centroid={}, area={})", drag, centroid, area)]
pub struct FluidInfo { pub drag: DragInfo, pub centroid: Vec2, pub area: Coord }

// Nearest hit of every ray, or None if no ray hits at all
pub type RayHits = Option<Vec<Option<Coord>>>;

// Gives the drag tangent for a given application point
pub type TangentFn<'a> = &'a dyn Fn(Vec2) -> Vec2;

#[derive(Clone, Debug)]
pub enum Shape {
    Point(PointShape),
    Circle(CircleShape),
    Polygon(PolygonShape),
    Compound(CompoundShape)
}

// Use a simplifier macro to implement the shared queries
macro_rules! forward_to_shapes {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty );*) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Shape::Point(p) => p.$i($($arg,)*),
                    Shape::Circle(c) => c.$i($($arg,)*),
                    Shape::Polygon(p) => p.$i($($arg,)*),
                    Shape::Compound(c) => c.$i($($arg,)*)
                }
            }
        )*
    }
}

impl Shape {
    forward_to_shapes! {
        name() -> &'static str;
        mass() -> MassProperties;
        vertices() -> &[Vec2];
        vertex_normals() -> &[Vec2];
        can_intersect() -> bool;

        bounding_box(transform: &Matrix2x3) -> Rect;
        distance(point: Vec2) -> ShapeResult<Coord>;
        try_intersect(point: Vec2) -> ShapeResult<Option<IntersectionInfo>>;
        try_intersect_ray_segments(transform: &Matrix2x3, segments: &[RaySegment]) -> ShapeResult<RayHits>;
        drag_info(tangent: Vec2) -> ShapeResult<DragInfo>;
        fluid_info(tangent_for: TangentFn, line: &Line) -> ShapeResult<Option<FluidInfo>>;
        explosion_info(transform: &Matrix2x3, blast_radius: Coord, tangent_for: TangentFn) -> ShapeResult<Option<DragInfo>>
    }

    // Transformation builds a fresh shape out of the transformed source data
    pub fn transformed(&self, matrix: &Matrix2x3) -> ShapeResult<Shape> {
        Ok(match self {
            Shape::Point(p) => Shape::Point(p.clone()),
            Shape::Circle(c) => Shape::Circle(c.transformed(matrix)?),
            Shape::Polygon(p) => Shape::Polygon(p.transformed(matrix)?),
            Shape::Compound(c) => Shape::Compound(c.transformed(matrix)?)
        })
    }

    // No variant resolves collisions by itself
    pub fn can_custom_intersect(&self) -> bool { false }

    pub fn try_custom_intersection(&self, _other: &Shape) -> ShapeResult<Option<IntersectionInfo>> {
        Err(ShapeError::Unsupported { operation: "try_custom_intersection", shape: self.name() })
    }

    pub fn area(&self) -> Coord { self.mass().area }
    pub fn centroid(&self) -> Vec2 { self.mass().centroid }
    pub fn inertia(&self) -> Coord { self.mass().inertia }

    // Create shapes of specific types
    pub fn point() -> Shape { Shape::Point(PointShape) }

    pub fn circle(radius: Coord, vertex_count: usize) -> ShapeResult<Shape> {
        Ok(Shape::Circle(CircleShape::new(radius, vertex_count)?))
    }

    pub fn polygon(vertices: Vec<Vec2>, grid_spacing: Coord) -> ShapeResult<Shape> {
        Ok(Shape::Polygon(PolygonShape::new(vertices, grid_spacing)?))
    }

    pub fn compound(polygons: Vec<Vec<Vec2>>, grid_spacing: Coord) -> ShapeResult<Shape> {
        Ok(Shape::Compound(CompoundShape::new(polygons, grid_spacing)?))
    }

    // A single outline becomes a polygon, several become a compound;
    // separated holes are spliced in as integrated extraction would do
    pub fn from_contours(detected: &[DetectedPolygon], grid_spacing: Coord) -> ShapeResult<Shape> {
        let mut outlines: Vec<_> = detected.iter().map(|d| {
            if !d.holes.is_empty() { log::debug!("splicing {} separated holes into their outline", d.holes.len()); }
            splice_holes(&d.outer, &d.holes)
        }).collect();

        match outlines.len() {
            0 => Err(ShapeError::NoPolygons),
            1 => Shape::polygon(outlines.pop().unwrap_or_default(), grid_spacing),
            _ => Shape::compound(outlines, grid_spacing)
        }
    }

    // Shared immutable instances
    pub fn unit_circle() -> &'static Shape {
        static UNIT_CIRCLE: OnceLock<Shape> = OnceLock::new();
        UNIT_CIRCLE.get_or_init(|| Shape::Circle(CircleShape::unit()))
    }

    pub fn unit_square() -> &'static Shape {
        static UNIT_SQUARE: OnceLock<Shape> = OnceLock::new();
        UNIT_SQUARE.get_or_init(|| Shape::Polygon(PolygonShape::unit_square()))
    }
}

pub static PARTICLE: Shape = Shape::Point(PointShape);

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mass = self.mass();
        write!(f, "{}(vertices={}, area={}, centroid={}, inertia={})",
            self.name(), self.vertices().len(), mass.area, mass.centroid, mass.inertia)
    }
}

// Helpers shared by the polygonal variants

fn transform_loop(matrix: &Matrix2x3, vertices: &[Vec2]) -> Vec<Vec2> { apply_matrix(matrix, vertices) }

fn check_blast_radius(radius: Coord) -> ShapeResult<()> {
    if is_positive(radius) { Ok(()) } else { Err(ShapeError::InvalidRadius(radius)) }
}

// Clips the loops against the water line and measures the submerged part
fn fluid_info_of_loops(polygons: &[Vec<Vec2>], tangent_for: TangentFn, line: &Line) -> Option<FluidInfo> {
    let submerged = clip_range_to_half_plane(polygons, line);
    if submerged.is_empty() { return None; }

    let centroid = centroid_of_range(&submerged);
    let area = area_of_range(&submerged);
    let drag = aggregate_overlap_length(&submerged, tangent_for(centroid));
    Some(FluidInfo { drag, centroid, area })
}

// Moves the loops to blast space and measures the part inside the blast
fn explosion_info_of_loops(polygons: &[Vec<Vec2>], transform: &Matrix2x3, blast_radius: Coord,
    tangent_for: TangentFn) -> ShapeResult<Option<DragInfo>> {
    check_blast_radius(blast_radius)?;

    let moved = apply_matrix_to_range(transform, polygons);
    let affected = clip_range_to_circle(&moved, blast_radius);
    if affected.is_empty() { return Ok(None); }

    let centroid = centroid_of_range(&affected);
    Ok(Some(aggregate_overlap_length(&affected, tangent_for(centroid))))
}

// Tests every ray against each loop moved to ray space, keeping the nearest hit
fn ray_hits_of_loops<'a>(polygons: impl Iterator<Item = &'a [Vec2]>, transform: &Matrix2x3,
    segments: &[RaySegment]) -> RayHits {
    let mut hits: Vec<Option<Coord>> = vec![None; segments.len()];

    for poly in polygons {
        let moved = transform_loop(transform, poly);
        let rect = match Rect::enclosing_rect(moved.iter().copied()) {
            Some(rect) => rect,
            None => continue
        };

        for (segment, hit) in segments.iter().zip(hits.iter_mut()) {
            match rect.ray_distance(segment.origin, segment.direction) {
                Some(t) if t <= segment.length => {},
                _ => continue
            }

            if let Some(t) = ray_polygon_distance(&moved, segment.origin, segment.direction, segment.length) {
                if hit.map_or(true, |h| t < h) { *hit = Some(t); }
            }
        }
    }

    if hits.iter().any(Option::is_some) { Some(hits) } else { None }
}
