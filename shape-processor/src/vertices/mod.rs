//--------------------------------------------------------------------
// vertices.rs
//--------------------------------------------------------------------
// Pure functions over vertex loops: mass properties, clipping,
// reduction and construction helpers
//--------------------------------------------------------------------

mod mass;
mod clipping;
mod reduction;
mod builders;

pub use mass::*;
pub use clipping::*;
pub use reduction::*;
pub use builders::*;

use crate::error::*;
use crate::geometry::*;

fn check_loop(vertices: &[Vec2]) -> ShapeResult<()> {
    if vertices.len() < 3 { Err(ShapeError::TooFewVertices(vertices.len())) } else { Ok(()) }
}

fn check_range(polygons: &[Vec<Vec2>]) -> ShapeResult<()> {
    if polygons.is_empty() { return Err(ShapeError::NoPolygons); }
    polygons.iter().try_for_each(|p| check_loop(p))
}
