//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// Error types for shape construction, queries and contour extraction
//--------------------------------------------------------------------

use thiserror::Error;

use crate::geometry::Coord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("a vertex loop needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("a compound shape needs at least one polygon")]
    NoPolygons,
    #[error("invalid radius {0}, must be positive")]
    InvalidRadius(Coord),
    #[error("invalid vertex count {0}, must be at least 3")]
    InvalidVertexCount(usize),
    #[error("invalid grid spacing {0}, must be positive")]
    InvalidGridSpacing(Coord),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(Coord),
    #[error("invalid length {0}, must be positive")]
    InvalidLength(Coord),
    #[error("a ray needs a non-zero direction")]
    ZeroDirection,
    #[error("operation `{operation}` is not supported by {shape} shapes")]
    Unsupported { operation: &'static str, shape: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    #[error("raster of {width}x{height} does not match a buffer of {len} pixels")]
    InvalidDimensions { width: usize, height: usize, len: usize },
    #[error("invalid {name} tolerance {value}")]
    InvalidTolerance { name: &'static str, value: Coord },
    #[error("no solid pixels found, cannot detect vertices")]
    NoVerticesDetected,
}

pub type ShapeResult<T> = Result<T, ShapeError>;
pub type ContourResult<T> = Result<T, ContourError>;
