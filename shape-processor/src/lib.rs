//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate ordered_float;
extern crate roots;
extern crate arrayvec;
extern crate thiserror;
extern crate log;
#[cfg(feature = "serde")]
extern crate serde;

mod geometry;
mod error;
mod vertices;
mod projection;
mod shape;
mod contour;

pub use geometry::{Coord, Vec2, Matrix2x3, Rect, Line};
pub use error::*;
pub use vertices::*;
pub use projection::*;
pub use shape::*;
pub use contour::{Pixel, SolidMap, RasterBuffer, Threshold, VerticesDetectionType, ContourOptions,
    DetectedPolygon, ContourExtractor, detect_vertices};
