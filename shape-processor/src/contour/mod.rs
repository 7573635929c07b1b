//--------------------------------------------------------------------
// contour.rs
//--------------------------------------------------------------------
// Extracts polygon outlines (with optional holes and further
// islands) from the solid pixels of an alpha raster
//--------------------------------------------------------------------

mod raster;
mod trace;
mod holes;
mod post;

pub use raster::*;
pub use trace::*;
pub use holes::*;
pub use post::*;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use crate::error::*;
use crate::geometry::*;
use crate::vertices::*;
use crate::ordered_float::OrderedFloat;

// How detected holes are returned
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticesDetectionType {
    // Holes are spliced into the outer loop through a keyhole bridge
    Integrated,
    // Holes are kept as their own loops
    Separated
}

impl Default for VerticesDetectionType {
    fn default() -> Self { VerticesDetectionType::Integrated }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContourOptions {
    // Pixels with at least this alpha are solid
    pub alpha_tolerance: u8,
    // Maximum deviation of the traced pixels from the emitted outline
    pub hull_tolerance: Coord,
    pub hole_detection: bool,
    pub multipart_detection: bool,
    pub detection_type: VerticesDetectionType,
    // Moves the outline from pixel centres onto pixel edges
    pub pixel_offset: bool,
    pub reverse_winding: bool,
    pub transform: Matrix2x3
}

impl Default for ContourOptions {
    fn default() -> Self {
        ContourOptions {
            alpha_tolerance: 20,
            hull_tolerance: 1.5,
            hole_detection: false,
            multipart_detection: false,
            detection_type: VerticesDetectionType::Integrated,
            pixel_offset: true,
            reverse_winding: false,
            transform: Matrix2x3::identity()
        }
    }
}

impl ContourOptions {
    pub fn with_alpha_tolerance(self, alpha_tolerance: u8) -> Self { ContourOptions { alpha_tolerance, ..self } }
    pub fn with_hull_tolerance(self, hull_tolerance: Coord) -> Self { ContourOptions { hull_tolerance, ..self } }
    pub fn with_hole_detection(self, hole_detection: bool) -> Self { ContourOptions { hole_detection, ..self } }
    pub fn with_multipart_detection(self, multipart_detection: bool) -> Self { ContourOptions { multipart_detection, ..self } }
    pub fn with_detection_type(self, detection_type: VerticesDetectionType) -> Self { ContourOptions { detection_type, ..self } }
    pub fn with_pixel_offset(self, pixel_offset: bool) -> Self { ContourOptions { pixel_offset, ..self } }
    pub fn with_reverse_winding(self, reverse_winding: bool) -> Self { ContourOptions { reverse_winding, ..self } }
    pub fn with_transform(self, transform: Matrix2x3) -> Self { ContourOptions { transform, ..self } }

    pub fn validate(&self) -> ContourResult<()> {
        if self.alpha_tolerance == 0 {
            return Err(ContourError::InvalidTolerance { name: "alpha", value: 0.0 });
        }
        if !is_positive(self.hull_tolerance) {
            return Err(ContourError::InvalidTolerance { name: "hull", value: self.hull_tolerance });
        }
        Ok(())
    }
}

// One detected region: the outer loop and, in separated mode, its holes.
// Outer loops wind positively in raster coordinates and holes negatively,
// unless the winding is reversed.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DetectedPolygon {
    pub outer: Vec<Vec2>,
    pub holes: Vec<Vec<Vec2>>
}

impl DetectedPolygon {
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(|h| h.len()).sum::<usize>()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContourExtractor {
    options: ContourOptions
}

impl ContourExtractor {
    pub fn new(options: ContourOptions) -> ContourExtractor { ContourExtractor { options } }
    pub fn options(&self) -> &ContourOptions { &self.options }

    pub fn detect(&self, raster: &RasterBuffer) -> ContourResult<Vec<DetectedPolygon>> {
        self.options.validate()?;
        self.detect_map(&raster.threshold(self.options.alpha_tolerance))
    }

    // Same as detect, but over any solid pixel predicate; the alpha tolerance is unused
    pub fn detect_map<M: SolidMap>(&self, map: &M) -> ContourResult<Vec<DetectedPolygon>> {
        self.options.validate()?;
        let tolerance = self.options.hull_tolerance;

        let first = first_solid_pixel(map).ok_or(ContourError::NoVerticesDetected)?;
        let mut polygons = Vec::new();
        let mut next_entrance = Some(first);

        while let Some(entrance) = next_entrance {
            let outline = trace_outline(map, entrance, entrance - Pixel::new(1, 0), tolerance);

            if outline.len() >= 3 {
                let mut polygon = DetectedPolygon { outer: to_points(&outline), holes: Vec::new() };
                log::debug!("detected outline of {} vertices from entrance {}", polygon.outer.len(), entrance);

                if self.options.hole_detection { detect_holes(map, &mut polygon, tolerance); }
                polygons.push(polygon);
            } else {
                log::debug!("discarding degenerate outline from entrance {}", entrance);
            }

            // A degenerate trace does not count as the single part
            if !self.options.multipart_detection && !polygons.is_empty() { break; }
            next_entrance = find_next_island(map, &polygons, entrance, tolerance);
        }

        if polygons.is_empty() { return Err(ContourError::NoVerticesDetected); }
        Ok(post_process(polygons, &self.options))
    }
}

pub fn detect_vertices(raster: &RasterBuffer, options: &ContourOptions) -> ContourResult<Vec<DetectedPolygon>> {
    ContourExtractor::new(options.clone()).detect(raster)
}

fn first_solid_pixel(map: &impl SolidMap) -> Option<Pixel> {
    (0..map.height() as i32)
        .flat_map(|y| (0..map.width() as i32).map(move |x| Pixel::new(x, y)))
        .find(|&p| map.is_solid(p))
}

fn to_points(pixels: &[Pixel]) -> Vec<Vec2> {
    pixels.iter().map(|p| p.to_vec2()).collect()
}

fn detect_holes(map: &impl SolidMap, polygon: &mut DetectedPolygon, tolerance: Coord) {
    let top = polygon.outer.iter().map(|v| v.y).fold(CoordM::INFINITY, Coord::min) as i32;

    let mut blacklist = Vec::new();
    let mut start_y = top;

    while let Some(entrance) = find_hole_entrance(map, polygon, start_y, &blacklist, tolerance) {
        blacklist.push(entrance);
        start_y = entrance.y;

        let hole = trace_outline(map, entrance, entrance + Pixel::new(1, 0), tolerance);
        if hole.len() >= 3 {
            log::debug!("detected hole of {} vertices from entrance {}", hole.len(), entrance);
            polygon.holes.push(to_points(&hole));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn block_raster() -> RasterBuffer {
        let alpha = (0..20).flat_map(|y| (0..40).map(move |x|
            if (10..30).contains(&x) && (5..15).contains(&y) { 255 } else { 0 })).collect();
        RasterBuffer::from_alpha(alpha, 40).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = ContourOptions::default();
        assert_eq!(options.alpha_tolerance, 20);
        assert_eq!(options.hull_tolerance, 1.5);
        assert!(options.pixel_offset && !options.hole_detection && !options.multipart_detection);
        assert!(options.transform.is_identity());
    }

    #[test]
    fn test_invalid_tolerances() {
        let raster = block_raster();
        let zero_alpha = ContourOptions::default().with_alpha_tolerance(0);
        assert!(matches!(detect_vertices(&raster, &zero_alpha), Err(ContourError::InvalidTolerance { name: "alpha", .. })));
        let bad_hull = ContourOptions::default().with_hull_tolerance(-1.0);
        assert!(matches!(detect_vertices(&raster, &bad_hull), Err(ContourError::InvalidTolerance { name: "hull", .. })));
    }

    #[test]
    fn test_empty_raster() {
        let raster = RasterBuffer::from_alpha(vec![0; 100], 10).unwrap();
        assert_eq!(detect_vertices(&raster, &ContourOptions::default()), Err(ContourError::NoVerticesDetected));
    }

    #[test]
    fn test_block_without_offset() {
        let options = ContourOptions::default().with_hull_tolerance(1.0).with_pixel_offset(false);
        let polygons = detect_vertices(&block_raster(), &options).unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer, vec![Vec2::new(10.0, 5.0), Vec2::new(29.0, 5.0), Vec2::new(29.0, 14.0), Vec2::new(10.0, 14.0)]);
    }

    #[test]
    fn test_noise_pixel_before_block() {
        let alpha = (0..20).flat_map(|y| (0..40).map(move |x|
            if (x, y) == (2, 1) || ((10..30).contains(&x) && (5..15).contains(&y)) { 255 } else { 0 })).collect();
        let raster = RasterBuffer::from_alpha(alpha, 40).unwrap();
        let options = ContourOptions::default().with_hull_tolerance(1.0);

        for multipart in vec![false, true] {
            let polygons = detect_vertices(&raster, &options.clone().with_multipart_detection(multipart)).unwrap();
            assert_eq!(polygons.len(), 1);
            assert_abs_diff_eq!(area(&polygons[0].outer), 200.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_block_reversed_and_transformed() {
        let options = ContourOptions::default().with_hull_tolerance(1.0)
            .with_reverse_winding(true)
            .with_transform(Matrix2x3::scale(0.5, 0.5));
        let polygons = detect_vertices(&block_raster(), &options).unwrap();
        let outer = &polygons[0].outer;
        assert!(signed_area(outer) < 0.0);
        assert_abs_diff_eq!(area(outer), 50.0, epsilon = 1e-9);
        let c = centroid(outer);
        assert_abs_diff_eq!(c.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 5.0, epsilon = 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_serde_round_trip() {
        let options = ContourOptions::default()
            .with_hull_tolerance(2.5)
            .with_detection_type(VerticesDetectionType::Separated)
            .with_transform(Matrix2x3::translation(Vec2::new(3.0, -1.5)));
        let json = serde_json::to_string(&options).unwrap();
        let back: ContourOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_serde_defaults() {
        let json = r#"{ "hull_tolerance": 2.0, "detection_type": "Separated" }"#;
        let options: ContourOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options, ContourOptions::default()
            .with_hull_tolerance(2.0)
            .with_detection_type(VerticesDetectionType::Separated));
    }
}
