//--------------------------------------------------------------------
// raster.rs
//--------------------------------------------------------------------
// Provides the alpha raster read by the contour extractor
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::error::*;
use crate::geometry::*;

// Integer pixel coordinates; y grows downwards
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Add, Sub, Display, Constructor)]
#[display(fmt = "[{},{}]", x, y)]
pub struct Pixel { pub x: i32, pub y: i32 }

impl Pixel {
    pub fn to_vec2(self) -> Vec2 { Vec2::new(self.x as Coord, self.y as Coord) }
}

// Anything that can tell solid pixels apart; out of bounds is never solid
pub trait SolidMap {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_solid(&self, p: Pixel) -> bool;
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    alpha: Vec<u8>
}

impl RasterBuffer {
    // Row-major alpha values, top row first
    pub fn from_alpha(alpha: Vec<u8>, width: usize) -> ContourResult<RasterBuffer> {
        let len = alpha.len();
        if width == 0 || len == 0 || len % width != 0 {
            return Err(ContourError::InvalidDimensions { width, height: if width == 0 { 0 } else { len / width }, len });
        }
        Ok(RasterBuffer { width, height: len / width, alpha })
    }

    // Packed ARGB pixels, the alpha in the top byte
    pub fn from_argb(pixels: &[u32], width: usize) -> ContourResult<RasterBuffer> {
        RasterBuffer::from_alpha(pixels.iter().map(|&p| (p >> 24) as u8).collect(), width)
    }

    pub fn from_mask(mask: &[bool], width: usize) -> ContourResult<RasterBuffer> {
        RasterBuffer::from_alpha(mask.iter().map(|&s| if s { u8::MAX } else { 0 }).collect(), width)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn alpha(&self, p: Pixel) -> Option<u8> {
        if p.x < 0 || p.y < 0 { return None; }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height { None } else { Some(self.alpha[y * self.width + x]) }
    }

    pub fn solid_pixels(&self, alpha_tolerance: u8) -> usize {
        self.alpha.iter().filter(|&&a| a >= alpha_tolerance).count()
    }

    // A view that considers solid every pixel at or above the threshold
    pub fn threshold(&self, alpha_tolerance: u8) -> Threshold<'_> { Threshold { raster: self, alpha_tolerance } }
}

pub struct Threshold<'a> { raster: &'a RasterBuffer, alpha_tolerance: u8 }

impl SolidMap for Threshold<'_> {
    fn width(&self) -> usize { self.raster.width }
    fn height(&self) -> usize { self.raster.height }
    fn is_solid(&self, p: Pixel) -> bool {
        self.raster.alpha(p).map_or(false, |a| a >= self.alpha_tolerance)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!(RasterBuffer::from_alpha(vec![0; 12], 4).is_ok());
        assert_eq!(RasterBuffer::from_alpha(vec![0; 10], 4).unwrap_err(),
            ContourError::InvalidDimensions { width: 4, height: 2, len: 10 });
        assert!(RasterBuffer::from_alpha(vec![0; 10], 0).is_err());
        assert!(RasterBuffer::from_alpha(vec![], 3).is_err());
    }

    #[test]
    fn test_argb_alpha_and_threshold() {
        let raster = RasterBuffer::from_argb(&[0xFF00_0000, 0x1300_0000, 0x1400_FFFF, 0x0000_0000], 2).unwrap();
        let map = raster.threshold(20);
        assert!(map.is_solid(Pixel::new(0, 0)));
        assert!(!map.is_solid(Pixel::new(1, 0)));
        assert!(map.is_solid(Pixel::new(0, 1)));
        assert!(!map.is_solid(Pixel::new(1, 1)));
        assert!(!map.is_solid(Pixel::new(-1, 0)));
        assert!(!map.is_solid(Pixel::new(0, 2)));
        assert_eq!(raster.solid_pixels(20), 2);
    }
}
