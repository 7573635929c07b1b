//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides an axis-aligned rectangle class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;
use std::iter::Iterator;
use CoordM::INFINITY;

#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn from_point(pt: Vec2) -> Rect { Rect::new(pt.x, pt.y, 0.0, 0.0) }

    pub fn min(&self) -> Vec2 { Vec2::new(self.x, self.y) }
    pub fn max(&self) -> Vec2 { Vec2::new(self.x + self.width, self.y + self.height) }
    pub fn center(&self) -> Vec2 { Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0) }

    pub fn intersects(&self, other: Rect) -> bool {
        !(self.x > other.x + other.width || other.x > self.x + self.width ||
            self.y > other.y + other.height || other.y > self.y + self.height)
    }

    pub fn contains_point(&self, pt: Vec2) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.x + self.width >= pt.x && self.y + self.height >= pt.y
    }

    pub fn expanded(&self, amount: Coord) -> Rect {
        Rect::new(self.x - amount, self.y - amount, self.width + 2.0 * amount, self.height + 2.0 * amount)
    }

    pub fn enclosing_rect(pts: impl Iterator<Item = Vec2>) -> Option<Rect> {
        let mut x1 = INFINITY;
        let mut x2 = -INFINITY;
        let mut y1 = INFINITY;
        let mut y2 = -INFINITY;

        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }

        if empty { None } else { Some(Rect::new(x1, y1, x2 - x1, y2 - y1)) }
    }

    // Slab test; returns the entry distance along the ray, or zero if it starts inside
    pub fn ray_distance(&self, origin: Vec2, dir: Vec2) -> Option<Coord> {
        let mut tmin = -INFINITY;
        let mut tmax = INFINITY;

        for &(o, d, lo, hi) in &[(origin.x, dir.x, self.x, self.x + self.width),
            (origin.y, dir.y, self.y, self.y + self.height)] {
            if d.roughly_zero_squared() {
                if o < lo || o > hi { return None; }
            } else {
                let (t1, t2) = ((lo - o) / d, (hi - o) / d);
                tmin = tmin.max(t1.min(t2));
                tmax = tmax.min(t1.max(t2));
            }
        }

        if tmax < tmin || tmax < 0.0 { None } else { Some(tmin.max(0.0)) }
    }
}
