//--------------------------------------------------------------------
// polygon.rs
//--------------------------------------------------------------------
// Provides various utility functions for vertex loops
//--------------------------------------------------------------------

use crate::geometry::*;

// Iterates over (current, next) vertex pairs including the closing edge
pub fn loop_edges<'a>(poly: &'a [Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + 'a {
    let len = poly.len();
    (0..len).map(move |i| (poly[i], poly[(i+1) % len]))
}

// Twice the signed area; positive for counter-clockwise loops
pub fn polygon_winding(poly: &[Vec2]) -> Coord {
    loop_edges(poly).map(|(p0, p1)| p0.cross(p1)).sum()
}

// Even-odd test with a horizontal ray going to +x
pub fn polygon_contains_point(poly: &[Vec2], p: Vec2) -> bool {
    let mut contains = false;

    for (p0, p1) in loop_edges(poly) {
        // If the two points are equal, skip
        if p0.roughly_equals(p1) { continue; }

        if (p0.y > p.y) != (p1.y > p.y) {
            let x = p0.x + (p.y - p0.y) / (p1.y - p0.y) * (p1.x - p0.x);
            if x > p.x { contains = !contains; }
        }
    }

    contains
}

pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len = ab.length_sq();
    if len.roughly_zero_squared() { return a; }

    let t = (p - a).dot(ab) / len;
    a.lerp(b, t.max(0.0).min(1.0))
}

pub fn distance_to_segment(a: Vec2, b: Vec2, p: Vec2) -> Coord {
    closest_point_on_segment(a, b, p).distance(p)
}

// Unsigned distance from the point to the loop's outline
pub fn distance_to_outline(poly: &[Vec2], p: Vec2) -> Coord {
    loop_edges(poly).map(|(a, b)| distance_to_segment(a, b, p))
        .fold(CoordM::INFINITY, Coord::min)
}

// Negative inside, positive outside
pub fn signed_distance(poly: &[Vec2], p: Vec2) -> Coord {
    let dist = distance_to_outline(poly, p);
    if polygon_contains_point(poly, p) { -dist } else { dist }
}

// Signed distance to the union of the loops
pub fn signed_distance_to_loops(loops: &[Vec<Vec2>], p: Vec2) -> Coord {
    loops.iter().map(|poly| signed_distance(poly, p)).fold(CoordM::INFINITY, Coord::min)
}

// Distance along a unit-direction ray to the nearest edge crossing, if within length
pub fn ray_polygon_distance(poly: &[Vec2], origin: Vec2, dir: Vec2, length: Coord) -> Option<Coord> {
    let mut best: Option<Coord> = None;

    for (a, b) in loop_edges(poly) {
        let roots = roots::find_roots_linear(dir.cross(b - a), dir.cross(a - origin));
        for &s in roots.as_ref() {
            if !inside01(s) { continue; }

            let t = (a.lerp(b, s) - origin).dot(dir);
            if t < 0.0 || t > length { continue; }
            if best.map_or(true, |bt| t < bt) { best = Some(t); }
        }
    }

    best
}
