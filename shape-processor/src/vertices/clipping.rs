//--------------------------------------------------------------------
// clipping.rs
//--------------------------------------------------------------------
// Clips vertex loops against a half-plane or a circle
//--------------------------------------------------------------------

use super::*;

// Walks the loop keeping the vertices of non-negative distance and
// inserting the interpolated crossing at each strict sign change
fn clip_by_distance(vertices: &[Vec2], distance: impl Fn(Vec2) -> Coord) -> Vec<Vec2> {
    let mut result = Vec::with_capacity(vertices.len() + 1);
    let (mut last, mut last_dist) = match vertices.last() {
        Some(&v) => (v, distance(v)),
        None => return result
    };

    for &vertex in vertices {
        let dist = distance(vertex);
        if (dist.sign() - last_dist.sign()).abs() == 2 {
            let t = last_dist.abs() / (last_dist.abs() + dist.abs());
            result.push(last.lerp(vertex, t));
        }
        if dist >= 0.0 { result.push(vertex); }

        last = vertex;
        last_dist = dist;
    }

    result
}

// The part of the loop on the positive side of the line
pub fn clip_to_half_plane(vertices: &[Vec2], line: &Line) -> Vec<Vec2> {
    clip_by_distance(vertices, |v| line.distance(v))
}

// The part of the loop inside the circle of the given radius around the origin
pub fn clip_to_circle(vertices: &[Vec2], radius: Coord) -> Vec<Vec2> {
    clip_by_distance(vertices, |v| radius - v.length())
}

// Clips every loop, discarding the ones with nothing left
pub fn clip_range_to_half_plane(polygons: &[Vec<Vec2>], line: &Line) -> Vec<Vec<Vec2>> {
    polygons.iter().map(|p| clip_to_half_plane(p, line)).filter(|p| p.len() >= 3).collect()
}

pub fn clip_range_to_circle(polygons: &[Vec<Vec2>], radius: Coord) -> Vec<Vec<Vec2>> {
    polygons.iter().map(|p| clip_to_circle(p, radius)).filter(|p| p.len() >= 3).collect()
}
