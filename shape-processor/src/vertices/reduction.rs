//--------------------------------------------------------------------
// reduction.rs
//--------------------------------------------------------------------
// Vertex reduction and subdivision of loops
//--------------------------------------------------------------------

use super::*;

// Removes every vertex whose removal changes the doubled loop area by
// less than twice the tolerance; a zero tolerance removes nothing
pub fn simplify(vertices: &[Vec2], tolerance: Coord) -> ShapeResult<Vec<Vec2>> {
    if !(tolerance >= 0.0) || !tolerance.is_finite() { return Err(ShapeError::InvalidTolerance(tolerance)); }
    check_loop(vertices)?;

    let n = vertices.len();
    let limit = 2.0 * tolerance;
    let mut result: Vec<Vec2> = Vec::with_capacity(n);
    let mut v1 = vertices[n-1];

    for (i, &v2) in vertices.iter().enumerate() {
        let v3 = if i == n-1 {
            match result.first() {
                Some(&v) => v,
                None => return Err(ShapeError::TooFewVertices(0))
            }
        } else { vertices[i+1] };

        let change = v1.cross(v3) - (v1.cross(v2) + v2.cross(v3));
        if change.abs() >= limit {
            result.push(v2);
            v1 = v2;
        }
    }

    if result.len() < 3 { Err(ShapeError::TooFewVertices(result.len())) } else { Ok(result) }
}

// Inserts evenly spaced vertices so that no edge, closing edge included,
// is longer than the given length
pub fn subdivide(vertices: &[Vec2], max_edge_length: Coord) -> ShapeResult<Vec<Vec2>> {
    if !is_positive(max_edge_length) { return Err(ShapeError::InvalidLength(max_edge_length)); }

    let mut result = Vec::with_capacity(vertices.len());
    for (a, b) in loop_edges(vertices) {
        result.push(a);

        let length = a.distance(b);
        if length > max_edge_length {
            let count = (length / max_edge_length).ceil() as usize;
            result.extend((1..count).map(|k| a.lerp(b, k as Coord / count as Coord)));
        }
    }

    Ok(result)
}

pub fn simplify_range(polygons: &[Vec<Vec2>], tolerance: Coord) -> ShapeResult<Vec<Vec<Vec2>>> {
    polygons.iter().map(|p| simplify(p, tolerance)).collect()
}

pub fn subdivide_range(polygons: &[Vec<Vec2>], max_edge_length: Coord) -> ShapeResult<Vec<Vec<Vec2>>> {
    polygons.iter().map(|p| subdivide(p, max_edge_length)).collect()
}
