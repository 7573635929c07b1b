//--------------------------------------------------------------------
// builders.rs
//--------------------------------------------------------------------
// Construction and transformation helpers for vertex loops
//--------------------------------------------------------------------

use super::*;

// Counter-clockwise rectangle centred on the origin
pub fn create_rectangle(width: Coord, height: Coord) -> ShapeResult<Vec<Vec2>> {
    if !is_positive(width) { return Err(ShapeError::InvalidLength(width)); }
    if !is_positive(height) { return Err(ShapeError::InvalidLength(height)); }

    let (w, h) = (width / 2.0, height / 2.0);
    Ok(vec![Vec2::new(w, h), Vec2::new(-w, h), Vec2::new(-w, -h), Vec2::new(w, -h)])
}

pub fn create_circle(radius: Coord, vertex_count: usize) -> ShapeResult<Vec<Vec2>> {
    if !is_positive(radius) { return Err(ShapeError::InvalidRadius(radius)); }
    if vertex_count < 3 { return Err(ShapeError::InvalidVertexCount(vertex_count)); }

    Ok(circle_loop(radius, vertex_count))
}

pub(crate) fn circle_loop(radius: Coord, vertex_count: usize) -> Vec<Vec2> {
    let step = TWO_PI / vertex_count as Coord;
    (0..vertex_count).map(|i| Vec2::from_length_and_angle(radius, step * i as Coord)).collect()
}

pub fn center_vertices(vertices: &[Vec2]) -> Vec<Vec2> {
    let c = centroid(vertices);
    vertices.iter().map(|&v| v - c).collect()
}

pub fn center_vertices_of_range(polygons: &[Vec<Vec2>]) -> Vec<Vec<Vec2>> {
    let c = centroid_of_range(polygons);
    polygons.iter().map(|p| p.iter().map(|&v| v - c).collect()).collect()
}

pub fn apply_matrix(matrix: &Matrix2x3, vertices: &[Vec2]) -> Vec<Vec2> {
    vertices.iter().map(|&v| matrix.transform(v)).collect()
}

pub fn apply_matrix_to_range(matrix: &Matrix2x3, polygons: &[Vec<Vec2>]) -> Vec<Vec<Vec2>> {
    polygons.iter().map(|p| apply_matrix(matrix, p)).collect()
}

// Unit normal of each edge, pointing away from the enclosed area
pub fn edge_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let outward: Coord = if polygon_winding(vertices) < 0.0 { -1.0 } else { 1.0 };
    loop_edges(vertices).map(|(a, b)| outward * (b - a).cw_perpendicular().normalized_or_zero()).collect()
}

// Per-vertex normals, each the normalized sum of its two adjacent edge normals
pub fn vertex_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let edges = edge_normals(vertices);
    let n = edges.len();
    (0..n).map(|i| (edges[(i + n - 1) % n] + edges[i]).normalized_or_zero()).collect()
}

pub fn vertex_normals_of_range(polygons: &[Vec<Vec2>]) -> Vec<Vec2> {
    polygons.iter().flat_map(|p| vertex_normals(p)).collect()
}
