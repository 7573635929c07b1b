//--------------------------------------------------------------------
// mass.rs
//--------------------------------------------------------------------
// Area, centroid and moment of inertia of vertex loops
//--------------------------------------------------------------------

use super::*;

// Inertia value reported for loops that enclose no area
pub const DEGENERATE_INERTIA: Coord = 1.0;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MassProperties {
    pub area: Coord,
    pub centroid: Vec2,
    pub inertia: Coord
}

pub fn signed_area(vertices: &[Vec2]) -> Coord { polygon_winding(vertices) / 2.0 }

pub fn area(vertices: &[Vec2]) -> Coord { signed_area(vertices).abs() }

fn vertex_average(vertices: impl Iterator<Item = Vec2>) -> Vec2 {
    let (sum, count) = vertices.fold((Vec2::zero(), 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { Vec2::zero() } else { sum / count as Coord }
}

// Sum of (p + q) * cross(p, q) over the edges of a loop
fn centroid_numerator(vertices: &[Vec2]) -> Vec2 {
    loop_edges(vertices).fold(Vec2::zero(), |acc, (p, q)| acc + p.cross(q) * (p + q))
}

pub fn centroid(vertices: &[Vec2]) -> Vec2 {
    let area = signed_area(vertices);
    if area.roughly_zero_squared() { return vertex_average(vertices.iter().copied()); }

    // The signed area keeps the result right for both windings
    centroid_numerator(vertices) / (6.0 * area)
}

// Accumulates the inertia integrals of a loop around a pivot, each edge
// weighted by its cross product oriented to the loop's winding
fn inertia_sums(vertices: &[Vec2], pivot: Vec2) -> (Coord, Coord) {
    let orientation: Coord = if polygon_winding(vertices) < 0.0 { -1.0 } else { 1.0 };

    loop_edges(vertices).fold((0.0, 0.0), |(numer, denom), (v1, v2)| {
        let (v1, v2) = (v1 - pivot, v2 - pivot);
        let a = v2.dot(v2);
        let b = v2.dot(v1);
        let c = v1.dot(v1);
        let d = orientation * v1.cross(v2);
        (numer + (a + b + c) * d, denom + d)
    })
}

fn inertia_from_sums((numer, denom): (Coord, Coord)) -> Coord {
    if denom.roughly_zero_squared() { DEGENERATE_INERTIA } else { numer / (6.0 * denom) }
}

// Unit-density inertia about the centroid, normalized by the area
pub fn inertia(vertices: &[Vec2]) -> Coord {
    inertia_from_sums(inertia_sums(vertices, centroid(vertices)))
}

pub fn area_of_range(polygons: &[Vec<Vec2>]) -> Coord {
    polygons.iter().map(|p| area(p)).sum()
}

pub fn centroid_of_range(polygons: &[Vec<Vec2>]) -> Vec2 {
    let mut numer = Vec2::zero();
    let mut denom = 0.0;

    for poly in polygons {
        let winding = polygon_winding(poly);
        let orientation: Coord = if winding < 0.0 { -1.0 } else { 1.0 };
        numer += orientation * centroid_numerator(poly);
        denom += winding.abs();
    }

    if denom.roughly_zero_squared() {
        vertex_average(polygons.iter().flat_map(|p| p.iter().copied()))
    } else { numer / (3.0 * denom) }
}

// The integrals of all loops share one denominator, so the parts are
// weighted by their area and shifted to the common centroid
pub fn inertia_of_range(polygons: &[Vec<Vec2>]) -> Coord {
    let pivot = centroid_of_range(polygons);
    let sums = polygons.iter().map(|p| inertia_sums(p, pivot))
        .fold((0.0, 0.0), |(n, d), (pn, pd)| (n + pn, d + pd));
    inertia_from_sums(sums)
}

pub fn mass_properties(vertices: &[Vec2]) -> ShapeResult<MassProperties> {
    check_loop(vertices)?;
    Ok(MassProperties { area: area(vertices), centroid: centroid(vertices), inertia: inertia(vertices) })
}

pub fn mass_properties_of_range(polygons: &[Vec<Vec2>]) -> ShapeResult<MassProperties> {
    check_range(polygons)?;
    Ok(MassProperties {
        area: area_of_range(polygons),
        centroid: centroid_of_range(polygons),
        inertia: inertia_of_range(polygons)
    })
}
