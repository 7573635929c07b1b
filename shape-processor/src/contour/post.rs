//--------------------------------------------------------------------
// post.rs
//--------------------------------------------------------------------
// Post-processing of traced outlines: pixel offset, hole splicing,
// winding and transformation
//--------------------------------------------------------------------

use super::*;

// Moves every vertex along the miter of its two edge normals so that each
// edge ends up `amount` away from where it was; positive amounts grow the loop
pub fn offset_loop(vertices: &[Vec2], amount: Coord) -> Vec<Vec2> {
    let normals = edge_normals(vertices);
    let n = normals.len();

    (0..n).map(|i| {
        let (n1, n2) = (normals[(i + n - 1) % n], normals[i]);
        let denom = 1.0 + n1.dot(n2);
        let offset = if denom.roughly_zero() { n1 } else { (n1 + n2) / denom };
        vertices[i] + amount * offset
    }).collect()
}

// Moves traced pixel centres onto the pixel edges: outlines grow and holes
// shrink by half a pixel
pub fn apply_pixel_offset(polygon: &DetectedPolygon) -> DetectedPolygon {
    let centre = |poly: &Vec<Vec2>| -> Vec<Vec2> { poly.iter().map(|&v| v + Vec2::new(0.5, 0.5)).collect() };
    DetectedPolygon {
        outer: offset_loop(&centre(&polygon.outer), 0.5),
        holes: polygon.holes.iter().map(|h| offset_loop(&centre(h), -0.5)).collect()
    }
}

// X of the nearest crossing of the loop's edges on the row through `p`,
// at or to the left of `p`, with the index of the crossed edge
fn nearest_crossing_left(poly: &[Vec2], p: Vec2) -> Option<(usize, Coord)> {
    loop_edges(poly).enumerate()
        .filter(|(_, (a, b))| a.y != b.y && a.y.min(b.y) <= p.y && a.y.max(b.y) >= p.y)
        .map(|(i, (a, b))| (i, a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x)))
        .filter(|&(_, x)| x <= p.x)
        .max_by_key(|&(_, x)| OrderedFloat(x))
}

// Joins the hole to the outline through a horizontal bridge going left from
// the hole's leftmost vertex to the first outline edge it meets. The
// bridge point and the hole vertex both appear twice, once on the way in
// and once on the way out.
pub fn splice_hole(outer: &[Vec2], hole: &[Vec2]) -> Vec<Vec2> {
    let start = match hole.iter().enumerate().min_by_key(|(_, v)| OrderedFloat(v.x)) {
        Some((i, _)) => i,
        None => return outer.to_vec()
    };
    let vertex = hole[start];

    let (index, bridge) = match nearest_crossing_left(outer, vertex) {
        Some((i, x)) => (i, Vec2::new(x, vertex.y)),
        None => {
            log::warn!("hole at {} is not enclosed by its outline, bridging to the nearest point", vertex);
            loop_edges(outer).enumerate()
                .map(|(i, (a, b))| (i, closest_point_on_segment(a, b, vertex)))
                .min_by_key(|&(_, p)| OrderedFloat(p.distance(vertex)))
                .unwrap_or((0, vertex))
        }
    };

    let mut result = Vec::with_capacity(outer.len() + hole.len() + 3);
    result.extend_from_slice(&outer[..=index]);
    result.push(bridge);
    result.extend_from_slice(&hole[start..]);
    result.extend_from_slice(&hole[..start]);
    result.push(vertex);
    result.push(bridge);
    result.extend_from_slice(&outer[index+1..]);
    result
}

// Splices every hole, leftmost first, so that no bridge runs through a
// hole that is still unspliced
pub fn splice_holes(outer: &[Vec2], holes: &[Vec<Vec2>]) -> Vec<Vec2> {
    let leftmost = |h: &Vec<Vec2>| OrderedFloat(h.iter().map(|v| v.x).fold(CoordM::INFINITY, Coord::min));
    let mut holes: Vec<_> = holes.iter().collect();
    holes.sort_by_key(|h| leftmost(*h));

    let mut outer = outer.to_vec();
    for hole in holes { outer = splice_hole(&outer, hole); }
    outer
}

pub fn post_process(polygons: Vec<DetectedPolygon>, options: &ContourOptions) -> Vec<DetectedPolygon> {
    polygons.into_iter().map(|polygon| {
        let mut polygon = if options.pixel_offset { apply_pixel_offset(&polygon) } else { polygon };

        if options.detection_type == VerticesDetectionType::Integrated {
            let holes = std::mem::replace(&mut polygon.holes, Vec::new());
            polygon.outer = splice_holes(&polygon.outer, &holes);
        }

        if options.reverse_winding {
            polygon.outer.reverse();
            for hole in &mut polygon.holes { hole.reverse(); }
        }

        if !options.transform.is_identity() {
            polygon.outer = apply_matrix(&options.transform, &polygon.outer);
            polygon.holes = apply_matrix_to_range(&options.transform, &polygon.holes);
        }

        polygon
    }).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn traced_block() -> Vec<Vec2> {
        vec![Vec2::new(10.0, 5.0), Vec2::new(29.0, 5.0), Vec2::new(29.0, 14.0), Vec2::new(10.0, 14.0)]
    }

    #[test]
    fn test_pixel_offset_covers_pixels() {
        let polygon = DetectedPolygon { outer: traced_block(), holes: vec![] };
        let offset = apply_pixel_offset(&polygon);
        let expected = [(10.0, 5.0), (30.0, 5.0), (30.0, 15.0), (10.0, 15.0)];
        for (v, &(x, y)) in offset.outer.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(v.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(v.y, y, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(area(&offset.outer), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hole_shrinks() {
        let mut hole = vec![Vec2::new(14.0, 15.0), Vec2::new(14.0, 24.0), Vec2::new(25.0, 24.0), Vec2::new(25.0, 15.0)];
        assert!(signed_area(&hole) < 0.0);
        let before = area(&hole);
        let polygon = DetectedPolygon { outer: traced_block(), holes: vec![hole.clone()] };
        let after = area(&apply_pixel_offset(&polygon).holes[0]);
        assert!(after < before);
        hole.reverse();
        assert!(area(&offset_loop(&hole, -0.5)) < before);
    }

    fn orientation(a: Vec2, b: Vec2, c: Vec2) -> Coord { (b - a).cross(c - a) }

    // Any two non-adjacent edges that cross at an interior point of both
    fn has_crossing_edges(poly: &[Vec2]) -> bool {
        let edges: Vec<_> = loop_edges(poly).collect();
        let n = edges.len();
        (0..n).any(|i| (i+2..n).filter(|&j| !(i == 0 && j == n-1)).any(|j| {
            let ((a, b), (c, d)) = (edges[i], edges[j]);
            orientation(a, b, c) * orientation(a, b, d) < 0.0
                && orientation(c, d, a) * orientation(c, d, b) < 0.0
        }))
    }

    fn square(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Vec<Vec2> {
        vec![Vec2::new(x0, y0), Vec2::new(x1, y0), Vec2::new(x1, y1), Vec2::new(x0, y1)]
    }

    #[test]
    fn test_splice_keeps_area() {
        let outer = square(0.0, 0.0, 10.0, 10.0);
        let hole = vec![Vec2::new(4.0, 4.0), Vec2::new(4.0, 6.0), Vec2::new(6.0, 6.0), Vec2::new(6.0, 4.0)];
        let spliced = splice_hole(&outer, &hole);
        assert_eq!(spliced.len(), outer.len() + hole.len() + 3);
        // The bridge runs left to the closing edge, level with the hole's first vertex
        assert_eq!(spliced[4], Vec2::new(0.0, 4.0));
        assert_eq!(spliced[5], Vec2::new(4.0, 4.0));
        assert_abs_diff_eq!(area(&spliced), 100.0 - 4.0, epsilon = 1e-9);
        assert!(!has_crossing_edges(&spliced));
    }

    #[test]
    fn test_splice_bridge_avoids_hole() {
        // The outline's nearest point to the hole's first vertex lies across the hole
        let outer = square(0.0, 0.0, 100.0, 100.0);
        let hole = vec![Vec2::new(75.0, 55.0), Vec2::new(75.0, 65.0), Vec2::new(95.0, 65.0),
            Vec2::new(95.0, 45.0), Vec2::new(75.0, 45.0)];
        let spliced = splice_hole(&outer, &hole);
        assert!(!has_crossing_edges(&spliced));
        assert_eq!(spliced[4], Vec2::new(0.0, 55.0));
        assert_abs_diff_eq!(area(&spliced), 10000.0 - 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_splice_holes_side_by_side() {
        let outer = square(0.0, 0.0, 50.0, 20.0);
        let mut left = square(5.0, 5.0, 15.0, 15.0);
        let mut right = square(30.0, 5.0, 40.0, 15.0);
        left.reverse();
        right.reverse();

        // Splicing order must not depend on the order the holes come in
        for holes in vec![vec![left.clone(), right.clone()], vec![right, left]] {
            let spliced = splice_holes(&outer, &holes);
            assert_eq!(spliced.len(), outer.len() + 2 * (4 + 3));
            assert!(!has_crossing_edges(&spliced));
            assert_abs_diff_eq!(area(&spliced), 1000.0 - 200.0, epsilon = 1e-9);
        }
    }
}
