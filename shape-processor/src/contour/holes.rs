//--------------------------------------------------------------------
// holes.rs
//--------------------------------------------------------------------
// Scanline searches for hole entrances and further islands
//--------------------------------------------------------------------

use super::*;

// X coordinates where the loop's edges cross the row, sorted; edges along
// the row are ignored and a peak touching the row counts once
pub fn crossing_xs(poly: &[Vec2], y: Coord) -> Vec<Coord> {
    let mut xs = Vec::new();
    let n = poly.len();
    if n < 3 { return xs; }

    for i in 0..n {
        let v1 = poly[i];
        let v2 = poly[(i + n - 1) % n];

        if !((v1.y >= y && v2.y <= y) || (v1.y <= y && v2.y >= y)) { continue; }
        if v1.y == v2.y { continue; }

        let slope = v2 - v1;
        let add = if v1.y == y {
            let next_slope = v1 - poly[(i + 1) % n];
            if slope.y > 0.0 { next_slope.y <= 0.0 } else { next_slope.y >= 0.0 }
        } else { true };

        if add { xs.push((y - v1.y) / slope.y * slope.x + v1.x); }
    }

    xs.sort_by_key(|&x| OrderedFloat(x));
    xs
}

// True if the point is farther than the tolerance from every edge and vertex
pub fn distance_acceptable(poly: &[Vec2], p: Vec2, tolerance: Coord) -> bool {
    loop_edges(poly).all(|(a, b)| distance_to_segment(a, b, p) > tolerance && a.distance(p) > tolerance)
}

fn distance_acceptable_to_all(outline: &DetectedPolygon, p: Vec2, tolerance: Coord) -> bool {
    distance_acceptable(&outline.outer, p, tolerance)
        && outline.holes.iter().all(|h| distance_acceptable(h, p, tolerance))
}

// Inside (or within tolerance of) an outline, holes excluded
pub fn in_outline(outline: &DetectedPolygon, p: Vec2, tolerance: Coord) -> bool {
    if !distance_acceptable_to_all(outline, p, tolerance) { return true; }

    let mut xs = crossing_xs(&outline.outer, p.y);
    for hole in &outline.holes { xs.extend(crossing_xs(hole, p.y)); }
    xs.sort_by_key(|&x| OrderedFloat(x));

    xs.len() % 2 == 0 && xs.chunks(2).any(|span| span[0] <= p.x && span[1] >= p.x)
}

// Looks for a solid-transparent-solid run inside the outline, from the
// given row down; the last solid pixel before the gap is the entrance
pub fn find_hole_entrance(map: &impl SolidMap, outline: &DetectedPolygon, start_y: i32,
    blacklist: &[Pixel], tolerance: Coord) -> Option<Pixel> {
    let bottom = outline.outer.iter().map(|v| v.y).fold(CoordM::NEG_INFINITY, Coord::max) as i32;
    let bottom = bottom.min(map.height() as i32 - 1);

    for y in start_y.max(0)..=bottom {
        let xs = crossing_xs(&outline.outer, y as Coord);
        if xs.len() % 2 != 0 {
            log::warn!("odd number ({}) of outline crossings on row {}, skipping it", xs.len(), y);
            continue;
        }

        for span in xs.chunks(2) {
            let mut last_solid = None;
            let mut found_transparent = false;

            for x in span[0] as i32..=span[1] as i32 {
                let pixel = Pixel::new(x, y);
                if map.is_solid(pixel) {
                    if !found_transparent {
                        last_solid = Some(pixel);
                    } else if let Some(entrance) = last_solid {
                        let accepted = !blacklist.contains(&entrance)
                            && distance_acceptable_to_all(outline, entrance.to_vec2(), tolerance);
                        if accepted { return Some(entrance); }

                        // Rejected; the run restarts at this pixel
                        last_solid = Some(pixel);
                        found_transparent = false;
                    }
                } else if last_solid.is_some() {
                    found_transparent = true;
                }
            }
        }
    }

    None
}

// Continues the row-major scan after `start` for a solid pixel that follows
// a transparent one and lies outside every known outline
pub fn find_next_island(map: &impl SolidMap, outlines: &[DetectedPolygon], start: Pixel, tolerance: Coord) -> Option<Pixel> {
    let width = map.width() as i32;
    let total = width * map.height() as i32;
    let mut found_transparent = false;

    for i in (start.y * width + start.x).max(0)..total {
        let pixel = Pixel::new(i % width, i / width);
        if !map.is_solid(pixel) {
            found_transparent = true;
        } else if found_transparent {
            if outlines.iter().any(|o| in_outline(o, pixel.to_vec2(), tolerance)) {
                found_transparent = false;
            } else {
                return Some(pixel);
            }
        }
    }

    None
}
