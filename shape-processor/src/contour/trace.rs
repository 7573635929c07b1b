//--------------------------------------------------------------------
// trace.rs
//--------------------------------------------------------------------
// Boundary tracer with fused online simplification
//--------------------------------------------------------------------

use super::*;

// The 8 neighbours in rotational order, starting at the upper-left one
pub const NEIGHBOURS: [Pixel; 8] = [
    Pixel { x: -1, y: -1 }, Pixel { x: 0, y: -1 }, Pixel { x: 1, y: -1 }, Pixel { x: 1, y: 0 },
    Pixel { x: 1, y: 1 }, Pixel { x: 0, y: 1 }, Pixel { x: -1, y: 1 }, Pixel { x: -1, y: 0 }
];

// Index of the first neighbour to check, by the last step taken ([dy+1][dx+1])
const FIRST_NEIGHBOUR: [[usize; 3]; 3] = [
    [5, 6, 7],
    [4, 0, 0],
    [3, 2, 1]
];

pub fn first_neighbour(last: Pixel, current: Pixel) -> usize {
    let step = current - last;
    FIRST_NEIGHBOUR[(step.y.signum() + 1) as usize][(step.x.signum() + 1) as usize]
}

pub fn next_hull_pixel(map: &impl SolidMap, last: Pixel, current: Pixel) -> Option<Pixel> {
    let first = first_neighbour(last, current);
    (0..NEIGHBOURS.len())
        .map(|i| current + NEIGHBOURS[(first + i) % NEIGHBOURS.len()])
        .find(|&p| map.is_solid(p))
}

// Index of the first buffered point whose distance to the chord joining
// the buffer's endpoints reaches the tolerance
pub fn outstanding_vertex(hull: &[Pixel], tolerance: Coord) -> Option<usize> {
    if hull.len() < 3 { return None; }

    let a = hull[0].to_vec2();
    let b = hull[hull.len()-1].to_vec2();

    (1..hull.len()-1).find(|&i| distance_to_segment(a, b, hull[i].to_vec2()) >= tolerance)
}

// Drops every vertex lying on the straight continuation of its neighbours.
// Pixel coordinates are integers, so the test is exact.
pub fn merge_collinear(mut pixels: Vec<Pixel>) -> Vec<Pixel> {
    while pixels.len() >= 3 {
        let n = pixels.len();
        let removable = (0..n).find(|&i| {
            let d1 = pixels[i] - pixels[(i + n - 1) % n];
            let d2 = pixels[(i + 1) % n] - pixels[i];
            d1.x * d2.y == d1.y * d2.x && d1.x * d2.x + d1.y * d2.y > 0
        });

        match removable {
            Some(i) => { pixels.remove(i); },
            None => break
        }
    }
    pixels
}

#[cfg(feature = "debug_contour")]
fn print_hull(hull: &[Pixel], committed: Pixel) {
    let points: Vec<_> = hull.iter().map(|p| p.to_string()).collect();
    println!("commit {} from preview {}", committed, points.join(" "));
}

#[cfg(not(feature = "debug_contour"))]
fn print_hull(_hull: &[Pixel], _committed: Pixel) {}

// Follows the boundary from the entrance, starting the neighbour search as
// if the tracer had just stepped from `outside` onto the entrance. Returns
// the committed vertices; fewer than 3 means nothing usable was found.
pub fn trace_outline(map: &impl SolidMap, entrance: Pixel, outside: Pixel, hull_tolerance: Coord) -> Vec<Pixel> {
    merge_collinear(commit_vertices(map, entrance, outside, hull_tolerance))
}

fn commit_vertices(map: &impl SolidMap, entrance: Pixel, outside: Pixel, hull_tolerance: Coord) -> Vec<Pixel> {
    let mut polygon = vec![entrance];
    let mut hull = vec![entrance];
    let mut end_of_hull: Option<Vec<Pixel>> = None;

    let (mut current, mut next) = (outside, entrance);

    // Every boundary pixel can be entered from at most 8 directions
    let budget = 8 * map.width() * map.height() + 8;
    for _ in 0..budget {
        if let Some(i) = outstanding_vertex(&hull, hull_tolerance) {
            let vertex = hull[i];
            print_hull(&hull, vertex);

            if let Some(closing) = &end_of_hull {
                // Only a vertex on the final stretch closes the loop
                if closing.contains(&vertex) { polygon.push(vertex); }
                return polygon;
            }

            log::trace!("committed vertex {} after {} preview pixels", vertex, i);
            polygon.push(vertex);
            hull.drain(..i);
        }

        let last = current;
        current = next;
        next = match next_hull_pixel(map, last, current) {
            Some(p) => p,
            None => return polygon
        };
        hull.push(next);

        if next == entrance {
            // A second lap means the tolerance swallows the whole outline
            if end_of_hull.is_some() { return polygon; }
            end_of_hull = Some(hull.iter().copied().filter(|&p| p != entrance).collect());
        }
    }

    log::warn!("boundary trace from {} exhausted its step budget", entrance);
    polygon
}
