//--------------------------------------------------------------------
// projection.rs
//--------------------------------------------------------------------
// Projects vertex loops onto a direction and merges the overlapping
// projected extents, used for drag computations
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::geometry::*;
use crate::ordered_float::OrderedFloat;
use crate::arrayvec::ArrayVec;

// Drag application point and the length of the exposed profile
#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "DragInfo(center={}, length={})", center, length)]
pub struct DragInfo { pub center: Vec2, pub length: Coord }

// Support mapping of the loop along the direction
pub fn projected_bounds(vertices: &[Vec2], direction: Vec2) -> (Coord, Coord) {
    vertices.iter().map(|v| v.dot(direction))
        .fold((CoordM::INFINITY, -CoordM::INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)))
}

// Returns the extreme endpoints and the covered length of the union
pub fn interval_union(intervals: &[(Coord, Coord)]) -> Option<(Coord, Coord, Coord)> {
    if intervals.is_empty() { return None; }

    // Starts sort before ends at equal values, so touching intervals merge
    let mut endpoints: Vec<_> = intervals.iter()
        .flat_map(|&(lo, hi)| ArrayVec::from([(OrderedFloat(lo), 0), (OrderedFloat(hi), 1)]))
        .collect();
    endpoints.sort();

    let mut depth = 0;
    let mut start = 0.0;
    let mut covered = 0.0;
    for &(OrderedFloat(value), kind) in &endpoints {
        if kind == 0 {
            if depth == 0 { start = value; }
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 { covered += value - start; }
        }
    }

    let first = endpoints[0].0.into_inner();
    let last = endpoints[endpoints.len()-1].0.into_inner();
    Some((first, last, covered))
}

pub fn aggregate_overlap_length(polygons: &[Vec<Vec2>], direction: Vec2) -> DragInfo {
    let intervals: Vec<_> = polygons.iter().map(|p| projected_bounds(p, direction)).collect();
    match interval_union(&intervals) {
        Some((lo, hi, length)) => DragInfo::new(direction * ((lo + hi) / 2.0), length),
        None => DragInfo::new(Vec2::zero(), 0.0)
    }
}

pub fn drag_of_loop(vertices: &[Vec2], direction: Vec2) -> DragInfo {
    let (lo, hi) = projected_bounds(vertices, direction);
    DragInfo::new(direction * ((lo + hi) / 2.0), hi - lo)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_overlapping_intervals_count_once() {
        let (lo, hi, len) = interval_union(&[(0.0, 5.0), (0.0, 5.0)]).unwrap();
        assert_abs_diff_eq!(len, 5.0);
        assert_abs_diff_eq!(lo, 0.0);
        assert_abs_diff_eq!(hi, 5.0);
    }

    #[test]
    fn test_disjoint_intervals_add_up() {
        let (lo, hi, len) = interval_union(&[(10.0, 14.0), (0.0, 3.0)]).unwrap();
        assert_abs_diff_eq!(len, 7.0);
        assert_abs_diff_eq!((lo + hi) / 2.0, 7.0);
    }

    #[test]
    fn test_partial_and_touching_overlap() {
        let (_, _, len) = interval_union(&[(0.0, 4.0), (2.0, 6.0), (6.0, 7.0), (-3.0, -2.0)]).unwrap();
        assert_abs_diff_eq!(len, 8.0);
        assert!(interval_union(&[]).is_none());
    }

    #[test]
    fn test_aggregate_of_loops() {
        let sq = |x: Coord| vec![Vec2::new(x, 0.0), Vec2::new(x + 2.0, 0.0), Vec2::new(x + 2.0, 1.0), Vec2::new(x, 1.0)];
        let drag = aggregate_overlap_length(&[sq(0.0), sq(1.0), sq(5.0)], Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(drag.length, 5.0);
        assert_abs_diff_eq!(drag.center.x, 3.5);
        assert_abs_diff_eq!(drag.center.y, 0.0);
    }
}
