//--------------------------------------------------------------------
// distance_grid.rs
//--------------------------------------------------------------------
// Provides the point-query acceleration structure of the polygonal
// shapes: a uniform grid of signed distances
//--------------------------------------------------------------------

use super::*;

// Anything that can answer point queries against a set of loops and be
// rebuilt for a new set of loops
pub trait DistanceField: Send + Sync + std::fmt::Debug {
    // Signed distance, or None outside the field's domain
    fn distance(&self, point: Vec2) -> Option<Coord>;
    fn try_intersect(&self, point: Vec2) -> Option<IntersectionInfo>;
    fn rebuilt(&self, polygons: &[Vec<Vec2>]) -> ShapeResult<Arc<dyn DistanceField>>;
}

#[derive(Clone, Debug)]
pub struct DistanceGrid {
    origin: Vec2,
    spacing: Coord,
    columns: usize,
    rows: usize,
    nodes: Vec<Coord>
}

impl DistanceGrid {
    pub fn new(polygons: &[Vec<Vec2>], spacing: Coord) -> ShapeResult<DistanceGrid> {
        if !is_positive(spacing) { return Err(ShapeError::InvalidGridSpacing(spacing)); }
        if polygons.is_empty() { return Err(ShapeError::NoPolygons); }
        if let Some(p) = polygons.iter().find(|p| p.len() < 3) { return Err(ShapeError::TooFewVertices(p.len())); }
        Ok(DistanceGrid::build(polygons, spacing))
    }

    // Expects validated input
    pub(super) fn build(polygons: &[Vec<Vec2>], spacing: Coord) -> DistanceGrid {
        let bounds = Rect::enclosing_rect(polygons.iter().flat_map(|p| p.iter().copied()))
            .unwrap_or_else(|| Rect::from_point(Vec2::zero()))
            .expanded(spacing);

        let columns = (bounds.width / spacing).ceil() as usize + 1;
        let rows = (bounds.height / spacing).ceil() as usize + 1;
        let origin = bounds.min();

        let mut nodes = Vec::with_capacity(columns * rows);
        for j in 0..rows {
            for i in 0..columns {
                let p = origin + spacing * Vec2::new(i as Coord, j as Coord);
                nodes.push(signed_distance_to_loops(polygons, p));
            }
        }

        log::debug!("built distance grid of {}x{} nodes with spacing {}", columns, rows, spacing);
        DistanceGrid { origin, spacing, columns, rows, nodes }
    }

    pub fn spacing(&self) -> Coord { self.spacing }

    fn node(&self, i: usize, j: usize) -> Coord { self.nodes[j * self.columns + i] }

    // Bilinear sample of the distance and its gradient
    pub fn sample(&self, point: Vec2) -> Option<(Coord, Vec2)> {
        let local = (point - self.origin) / self.spacing;
        let (maxx, maxy) = ((self.columns - 1) as Coord, (self.rows - 1) as Coord);
        if !(local.x >= 0.0 && local.y >= 0.0 && local.x <= maxx && local.y <= maxy) { return None; }

        let i = (local.x.floor() as usize).min(self.columns - 2);
        let j = (local.y.floor() as usize).min(self.rows - 2);
        let (fx, fy) = (local.x - i as Coord, local.y - j as Coord);

        let d00 = self.node(i, j);
        let d10 = self.node(i+1, j);
        let d01 = self.node(i, j+1);
        let d11 = self.node(i+1, j+1);

        let bottom = d00 + (d10 - d00) * fx;
        let top = d01 + (d11 - d01) * fx;
        let distance = bottom + (top - bottom) * fy;

        let gradient = Vec2::new(
            (d10 - d00) * (1.0 - fy) + (d11 - d01) * fy,
            (d01 - d00) * (1.0 - fx) + (d11 - d10) * fx) / self.spacing;

        Some((distance, gradient))
    }
}

impl DistanceField for DistanceGrid {
    fn distance(&self, point: Vec2) -> Option<Coord> { self.sample(point).map(|(d, _)| d) }

    fn try_intersect(&self, point: Vec2) -> Option<IntersectionInfo> {
        match self.sample(point) {
            Some((distance, gradient)) if distance <= 0.0 =>
                Some(IntersectionInfo { position: point, normal: gradient.normalized_or_zero(), distance }),
            _ => None
        }
    }

    fn rebuilt(&self, polygons: &[Vec<Vec2>]) -> ShapeResult<Arc<dyn DistanceField>> {
        Ok(Arc::new(DistanceGrid::new(polygons, self.spacing)?))
    }
}
