use crate::geometry::utils_2d::distance;
use crate::geometry::WorldPoint;
use serde::{Deserialize, Serialize};

/// Append-only, ordered collection of user points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRegistry {
    points: Vec<WorldPoint>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its index. Duplicates are kept.
    pub fn add(&mut self, p: WorldPoint) -> usize {
        self.points.push(p);
        self.points.len() - 1
    }

    /// The stored point closest to `query`; the first one wins on ties.
    pub fn nearest(&self, query: &WorldPoint) -> Option<WorldPoint> {
        let mut best: Option<(WorldPoint, f32)> = None;
        for p in &self.points {
            let d = distance(p, query);
            match best {
                Some((_, min_d)) if d >= min_d => {}
                _ => best = Some((*p, d)),
            }
        }
        best.map(|(p, _)| p)
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WorldPoint> {
        self.points.get(index)
    }

    pub fn as_slice(&self) -> &[WorldPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldPoint> {
        self.points.iter()
    }
}
