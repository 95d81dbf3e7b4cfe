//! Regions of interest.
//!
//! A region is a polygon in normalized frame coordinates restricting which
//! detections are considered. Absence of a region means the whole frame is
//! valid.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A polygonal region of interest in normalized (0.0 to 1.0) coordinates.
///
/// Construct via [`Region::from_points`], which enforces the minimum vertex
/// count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    /// Polygon vertices as `[x, y]` pairs in normalized frame coordinates.
    points: Vec<[f64; 2]>,
}

impl Region {
    /// Build a region from normalized vertex points.
    ///
    /// Returns `None` for fewer than 3 points: a malformed region is
    /// normalized to "no region" rather than rejected as an error.
    pub fn from_points(points: Vec<[f64; 2]>) -> Option<Region> {
        if points.len() < 3 {
            return None;
        }
        Some(Region { points })
    }

    /// The polygon vertices.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Test whether a normalized point lies inside the polygon.
    ///
    /// Even-odd ray casting with an explicit edge pre-check: points exactly
    /// on a polygon edge are treated as outside (exclusive boundary, the
    /// `shapely` `contains` convention). The same test is applied everywhere
    /// containment is evaluated.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.on_edge(x, y) {
            return false;
        }

        let pts = &self.points;
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (xi, yi) = (pts[i][0], pts[i][1]);
            let (xj, yj) = (pts[j][0], pts[j][1]);
            if (yi > y) != (yj > y) {
                let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
                if x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Whether the point lies exactly on one of the polygon's edges.
    fn on_edge(&self, x: f64, y: f64) -> bool {
        let pts = &self.points;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (xi, yi) = (pts[i][0], pts[i][1]);
            let (xj, yj) = (pts[j][0], pts[j][1]);
            let cross = (xj - xi) * (y - yi) - (yj - yi) * (x - xi);
            if cross == 0.0
                && x >= xi.min(xj)
                && x <= xi.max(xj)
                && y >= yi.min(yj)
                && y <= yi.max(yj)
            {
                return true;
            }
            j = i;
        }
        false
    }
}
