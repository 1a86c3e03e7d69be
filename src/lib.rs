//! # Karnaugh-map simplification from recognized labels
//!
//! This crate turns the output of a text recognizer run over a photographed
//! Karnaugh map into a simplified sum-of-products expression, together with
//! the cell groups that justify each product term.
//!
//! ## Overview
//!
//! The recognizer is an external collaborator: it produces [`Detection`]s,
//! pieces of text with bounding boxes. Cells labeled `1` must be covered,
//! cells labeled `X` (or `*`) are don't-cares, and everything else is ignored.
//! From there the pipeline is:
//!
//! 1. **Clustering** - rectangles are grouped into rows and columns by
//!    centroid proximity ([`grid::cluster`])
//! 2. **Grid building** - each rectangle lands in a cell of a [`Grid`]
//! 3. **Encoding** - rows and columns get Gray codes and the cells are named
//!    by variables `A`..`D` ([`grid::encoding`])
//! 4. **Group search** - power-of-two rectangles are accepted greedily,
//!    largest first ([`search`])
//! 5. **Term reduction** - each group becomes the product of the variables
//!    constant across it ([`term`])
//! 6. **Assembly** - the terms are joined into an [`Expression`]
//!
//! ## Usage
//!
//! ```
//! use kmap_vision::{analyze, Analysis, Detection, KmapConfig, Rect};
//!
//! # fn main() -> Result<(), kmap_vision::KmapError> {
//! // Two rows of two cells, roughly 100px apart
//! let detections = vec![
//!     Detection::new("1", Rect::new(40, 35, 60, 65)),
//!     Detection::new("X", Rect::new(140, 38, 158, 66)),
//!     Detection::new("1", Rect::new(42, 133, 61, 168)),
//!     Detection::new("1", Rect::new(139, 135, 160, 165)),
//! ];
//!
//! match analyze(&detections, &KmapConfig::default())? {
//!     Analysis::Solved(solution) => {
//!         // The whole map is covered by one group
//!         assert_eq!(solution.expression().to_string(), "1");
//!         for overlay in solution.overlays() {
//!             println!("{:?} in {:?}", overlay.bounds, overlay.color);
//!         }
//!     }
//!     Analysis::NothingDetected(reason) => println!("nothing to do: {:?}", reason),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Maps can also be entered by hand:
//!
//! ```
//! use kmap_vision::{solve_grid, Grid};
//! use kmap_vision::grid::CellState::{Empty, Must};
//!
//! # fn main() -> Result<(), kmap_vision::grid::GridError> {
//! let grid = Grid::from_states(2, 2, vec![Must, Must, Empty, Empty])?;
//! assert_eq!(solve_grid(grid)?.expression().to_string(), "A'");
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! The group search is a greedy heuristic. Groups never overlap and never
//! wrap around the map edges, so the result is not always the minimal cover.
//! Maps are limited to four variables, and both dimensions must be powers of
//! two.

pub mod detection;
pub mod error;
pub mod expression;
pub mod grid;
pub mod overlay;
pub mod search;
pub mod solver;
pub mod term;

pub use detection::{label_detections, Detection, LabeledRect, Mark, Rect};
pub use error::KmapError;
pub use expression::Expression;
pub use grid::{Grid, GridError};
pub use overlay::{Color, GroupOverlay};
pub use search::Group;
pub use solver::{analyze, analyze_labeled, solve_grid, Analysis, NothingDetected, Solution};
pub use term::ProductTerm;

/// Default distance, in pixels, within which centroids share a row or column
pub const DEFAULT_CLUSTER_TOLERANCE: f64 = 50.0;

/// Configuration for map analysis
#[derive(Debug, Clone, PartialEq)]
pub struct KmapConfig {
    /// Maximum centroid distance from a cluster's mean for a rectangle to join it
    pub cluster_tolerance: f64,
}

impl Default for KmapConfig {
    fn default() -> Self {
        KmapConfig {
            cluster_tolerance: DEFAULT_CLUSTER_TOLERANCE,
        }
    }
}

impl KmapConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clustering tolerance, in pixels
    pub fn with_tolerance(mut self, cluster_tolerance: f64) -> Self {
        self.cluster_tolerance = cluster_tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KmapConfig::new();
        assert_eq!(config.cluster_tolerance, 50.0);
        assert_eq!(config.with_tolerance(20.0).cluster_tolerance, 20.0);
    }

    #[test]
    fn test_tolerance_changes_layout() {
        let detections = vec![
            Detection::new("1", Rect::new(0, 0, 20, 20)),
            Detection::new("1", Rect::new(0, 30, 20, 50)),
        ];

        let merged = analyze(&detections, &KmapConfig::default()).unwrap();
        assert_eq!(merged.solution().unwrap().grid().rows(), 1);

        let split = analyze(&detections, &KmapConfig::new().with_tolerance(10.0)).unwrap();
        assert_eq!(split.solution().unwrap().grid().rows(), 2);
    }
}
