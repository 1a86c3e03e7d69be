//! The Karnaugh-map grid
//!
//! A [`Grid`] is built from labeled rectangles in two clustering passes: one
//! over centre-Y to find rows, one over centre-X to find columns. Each
//! rectangle lands in the cell at the intersection of its row and column
//! cluster, and the cell remembers the rectangle so group overlays can be
//! drawn back onto the image.

pub mod cluster;
pub mod encoding;
mod error;

#[cfg(test)]
mod tests;

pub use cluster::{Axis, Cluster};
pub use encoding::{Encoding, VariableCode, VARIABLE_NAMES};
pub use error::GridError;

use crate::detection::{LabeledRect, Mark, Rect};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// What a grid cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// No label recognized at this position
    #[default]
    Empty,
    /// The function must be 1 here
    Must,
    /// The function value is unconstrained here
    DontCare,
}

impl CellState {
    /// Whether the cell carries any label
    pub fn is_marked(self) -> bool {
        self != CellState::Empty
    }

    /// Single-character rendering used by [`Grid`]'s `Display`
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Must => '1',
            CellState::DontCare => 'X',
        }
    }
}

impl From<Mark> for CellState {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Must => CellState::Must,
            Mark::DontCare => CellState::DontCare,
        }
    }
}

/// A `rows x cols` array of cell states with their source rectangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    states: Vec<CellState>,
    sources: Vec<Option<Rect>>,
}

impl Grid {
    /// Cluster `rects` into rows and columns and place each one in the grid
    ///
    /// Rows are clustered over the rectangles stably sorted by centre-Y;
    /// columns over that same sequence stably re-sorted by centre-X.
    ///
    /// ```
    /// use kmap_vision::{Grid, LabeledRect, Mark, Rect};
    /// use kmap_vision::grid::CellState;
    ///
    /// let rects = vec![
    ///     LabeledRect::new(Rect::new(0, 0, 20, 20), Mark::Must),
    ///     LabeledRect::new(Rect::new(100, 100, 120, 120), Mark::DontCare),
    /// ];
    /// let grid = Grid::from_labeled(&rects, 50.0);
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    /// assert_eq!(grid.state(0, 0), CellState::Must);
    /// assert_eq!(grid.state(1, 1), CellState::DontCare);
    /// assert_eq!(grid.state(0, 1), CellState::Empty);
    /// ```
    pub fn from_labeled(rects: &[LabeledRect], tolerance: f64) -> Grid {
        let (rows, cols) = cluster_labeled(rects, tolerance);
        Self::from_clusters(rects, &rows, &cols)
    }

    /// Like [`Grid::from_labeled`], but rejects layouts that cannot be encoded
    ///
    /// The cluster counts are checked against [`Encoding`]'s limits before any
    /// cell is allocated, so scattered input cannot produce a huge grid.
    ///
    /// ```
    /// use kmap_vision::{Grid, GridError, LabeledRect, Mark, Rect};
    ///
    /// let rects: Vec<_> = (0..3)
    ///     .map(|i| LabeledRect::new(Rect::new(0, 100 * i, 20, 100 * i + 20), Mark::Must))
    ///     .collect();
    /// assert_eq!(
    ///     Grid::try_from_labeled(&rects, 50.0),
    ///     Err(GridError::MalformedGrid { rows: 3, cols: 1 })
    /// );
    /// ```
    pub fn try_from_labeled(rects: &[LabeledRect], tolerance: f64) -> Result<Grid, GridError> {
        let (rows, cols) = cluster_labeled(rects, tolerance);
        Encoding::new(rows.len(), cols.len())?;
        Ok(Self::from_clusters(rects, &rows, &cols))
    }

    /// Place clustered rectangles into a grid
    ///
    /// Row `i` of the grid is `rows[i]`; each member rectangle goes to the
    /// column whose cluster contains that same rectangle index. A rectangle in
    /// no column cluster is skipped. When two rectangles land in one cell the
    /// later one wins.
    pub fn from_clusters(rects: &[LabeledRect], rows: &[Cluster], cols: &[Cluster]) -> Grid {
        let mut grid = Grid::empty(rows.len(), cols.len());

        for (row, cluster) in rows.iter().enumerate() {
            for &index in cluster.members() {
                let Some(col) = cols.iter().position(|c| c.contains(index)) else {
                    warn!(index, "rectangle is in no column cluster, skipping");
                    continue;
                };
                let labeled = &rects[index];
                let cell = grid.index(row, col);
                grid.states[cell] = labeled.mark.into();
                grid.sources[cell] = Some(labeled.rect);
            }
        }

        grid
    }

    /// Build a grid directly from row-major cell states
    ///
    /// Useful when the map is entered by hand rather than recognized from an
    /// image. Cells built this way have no source rectangle.
    pub fn from_states(rows: usize, cols: usize, states: Vec<CellState>) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        // An unrepresentable cell count can never match
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if states.len() != expected {
            return Err(GridError::StateCountMismatch {
                expected,
                actual: states.len(),
            });
        }
        Ok(Grid {
            rows,
            cols,
            sources: vec![None; states.len()],
            states,
        })
    }

    fn empty(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            states: vec![CellState::Empty; rows * cols],
            sources: vec![None; rows * cols],
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, row: usize, col: usize) -> CellState {
        self.states[self.index(row, col)]
    }

    /// The rectangle recognized at `(row, col)`, if any
    pub fn source(&self, row: usize, col: usize) -> Option<&Rect> {
        self.sources[self.index(row, col)].as_ref()
    }

    /// Row-major cell states
    pub fn states(&self) -> &[CellState] {
        &self.states
    }

    /// Iterate over `(row, col, state)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / self.cols, i % self.cols, state))
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}

/// Cluster `rects` into rows and columns
///
/// Rows are clustered over the rectangles stably sorted by centre-Y; columns
/// over that same sequence stably re-sorted by centre-X.
pub fn cluster_labeled(rects: &[LabeledRect], tolerance: f64) -> (Vec<Cluster>, Vec<Cluster>) {
    let identity: Vec<usize> = (0..rects.len()).collect();
    let by_y = cluster::sort_by_axis(rects, &identity, Axis::Row);
    let rows = cluster::cluster_rects(rects, &by_y, Axis::Row, tolerance);

    let by_x = cluster::sort_by_axis(rects, &by_y, Axis::Column);
    let cols = cluster::cluster_rects(rects, &by_x, Axis::Column, tolerance);

    debug!(
        rects = rects.len(),
        rows = rows.len(),
        cols = cols.len(),
        "clustered rectangles"
    );

    (rows, cols)
}

/// Renders one line per row, cells separated by a space
///
/// ```
/// use kmap_vision::Grid;
/// use kmap_vision::grid::CellState::{DontCare, Empty, Must};
///
/// let grid = Grid::from_states(2, 2, vec![Must, Empty, DontCare, Must]).unwrap();
/// assert_eq!(grid.to_string(), "1 .\nX 1");
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.state(row, col).symbol())?;
            }
        }
        Ok(())
    }
}
