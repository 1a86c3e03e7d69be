//! Greedy largest-first group search
//!
//! Candidate windows are tried from the largest power-of-two area that fits
//! down to single cells. Within one area every `(height, width)` split into
//! two powers of two is tried, shortest height first, and anchors are scanned
//! row-major. A window is accepted when it holds no empty cell, no cell
//! claimed by an earlier group, and at least one must-have cell. Accepted
//! cells are never reconsidered.
//!
//! This is a heuristic cover, not prime-implicant minimization: it neither
//! wraps around the map edges nor lets groups overlap.

use crate::grid::{CellState, Grid};
use serde::Serialize;
use tracing::trace;

/// A rectangular block of cells accepted as one product term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Group {
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Group {
            row,
            col,
            height,
            width,
        }
    }

    /// Number of cells covered
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    /// Member cells as `(row, col)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Group {
            row,
            col,
            height,
            width,
        } = *self;
        (row..row + height).flat_map(move |r| (col..col + width).map(move |c| (r, c)))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.height).contains(&row)
            && (self.col..self.col + self.width).contains(&col)
    }

    /// Whether the two groups share any cell
    pub fn overlaps(&self, other: &Group) -> bool {
        self.row < other.row + other.height
            && other.row < self.row + self.height
            && self.col < other.col + other.width
            && other.col < self.col + self.width
    }
}

/// Largest power of two not exceeding `cells`, or 0 for an empty grid
pub fn max_group_size(cells: usize) -> usize {
    if cells == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - cells.leading_zeros())
    }
}

/// Every `(height, width)` with both factors powers of two and product `size`
///
/// Ordered by increasing height.
///
/// ```
/// use kmap_vision::search::group_dimensions;
///
/// assert_eq!(group_dimensions(4), vec![(1, 4), (2, 2), (4, 1)]);
/// assert_eq!(group_dimensions(6), vec![]);
/// ```
pub fn group_dimensions(size: usize) -> Vec<(usize, usize)> {
    if !size.is_power_of_two() {
        return Vec::new();
    }
    (0..=size.trailing_zeros())
        .map(|shift| (1usize << shift, size >> shift))
        .collect()
}

/// Working state of one search: the grid and which cells are already claimed
pub struct GroupSearcher<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
}

impl<'a> GroupSearcher<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        GroupSearcher {
            grid,
            visited: vec![false; grid.len()],
        }
    }

    /// Whether `(row, col)` belongs to an accepted group
    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.visited[row * self.grid.cols() + col]
    }

    /// Test a window without claiming it
    pub fn accepts(&self, candidate: &Group) -> bool {
        let mut has_must = false;
        for (row, col) in candidate.cells() {
            if self.is_visited(row, col) {
                return false;
            }
            match self.grid.state(row, col) {
                CellState::Empty => return false,
                CellState::Must => has_must = true,
                CellState::DontCare => {}
            }
        }
        has_must
    }

    fn claim(&mut self, group: &Group) {
        let cols = self.grid.cols();
        for (row, col) in group.cells() {
            self.visited[row * cols + col] = true;
        }
    }

    /// Run the search, returning accepted groups in discovery order
    pub fn run(mut self) -> Vec<Group> {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut groups = Vec::new();

        let mut size = max_group_size(self.grid.len());
        while size >= 1 {
            for (height, width) in group_dimensions(size) {
                if height > rows || width > cols {
                    continue;
                }
                for row in 0..=rows - height {
                    for col in 0..=cols - width {
                        let candidate = Group::new(row, col, height, width);
                        if self.accepts(&candidate) {
                            trace!(row, col, height, width, "accepted group");
                            self.claim(&candidate);
                            groups.push(candidate);
                        }
                    }
                }
            }
            size /= 2;
        }

        groups
    }
}

/// Find the greedy cover of `grid`
///
/// ```
/// use kmap_vision::Grid;
/// use kmap_vision::grid::CellState::{Empty, Must};
/// use kmap_vision::search::{find_groups, Group};
///
/// let grid = Grid::from_states(2, 2, vec![Must, Must, Empty, Must]).unwrap();
/// let groups = find_groups(&grid);
/// assert_eq!(groups, vec![Group::new(0, 0, 1, 2), Group::new(1, 1, 1, 1)]);
/// ```
pub fn find_groups(grid: &Grid) -> Vec<Group> {
    GroupSearcher::new(grid).run()
}
