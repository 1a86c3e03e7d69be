//! End-to-end map simplification
//!
//! [`analyze`] takes recognizer output through every stage: labelling,
//! clustering, grid construction, variable encoding, group search and term
//! reduction. [`solve_grid`] starts from an already built [`Grid`].

use crate::detection::{label_detections, Detection, LabeledRect, Rect};
use crate::error::KmapError;
use crate::expression::Expression;
use crate::grid::{Encoding, Grid, GridError};
use crate::overlay::{self, Color, GroupOverlay};
use crate::search::{self, Group};
use crate::term::ProductTerm;
use crate::KmapConfig;
use serde::Serialize;
use tracing::debug;

/// Why there was nothing to simplify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NothingDetected {
    /// The recognizer found no text at all
    NoText,
    /// Text was found but none of it was `1`, `X` or `*`
    NoRelevantElements,
}

/// Outcome of analysing one image
#[derive(Debug, Clone)]
pub enum Analysis {
    NothingDetected(NothingDetected),
    Solved(Solution),
}

impl Analysis {
    /// The solution, if any cell was recognized
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Analysis::Solved(solution) => Some(solution),
            Analysis::NothingDetected(_) => None,
        }
    }

}

/// A simplified map: groups, their terms and the resulting expression
#[derive(Debug, Clone)]
pub struct Solution {
    grid: Grid,
    encoding: Encoding,
    groups: Vec<Group>,
    terms: Vec<ProductTerm>,
    expression: Expression,
}

impl Solution {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Accepted groups, largest first
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// One term per group, in the same order as [`Solution::groups`]
    ///
    /// Includes tautological (empty) terms.
    pub fn terms(&self) -> &[ProductTerm] {
        &self.terms
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Rectangles to outline on the source image
    pub fn overlays(&self) -> Vec<GroupOverlay> {
        overlay::overlays(&self.grid, &self.groups)
    }

    /// Serializable summary of the solution
    pub fn report(&self) -> SolutionReport {
        let mut overlays = self.overlays().into_iter().peekable();
        let groups = self
            .groups
            .iter()
            .zip(&self.terms)
            .enumerate()
            .map(|(i, (group, term))| {
                let drawn = overlays.next_if(|o| o.group == i);
                GroupReport {
                    group: *group,
                    term: term.to_string(),
                    bounds: drawn.map(|o| o.bounds),
                    color: drawn.map(|o| o.color),
                    stroke_width: drawn.map(|o| o.stroke_width),
                }
            })
            .collect();

        SolutionReport {
            expression: self.expression.to_string(),
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            variables: self.encoding.variables().to_vec(),
            groups,
        }
    }
}

/// JSON-friendly view of a [`Solution`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReport {
    pub expression: String,
    pub rows: usize,
    pub cols: usize,
    pub variables: Vec<&'static str>,
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    #[serde(flatten)]
    pub group: Group,
    pub term: String,
    pub bounds: Option<Rect>,
    pub color: Option<Color>,
    pub stroke_width: Option<u32>,
}

/// Simplify the map described by recognizer output
///
/// ```
/// use kmap_vision::{analyze, Detection, KmapConfig, Rect};
///
/// let detections = vec![
///     Detection::new("1", Rect::new(30, 30, 70, 70)),
///     Detection::new("1", Rect::new(130, 30, 170, 70)),
///     Detection::new("0", Rect::new(30, 130, 70, 170)),
///     Detection::new("X", Rect::new(130, 130, 170, 170)),
/// ];
///
/// let analysis = analyze(&detections, &KmapConfig::default()).unwrap();
/// let solution = analysis.solution().unwrap();
/// assert_eq!(solution.expression().to_string(), "A'");
/// ```
pub fn analyze(detections: &[Detection], config: &KmapConfig) -> Result<Analysis, KmapError> {
    if detections.is_empty() {
        return Ok(Analysis::NothingDetected(NothingDetected::NoText));
    }
    analyze_labeled(&label_detections(detections), config)
}

/// Simplify a map from already labeled rectangles
pub fn analyze_labeled(rects: &[LabeledRect], config: &KmapConfig) -> Result<Analysis, KmapError> {
    if rects.is_empty() {
        debug!("no relevant elements detected");
        return Ok(Analysis::NothingDetected(NothingDetected::NoRelevantElements));
    }

    let grid = Grid::try_from_labeled(rects, config.cluster_tolerance)?;
    Ok(Analysis::Solved(solve_grid(grid)?))
}

/// Group and reduce an already built grid
///
/// ```
/// use kmap_vision::{solve_grid, Grid};
/// use kmap_vision::grid::CellState::{Empty, Must};
///
/// let grid = Grid::from_states(2, 2, vec![Must, Empty, Empty, Must]).unwrap();
/// let solution = solve_grid(grid).unwrap();
/// assert_eq!(solution.expression().to_string(), "A'B' + AB");
/// ```
pub fn solve_grid(grid: Grid) -> Result<Solution, GridError> {
    let encoding = Encoding::for_grid(&grid)?;
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        variables = encoding.num_variables(),
        "encoded grid"
    );

    let groups = search::find_groups(&grid);
    let terms: Vec<ProductTerm> = groups
        .iter()
        .map(|group| ProductTerm::for_group(group, &encoding))
        .collect();
    let expression = Expression::from_terms(terms.clone());
    debug!(groups = groups.len(), %expression, "simplified map");

    Ok(Solution {
        grid,
        encoding,
        groups,
        terms,
        expression,
    })
}
