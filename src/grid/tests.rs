//! Tests for grid construction

use super::*;
use crate::detection::{label_detections, Detection};

fn cell(col: i32, row: i32) -> Rect {
    let cx = 100 * col + 50;
    let cy = 100 * row + 50;
    Rect::new(cx - 15, cy - 20, cx + 15, cy + 20)
}

#[test]
fn test_full_two_by_two() {
    let rects = vec![
        LabeledRect::new(cell(0, 0), Mark::Must),
        LabeledRect::new(cell(1, 0), Mark::Must),
        LabeledRect::new(cell(0, 1), Mark::DontCare),
        LabeledRect::new(cell(1, 1), Mark::Must),
    ];

    let grid = Grid::from_labeled(&rects, 50.0);
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.state(0, 0), CellState::Must);
    assert_eq!(grid.state(0, 1), CellState::Must);
    assert_eq!(grid.state(1, 0), CellState::DontCare);
    assert_eq!(grid.state(1, 1), CellState::Must);
    assert_eq!(grid.source(1, 0), Some(&cell(0, 1)));
}

#[test]
fn test_detection_order_does_not_change_layout() {
    let detections = vec![
        Detection::new("1", cell(1, 1)),
        Detection::new("x", cell(0, 0)),
        Detection::new("1", cell(3, 1)),
        Detection::new("1", cell(2, 0)),
    ];

    let grid = Grid::from_labeled(&label_detections(&detections), 50.0);
    assert_eq!((grid.rows(), grid.cols()), (2, 4));
    assert_eq!(grid.to_string(), "X . 1 .\n. 1 . 1");
}

#[test]
fn test_wobbly_handwriting_still_aligns() {
    // Cells drift by up to 30px from the ideal lattice
    let rects = vec![
        LabeledRect::new(Rect::new(20, 10, 50, 60), Mark::Must),
        LabeledRect::new(Rect::new(135, 40, 160, 85), Mark::Must),
        LabeledRect::new(Rect::new(5, 120, 40, 170), Mark::Must),
        LabeledRect::new(Rect::new(120, 140, 150, 185), Mark::DontCare),
    ];

    let grid = Grid::from_labeled(&rects, 50.0);
    assert_eq!(grid.to_string(), "1 1\n1 X");
}

#[test]
fn test_from_clusters_skips_unmatched_rectangle() {
    let rects = vec![
        LabeledRect::new(cell(0, 0), Mark::Must),
        LabeledRect::new(cell(1, 0), Mark::Must),
    ];
    let rows = cluster::cluster_rects(&rects, &[0, 1], Axis::Row, 50.0);
    // Column pass only saw the first rectangle
    let cols = cluster::cluster_rects(&rects, &[0], Axis::Column, 50.0);

    let grid = Grid::from_clusters(&rects, &rows, &cols);
    assert_eq!((grid.rows(), grid.cols()), (1, 1));
    assert_eq!(grid.state(0, 0), CellState::Must);
    assert_eq!(grid.source(0, 0), Some(&cell(0, 0)));
}

#[test]
fn test_later_rectangle_overwrites_cell() {
    let rects = vec![
        LabeledRect::new(cell(0, 0), Mark::Must),
        LabeledRect::new(Rect::new(40, 35, 60, 65), Mark::DontCare),
    ];
    let grid = Grid::from_labeled(&rects, 50.0);
    assert_eq!((grid.rows(), grid.cols()), (1, 1));
    assert_eq!(grid.state(0, 0), CellState::DontCare);
}

#[test]
fn test_from_states_validates_shape() {
    assert_eq!(
        Grid::from_states(0, 2, vec![]),
        Err(GridError::EmptyGrid)
    );
    assert_eq!(
        Grid::from_states(2, 2, vec![CellState::Must; 3]),
        Err(GridError::StateCountMismatch {
            expected: 4,
            actual: 3
        })
    );

    let grid = Grid::from_states(1, 2, vec![CellState::Empty, CellState::Must]).unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.count(CellState::Must), 1);
    assert_eq!(grid.source(0, 1), None);
}

#[test]
fn test_cells_iterates_row_major() {
    let grid = Grid::from_states(
        2,
        2,
        vec![
            CellState::Must,
            CellState::Empty,
            CellState::DontCare,
            CellState::Empty,
        ],
    )
    .unwrap();
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells[1], (0, 1, CellState::Empty));
    assert_eq!(cells[2], (1, 0, CellState::DontCare));
}

#[test]
fn test_from_states_oversized_dimensions() {
    assert_eq!(
        Grid::from_states(usize::MAX, 2, vec![CellState::Must; 2]),
        Err(GridError::StateCountMismatch {
            expected: usize::MAX,
            actual: 2
        })
    );
}

#[test]
fn test_try_from_labeled_checks_cluster_counts() {
    let diagonal: Vec<LabeledRect> = (0..32)
        .map(|i| LabeledRect::new(cell(i, i), Mark::Must))
        .collect();
    assert_eq!(
        Grid::try_from_labeled(&diagonal, 50.0),
        Err(GridError::UnsupportedVariableCount {
            required: 10,
            available: 4
        })
    );

    let square = vec![
        LabeledRect::new(cell(0, 0), Mark::Must),
        LabeledRect::new(cell(1, 1), Mark::DontCare),
    ];
    assert_eq!(
        Grid::try_from_labeled(&square, 50.0),
        Ok(Grid::from_labeled(&square, 50.0))
    );
}
