//! Property-based tests for the grouping pipeline
//!
//! Grids are limited to at most four rows and four columns, where every
//! contiguous power-of-two window of Gray codes is a sub-cube, so a group's
//! term holds on exactly its own cells.

use kmap_vision::grid::encoding::{gray_code, VariableCode};
use kmap_vision::grid::CellState::{self, DontCare, Empty, Must};
use kmap_vision::{analyze, solve_grid, Detection, Grid, KmapConfig, Rect};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = CellState> {
    prop_oneof![Just(Empty), Just(Must), Just(DontCare)]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (0u32..=2, 0u32..=2).prop_flat_map(|(row_bits, col_bits)| {
        let rows = 1usize << row_bits;
        let cols = 1usize << col_bits;
        prop::collection::vec(arb_state(), rows * cols)
            .prop_map(move |states| Grid::from_states(rows, cols, states).unwrap())
    })
}

/// Detections laid out on a 100px lattice with up to 15px of jitter
fn lattice_detections(grid: &Grid, jitter: &[(i32, i32)]) -> Vec<Detection> {
    grid.cells()
        .filter(|&(_, _, state)| state.is_marked())
        .map(|(row, col, state)| {
            let (dx, dy) = jitter[row * grid.cols() + col];
            let cx = 100 * col as i32 + 50 + dx;
            let cy = 100 * row as i32 + 50 + dy;
            let text = if state == Must { "1" } else { "X" };
            Detection::new(text, Rect::new(cx - 10, cy - 15, cx + 10, cy + 15))
        })
        .collect()
}

fn every_line_marked(grid: &Grid) -> bool {
    (0..grid.rows()).all(|r| (0..grid.cols()).any(|c| grid.state(r, c).is_marked()))
        && (0..grid.cols()).all(|c| (0..grid.rows()).any(|r| grid.state(r, c).is_marked()))
}

#[test]
fn proptest_gray_code_adjacency() {
    proptest!(|(bits in 1u8..=16, seed in any::<u32>())| {
        let limit = (1u32 << bits) - 1;
        let i = seed % limit;
        let a = VariableCode::new(gray_code(i), bits);
        let b = VariableCode::new(gray_code(i + 1), bits);
        prop_assert_eq!(a.distance(&b), 1);
    });
}

#[test]
fn proptest_groups_are_valid() {
    proptest!(|(grid in arb_grid())| {
        let solution = solve_grid(grid.clone()).unwrap();
        let groups = solution.groups();

        for (i, group) in groups.iter().enumerate() {
            prop_assert!(group.height.is_power_of_two());
            prop_assert!(group.width.is_power_of_two());
            prop_assert!(group.row + group.height <= grid.rows());
            prop_assert!(group.col + group.width <= grid.cols());
            prop_assert!(group.cells().all(|(r, c)| grid.state(r, c).is_marked()));
            prop_assert!(group.cells().any(|(r, c)| grid.state(r, c) == Must));
            for earlier in &groups[..i] {
                prop_assert!(!group.overlaps(earlier));
            }
        }

        // Sizes never increase along discovery order
        for pair in groups.windows(2) {
            prop_assert!(pair[0].size() >= pair[1].size());
        }

        // Every must-have cell ends up in some group
        for (row, col, state) in grid.cells() {
            if state == Must {
                prop_assert!(groups.iter().any(|g| g.contains(row, col)));
            }
        }
    });
}

#[test]
fn proptest_terms_cover_exactly_their_group() {
    proptest!(|(grid in arb_grid())| {
        let solution = solve_grid(grid.clone()).unwrap();
        let encoding = solution.encoding();

        for (group, term) in solution.groups().iter().zip(solution.terms()) {
            for (row, col, _) in grid.cells() {
                prop_assert_eq!(
                    term.evaluate(&encoding.code(row, col)),
                    group.contains(row, col)
                );
            }
        }

        let expression = solution.expression();
        for (row, col, state) in grid.cells() {
            let value = expression.evaluate(&encoding.code(row, col));
            match state {
                Must => prop_assert!(value),
                Empty => prop_assert!(!value),
                DontCare => {}
            }
        }
    });
}

#[test]
fn proptest_lattice_layout_is_recovered() {
    proptest!(|(
        grid in arb_grid().prop_filter("every row and column marked", every_line_marked),
        jitter in prop::collection::vec((-15i32..=15, -15i32..=15), 16)
    )| {
        let detections = lattice_detections(&grid, &jitter);
        let analysis = analyze(&detections, &KmapConfig::default()).unwrap();
        let solution = analysis.solution().unwrap();
        prop_assert_eq!(solution.grid().states(), grid.states());
    });
}

#[test]
fn proptest_analysis_is_deterministic() {
    proptest!(|(
        grid in arb_grid(),
        jitter in prop::collection::vec((-40i32..=40, -40i32..=40), 16)
    )| {
        let detections = lattice_detections(&grid, &jitter);
        let config = KmapConfig::default();
        let first = format!("{:?}", analyze(&detections, &config));
        let second = format!("{:?}", analyze(&detections, &config));
        prop_assert_eq!(first, second);
    });
}
