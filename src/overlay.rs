//! Group overlays for the renderer
//!
//! Each accepted group is drawn as the union of its cells' source rectangles,
//! outlined in a colour taken from a fixed rotating palette. Colours only
//! help tell groups apart and carry no meaning.

use crate::detection::Rect;
use crate::grid::Grid;
use crate::search::Group;
use serde::Serialize;

/// Outline width for group rectangles, in pixels
pub const STROKE_WIDTH: u32 = 5;

/// Outline colours, assigned to groups in turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

impl Color {
    /// The palette entry for the `index`-th drawn group, wrapping around
    pub fn from_index(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }
}

/// One rectangle to draw over the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupOverlay {
    /// Index of the group in discovery order
    pub group: usize,
    pub bounds: Rect,
    /// Position in the palette rotation
    pub color_index: usize,
    pub color: Color,
    /// Outline width in pixels
    pub stroke_width: u32,
}

/// Overlay rectangles for `groups`, in discovery order
///
/// Groups whose cells have no source rectangle (grids entered by hand) are
/// not drawn and do not advance the colour rotation.
pub fn overlays(grid: &Grid, groups: &[Group]) -> Vec<GroupOverlay> {
    let mut color_index = 0;
    let mut out = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        let bounds = group
            .cells()
            .filter_map(|(row, col)| grid.source(row, col).copied())
            .reduce(|acc, rect| acc.union(&rect));

        if let Some(bounds) = bounds {
            out.push(GroupOverlay {
                group: i,
                bounds,
                color_index,
                color: Color::from_index(color_index),
                stroke_width: STROKE_WIDTH,
            });
            color_index += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{LabeledRect, Mark};
    use crate::grid::CellState;
    use crate::search::find_groups;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(Color::from_index(0), Color::Red);
        assert_eq!(Color::from_index(5), Color::Magenta);
        assert_eq!(Color::from_index(6), Color::Red);
        assert_eq!(Color::from_index(13), Color::Blue);
    }

    #[test]
    fn test_bounds_are_union_of_cells() {
        let rects = vec![
            LabeledRect::new(Rect::new(10, 10, 30, 40), Mark::Must),
            LabeledRect::new(Rect::new(110, 5, 125, 45), Mark::DontCare),
            LabeledRect::new(Rect::new(105, 110, 130, 150), Mark::Must),
        ];
        let grid = Grid::from_labeled(&rects, 50.0);
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 2);

        let drawn = overlays(&grid, &groups);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].bounds, Rect::new(10, 5, 125, 45));
        assert_eq!(drawn[0].color, Color::Red);
        assert_eq!(drawn[0].stroke_width, STROKE_WIDTH);
        assert_eq!(drawn[1].bounds, Rect::new(105, 110, 130, 150));
        assert_eq!(drawn[1].color, Color::Blue);
    }

    #[test]
    fn test_manual_grid_draws_nothing() {
        let grid = Grid::from_states(1, 1, vec![CellState::Must]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert!(overlays(&grid, &groups).is_empty());
    }
}
