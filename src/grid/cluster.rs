//! Positional clustering of labeled rectangles into rows and columns
//!
//! Clustering is single-pass first-fit: each rectangle joins the first
//! existing cluster whose running mean lies within tolerance, otherwise it
//! opens a new cluster. Clusters are never rebalanced, so the result depends on
//! the order rectangles are visited in, and callers control that order
//! explicitly through an index slice.

use crate::detection::{LabeledRect, Rect};

/// Which coordinate a clustering pass measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cluster by centre-Y, producing rows
    Row,
    /// Cluster by centre-X, producing columns
    Column,
}

impl Axis {
    /// The centroid coordinate of `rect` along this axis
    pub fn coordinate(self, rect: &Rect) -> i32 {
        match self {
            Axis::Row => rect.center_y(),
            Axis::Column => rect.center_x(),
        }
    }
}

/// Rectangles judged to share a row or column
///
/// Members are stored as indices into the slice that was clustered, so
/// membership tests are by identity rather than by rectangle value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    members: Vec<usize>,
    sum: i64,
}

impl Cluster {
    fn new(index: usize, coordinate: i32) -> Self {
        Cluster {
            members: vec![index],
            sum: i64::from(coordinate),
        }
    }

    fn push(&mut self, index: usize, coordinate: i32) {
        self.members.push(index);
        self.sum += i64::from(coordinate);
    }

    /// Indices of the member rectangles, in the order they joined
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the rectangle at `index` belongs to this cluster
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Mean coordinate of all members
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.members.len() as f64
    }
}

/// Stable-sort `order` by the centroid coordinate of each rectangle on `axis`
///
/// Ties keep their position in `order`.
pub fn sort_by_axis(rects: &[LabeledRect], order: &[usize], axis: Axis) -> Vec<usize> {
    let mut sorted = order.to_vec();
    sorted.sort_by_key(|&i| axis.coordinate(&rects[i].rect));
    sorted
}

/// Cluster the rectangles named by `order`, visiting them in that order
///
/// A rectangle joins the first cluster (in creation order) whose mean
/// coordinate is strictly closer than `tolerance`.
pub fn cluster_rects(
    rects: &[LabeledRect],
    order: &[usize],
    axis: Axis,
    tolerance: f64,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for &index in order {
        let coordinate = axis.coordinate(&rects[index].rect);
        match clusters
            .iter_mut()
            .find(|cluster| (f64::from(coordinate) - cluster.mean()).abs() < tolerance)
        {
            Some(cluster) => cluster.push(index, coordinate),
            None => clusters.push(Cluster::new(index, coordinate)),
        }
    }

    clusters
}
