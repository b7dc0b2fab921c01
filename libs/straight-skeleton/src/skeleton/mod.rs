//! # Skeleton Output
//!
//! Nodes, facets, and the distance table produced by the wavefront engine.


use glam::DVec2;

/// One straight-skeleton node: a location where wavefront vertices met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position in the input plane
    pub position: DVec2,
    /// Distance to the nearest input edge, equal to the wavefront time
    pub distance: f64,
}

/// The region swept by one input edge.
///
/// Points are counter-clockwise. The first two points are the source edge,
/// the rest are skeleton nodes leading back to the edge start.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    /// Index of the source edge in input order (outer ring first, then holes)
    pub edge: usize,
    /// Facet outline
    pub points: Vec<DVec2>,
    /// Distance of each point in `points`
    pub distances: Vec<f64>,
}

impl Facet {
    /// Number of points in the outline.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the facet has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest distance of any point of the facet.
    pub fn max_distance(&self) -> f64 {
        self.distances.iter().copied().fold(0.0, f64::max)
    }
}

/// A straight skeleton: one facet per input edge plus the node table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StraightSkeleton {
    facets: Vec<Facet>,
    nodes: Vec<Node>,
    tolerance: f64,
}

impl StraightSkeleton {
    /// Creates a skeleton from its facets and nodes.
    pub fn new(facets: Vec<Facet>, nodes: Vec<Node>, tolerance: f64) -> Self {
        Self {
            facets,
            nodes,
            tolerance,
        }
    }

    /// Facets in input edge order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Every node, input vertices included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Distance of the node at `point`, if there is one.
    ///
    /// Lookup matches within the merge tolerance the skeleton was built with.
    pub fn distance_of(&self, point: DVec2) -> Option<f64> {
        self.nodes
            .iter()
            .find(|node| node.position.distance(point) <= self.tolerance)
            .map(|node| node.distance)
    }

    /// The largest node distance, `0` for an empty skeleton.
    pub fn max_distance(&self) -> f64 {
        self.nodes.iter().map(|n| n.distance).fold(0.0, f64::max)
    }

    /// Appends another skeleton, keeping facet edge indices unique.
    pub fn extend(&mut self, other: StraightSkeleton) {
        let edge_offset = self.facets.len();
        self.facets.extend(other.facets.into_iter().map(|mut facet| {
            facet.edge += edge_offset;
            facet
        }));
        self.nodes.extend(other.nodes);
        self.tolerance = self.tolerance.max(other.tolerance);
    }
}

/// Node table that merges positions closer than the tolerance.
#[derive(Debug, Clone)]
pub(crate) struct NodeTable {
    nodes: Vec<Node>,
    tolerance: f64,
}

impl NodeTable {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            nodes: Vec::new(),
            tolerance,
        }
    }

    /// Returns the id of the node at `position`, creating it if needed.
    pub(crate) fn intern(&mut self, position: DVec2, distance: f64) -> usize {
        if let Some(id) = self
            .nodes
            .iter()
            .position(|n| n.position.distance(position) <= self.tolerance)
        {
            return id;
        }
        self.nodes.push(Node { position, distance });
        self.nodes.len() - 1
    }

    pub(crate) fn get(&self, id: usize) -> Node {
        self.nodes[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
