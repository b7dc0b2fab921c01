//! # Wavefront Simulation
//!
//! Every input edge moves inward at unit speed. The polygon's vertices ride
//! along the angle bisectors with velocity `(n1 + n2) / (1 + n1·n2)`, where
//! `n1` and `n2` are the inward unit normals of the incident edges, so each
//! vertex stays on both offset lines at all times.
//!
//! ## Events
//!
//! The globally earliest event is processed each step:
//!
//! - **Edge event**: a wavefront edge shrinks to zero length and its two
//!   vertices merge into one
//! - **Split event**: a reflex vertex reaches a wavefront edge it is not
//!   incident to, splitting one loop in two or joining two loops
//!
//! After every event the loops are cleaned until stable:
//!
//! 1. Loops with at most two vertices or no area collapse into arcs
//! 2. Coincident consecutive vertices merge
//! 3. Spikes between antiparallel edges fold into a ridge
//!
//! Every vertex trajectory and every collapsed wavefront edge is recorded as
//! an arc on the faces of the edges it separates. Facets are then read off
//! each face as the path of arcs from the edge end back to its start.


use crate::skeleton::{Facet, NodeTable, StraightSkeleton};
use config::constants::{AREA_EPSILON, EPSILON};
use glam::DVec2;
use robust::{orient2d, Coord};
use tracing::{debug, trace, warn};

/// An input edge and the line it sweeps.
#[derive(Debug, Clone, Copy)]
struct SourceEdge {
    start: DVec2,
    end: DVec2,
    /// Unit direction from start to end
    direction: DVec2,
    /// Unit normal pointing into the polygon
    normal: DVec2,
    start_node: usize,
    end_node: usize,
}

impl SourceEdge {
    /// Signed distance of `point` ahead of this edge's wavefront at `time`.
    #[inline]
    fn distance_ahead(&self, point: DVec2, time: f64) -> f64 {
        (point - self.start).dot(self.normal) - time
    }
}

/// A moving wavefront vertex, linked into its loop.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    /// Position at `time`
    origin: DVec2,
    time: f64,
    velocity: DVec2,
    /// Source edge arriving at the vertex
    incoming: usize,
    /// Source edge leaving the vertex
    outgoing: usize,
    /// Skeleton node the vertex started from
    node: usize,
    prev: usize,
    next: usize,
    alive: bool,
}

impl Vertex {
    #[inline]
    fn position(&self, time: f64) -> DVec2 {
        self.origin + self.velocity * (time - self.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    /// The wavefront edge leaving `vertex` vanishes.
    Edge { vertex: usize },
    /// `vertex` hits the wavefront edge leaving `edge_start`.
    Split { vertex: usize, edge_start: usize },
}

impl Event {
    /// Edge events win ties so simultaneous collapses happen first.
    fn priority(&self) -> u8 {
        match self {
            Event::Edge { .. } => 0,
            Event::Split { .. } => 1,
        }
    }
}

/// The state of one straight-skeleton computation.
pub(crate) struct Wavefront {
    edges: Vec<SourceEdge>,
    vertices: Vec<Vertex>,
    nodes: NodeTable,
    /// Arcs `(node, node)` bounding each source edge's face
    arcs: Vec<Vec<(usize, usize)>>,
    time: f64,
    tolerance: f64,
}

impl Wavefront {
    /// Sets up the wavefront for prepared rings.
    ///
    /// Rings must wind with the interior on the left (outer counter-clockwise,
    /// holes clockwise) and contain no zero-length edges.
    pub(crate) fn new(rings: &[Vec<DVec2>], tolerance: f64) -> Option<Self> {
        let mut wavefront = Self {
            edges: Vec::new(),
            vertices: Vec::new(),
            nodes: NodeTable::new(tolerance),
            arcs: Vec::new(),
            time: 0.0,
            tolerance,
        };

        for ring in rings {
            let n = ring.len();
            let base = wavefront.edges.len();
            let ids: Vec<usize> = ring.iter().map(|&p| wavefront.nodes.intern(p, 0.0)).collect();

            for i in 0..n {
                let (start, end) = (ring[i], ring[(i + 1) % n]);
                let direction = (end - start).try_normalize()?;
                wavefront.edges.push(SourceEdge {
                    start,
                    end,
                    direction,
                    normal: direction.perp(),
                    start_node: ids[i],
                    end_node: ids[(i + 1) % n],
                });
                wavefront.arcs.push(Vec::new());
            }

            for i in 0..n {
                let incoming = base + (i + n - 1) % n;
                let outgoing = base + i;
                let velocity = wavefront.velocity(incoming, outgoing);
                wavefront.vertices.push(Vertex {
                    origin: ring[i],
                    time: 0.0,
                    velocity,
                    incoming,
                    outgoing,
                    node: ids[i],
                    prev: base + (i + n - 1) % n,
                    next: base + (i + 1) % n,
                    alive: true,
                });
            }
        }

        Some(wavefront)
    }

    /// Runs events until every loop has collapsed.
    ///
    /// Returns `None` when the budget is exhausted, arithmetic goes
    /// non-finite, or loops remain with no further event.
    pub(crate) fn run(&mut self, budget: usize) -> Option<()> {
        let mut steps = 0usize;
        self.clean(&mut steps, budget)?;

        while self.vertices.iter().any(|v| v.alive) {
            let Some((time, event)) = self.next_event() else {
                warn!(time = self.time, "wavefront stalled with live vertices");
                return None;
            };
            steps += 1;
            if steps > budget || !time.is_finite() {
                warn!(steps, budget, time, "straight skeleton gave up");
                return None;
            }

            self.time = time.max(self.time);
            trace!(time = self.time, ?event, "wavefront event");
            match event {
                Event::Edge { vertex } => self.edge_event(vertex),
                Event::Split { vertex, edge_start } => self.split_event(vertex, edge_start),
            }
            self.clean(&mut steps, budget)?;
        }

        debug!(
            steps,
            nodes = self.nodes.len(),
            max_time = self.time,
            "wavefront collapsed"
        );
        Some(())
    }

    /// Reads the facets off the recorded arcs.
    pub(crate) fn into_skeleton(self) -> Option<StraightSkeleton> {
        let mut facets = Vec::with_capacity(self.edges.len());
        for (index, edge) in self.edges.iter().enumerate() {
            let path = face_path(&self.arcs[index], edge.end_node, edge.start_node, self.nodes.len());
            let Some(path) = path.filter(|p| p.len() >= 2) else {
                warn!(edge = index, "no arc chain closes the facet");
                return None;
            };

            let mut points = vec![edge.start, edge.end];
            let mut distances = vec![0.0, 0.0];
            for &id in &path[1..path.len() - 1] {
                let node = self.nodes.get(id);
                points.push(node.position);
                distances.push(node.distance);
            }
            facets.push(Facet {
                edge: index,
                points,
                distances,
            });
        }
        Some(StraightSkeleton::new(
            facets,
            self.nodes.into_nodes(),
            self.tolerance,
        ))
    }

    // =========================================================================
    // KINEMATICS
    // =========================================================================

    fn velocity(&self, incoming: usize, outgoing: usize) -> DVec2 {
        let n1 = self.edges[incoming].normal;
        let n2 = self.edges[outgoing].normal;
        let denom = 1.0 + n1.dot(n2);
        if denom <= EPSILON {
            // Spike: folded by the next clean pass before time advances.
            DVec2::ZERO
        } else {
            (n1 + n2) / denom
        }
    }

    fn is_spike(&self, v: &Vertex) -> bool {
        1.0 + self.edges[v.incoming].normal.dot(self.edges[v.outgoing].normal) <= EPSILON
    }

    fn is_reflex(&self, v: &Vertex) -> bool {
        let d1 = self.edges[v.incoming].direction;
        let d2 = self.edges[v.outgoing].direction;
        let turn = orient2d(
            Coord { x: -d1.x, y: -d1.y },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: d2.x, y: d2.y },
        );
        turn < 0.0
    }

    fn position(&self, id: usize) -> DVec2 {
        self.vertices[id].position(self.time)
    }

    // =========================================================================
    // EVENT DETECTION
    // =========================================================================

    fn next_event(&self) -> Option<(f64, Event)> {
        let mut best: Option<(f64, Event)> = None;
        let mut offer = |time: f64, event: Event| {
            let better = match best {
                None => true,
                Some((t, e)) => {
                    time < t - EPSILON || (time <= t + EPSILON && event.priority() < e.priority())
                }
            };
            if better {
                best = Some((time, event));
            }
        };

        for (id, v) in self.vertices.iter().enumerate().filter(|(_, v)| v.alive) {
            if let Some(time) = self.edge_collapse_time(id) {
                offer(time, Event::Edge { vertex: id });
            }
            if self.is_reflex(v) {
                for (edge_start, w) in self.vertices.iter().enumerate() {
                    if !w.alive || edge_start == id || w.next == id {
                        continue;
                    }
                    if let Some(time) = self.split_time(id, edge_start) {
                        offer(time, Event::Split {
                            vertex: id,
                            edge_start,
                        });
                    }
                }
            }
        }
        best
    }

    /// When the wavefront edge leaving `id` shrinks to nothing.
    fn edge_collapse_time(&self, id: usize) -> Option<f64> {
        let a = &self.vertices[id];
        let b = &self.vertices[a.next];
        let direction = self.edges[a.outgoing].direction;
        let length = (b.position(self.time) - a.position(self.time))
            .dot(direction)
            .max(0.0);
        let rate = (b.velocity - a.velocity).dot(direction);
        (rate < -EPSILON).then(|| self.time + length / -rate)
    }

    /// When reflex vertex `id` reaches the wavefront edge leaving `edge_start`.
    fn split_time(&self, id: usize, edge_start: usize) -> Option<f64> {
        let v = &self.vertices[id];
        let w = &self.vertices[edge_start];
        let target = w.outgoing;
        if target == v.incoming || target == v.outgoing {
            return None;
        }
        let edge = &self.edges[target];

        let ahead = edge.distance_ahead(v.position(self.time), self.time);
        let closing = 1.0 - v.velocity.dot(edge.normal);
        if ahead < -self.tolerance || closing <= EPSILON {
            return None;
        }
        // A vertex already touching the edge splits it now. Parallel edges
        // colliding along a segment bring several reflex vertices onto the
        // same wavefront at once, and only the first is ahead of it.
        let time = self.time + ahead.max(0.0) / closing;

        let hit = v.position(time);
        let a = w.position(time);
        let b = self.vertices[w.next].position(time);
        let span = (b - a).dot(edge.direction);
        if span <= self.tolerance {
            return None;
        }
        let along = (hit - a).dot(edge.direction);
        (along >= -self.tolerance && along <= span + self.tolerance).then_some(time)
    }

    // =========================================================================
    // EVENT HANDLING
    // =========================================================================

    fn edge_event(&mut self, id: usize) {
        let a = self.vertices[id];
        let b_id = a.next;
        let b = self.vertices[b_id];
        let point = (self.position(id) + self.position(b_id)) * 0.5;
        let node = self.nodes.intern(point, self.time);

        self.finalize(id, node);
        self.finalize(b_id, node);
        self.spawn(point, a.incoming, b.outgoing, node, a.prev, b.next);
    }

    fn split_event(&mut self, id: usize, edge_start: usize) {
        let v = self.vertices[id];
        let target = self.vertices[edge_start].outgoing;
        let end = self.vertices[edge_start].next;
        let point = self.position(id);
        let node = self.nodes.intern(point, self.time);

        self.finalize(id, node);
        // Same loop: two loops result. Different loops: they join into one.
        self.spawn(point, v.incoming, target, node, v.prev, end);
        self.spawn(point, target, v.outgoing, node, edge_start, v.next);
    }

    /// Retires a vertex at `node`, recording its trajectory on both faces.
    fn finalize(&mut self, id: usize, node: usize) {
        let v = self.vertices[id];
        self.add_arc(v.incoming, v.node, node);
        self.add_arc(v.outgoing, v.node, node);
        self.vertices[id].alive = false;
    }

    /// Inserts a vertex between `prev` and `next`.
    fn spawn(
        &mut self,
        origin: DVec2,
        incoming: usize,
        outgoing: usize,
        node: usize,
        prev: usize,
        next: usize,
    ) -> usize {
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            origin,
            time: self.time,
            velocity: self.velocity(incoming, outgoing),
            incoming,
            outgoing,
            node,
            prev,
            next,
            alive: true,
        });
        self.vertices[prev].next = id;
        self.vertices[next].prev = id;
        id
    }

    fn add_arc(&mut self, face: usize, from: usize, to: usize) {
        if from == to {
            return;
        }
        let arcs = &mut self.arcs[face];
        if !arcs
            .iter()
            .any(|&(a, b)| (a == from && b == to) || (a == to && b == from))
        {
            arcs.push((from, to));
        }
    }

    // =========================================================================
    // CLEANUP
    // =========================================================================

    fn clean(&mut self, steps: &mut usize, budget: usize) -> Option<()> {
        loop {
            *steps += 1;
            if *steps > budget {
                warn!(budget, "straight skeleton cleanup exceeded its budget");
                return None;
            }
            if self.collapse_degenerate_loop()? {
                continue;
            }
            if self.merge_coincident() || self.fold_spike() {
                continue;
            }
            return Some(());
        }
    }

    /// Live loops as vertex id lists. `None` if the links are broken.
    fn loops(&self) -> Option<Vec<Vec<usize>>> {
        let mut seen = vec![false; self.vertices.len()];
        let mut loops = Vec::new();
        for start in 0..self.vertices.len() {
            if seen[start] || !self.vertices[start].alive {
                continue;
            }
            let mut ring = Vec::new();
            let mut id = start;
            loop {
                if seen[id] || !self.vertices[id].alive {
                    warn!(vertex = id, "wavefront loop links are broken");
                    return None;
                }
                seen[id] = true;
                ring.push(id);
                id = self.vertices[id].next;
                if id == start {
                    break;
                }
            }
            loops.push(ring);
        }
        Some(loops)
    }

    fn collapse_degenerate_loop(&mut self) -> Option<bool> {
        for ring in self.loops()? {
            let points: Vec<DVec2> = ring.iter().map(|&id| self.position(id)).collect();
            let n = points.len();
            let mut twice_area = 0.0;
            let mut perimeter = 0.0;
            for i in 0..n {
                let (p, q) = (points[i], points[(i + 1) % n]);
                twice_area += p.perp_dot(q);
                perimeter += p.distance(q);
            }
            if !twice_area.is_finite() {
                return None;
            }
            let threshold = AREA_EPSILON.max(perimeter * self.tolerance);
            if n > 2 && (twice_area / 2.0).abs() > threshold {
                continue;
            }

            let nodes: Vec<usize> = points
                .iter()
                .map(|&p| self.nodes.intern(p, self.time))
                .collect();
            for (i, &id) in ring.iter().enumerate() {
                let face = self.vertices[id].outgoing;
                self.add_arc(face, nodes[i], nodes[(i + 1) % n]);
                self.finalize(id, nodes[i]);
            }
            trace!(vertices = n, "collapsed wavefront loop");
            return Some(true);
        }
        Some(false)
    }

    fn merge_coincident(&mut self) -> bool {
        for id in 0..self.vertices.len() {
            let v = self.vertices[id];
            if !v.alive || v.next == id {
                continue;
            }
            let (p, q) = (self.position(id), self.position(v.next));
            if p.distance(q) > self.tolerance {
                continue;
            }
            let w = self.vertices[v.next];
            let point = (p + q) * 0.5;
            let node = self.nodes.intern(point, self.time);
            self.finalize(id, node);
            self.finalize(v.next, node);
            self.spawn(point, v.incoming, w.outgoing, node, v.prev, w.next);
            return true;
        }
        false
    }

    fn fold_spike(&mut self) -> bool {
        for id in 0..self.vertices.len() {
            let c = self.vertices[id];
            if !c.alive || !self.is_spike(&c) {
                continue;
            }
            let (p_id, n_id) = (c.prev, c.next);
            let (p, n) = (self.vertices[p_id], self.vertices[n_id]);
            let (p_pos, c_pos, n_pos) = (self.position(p_id), self.position(id), self.position(n_id));

            let c_node = self.nodes.intern(c_pos, self.time);
            self.finalize(id, c_node);

            if p_pos.distance(c_pos) <= c_pos.distance(n_pos) {
                let p_node = self.nodes.intern(p_pos, self.time);
                self.finalize(p_id, p_node);
                self.add_arc(c.incoming, c_node, p_node);
                self.add_arc(c.outgoing, c_node, p_node);
                self.spawn(p_pos, p.incoming, c.outgoing, p_node, p.prev, n_id);
            } else {
                let n_node = self.nodes.intern(n_pos, self.time);
                self.finalize(n_id, n_node);
                self.add_arc(c.incoming, c_node, n_node);
                self.add_arc(c.outgoing, c_node, n_node);
                self.spawn(n_pos, c.incoming, n.outgoing, n_node, p_id, n.next);
            }
            trace!(vertex = id, "folded wavefront spike");
            return true;
        }
        false
    }
}

/// Path of nodes from `from` to `to` through a face's arcs.
fn face_path(arcs: &[(usize, usize)], from: usize, to: usize, node_count: usize) -> Option<Vec<usize>> {
    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut stack = vec![from];
    visited[from] = true;

    while let Some(node) = stack.pop() {
        if node == to {
            let mut path = vec![to];
            let mut current = to;
            while let Some(prev) = parent[current] {
                path.push(prev);
                current = prev;
            }
            path.reverse();
            return Some(path);
        }
        for &(a, b) in arcs {
            let neighbour = if a == node {
                b
            } else if b == node {
                a
            } else {
                continue;
            };
            if !visited[neighbour] {
                visited[neighbour] = true;
                parent[neighbour] = Some(node);
                stack.push(neighbour);
            }
        }
    }
    None
}
