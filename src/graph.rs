//! Graph instances for the clique cover decision problem:
//! vertex count, the clique bound to test and an undirected
//! edge set with constant time membership lookup.

use std::collections::HashSet;

pub type VertexIndex = i32;

#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange(VertexIndex),
    LoopEdge(VertexIndex),
    BadCliqueBound(VertexIndex),
}

/// Undirected graph together with the clique bound k to test.
/// Vertices are labeled 1..=nodes_count. Immutable once the
/// input layer has built it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    nodes_count: VertexIndex,
    min_clique_num: VertexIndex,
    edges: HashSet<(VertexIndex, VertexIndex)>,
}

impl Graph {
    pub fn new(nodes_count: VertexIndex, min_clique_num: VertexIndex) -> Result<Self, GraphError> {
        if nodes_count < 1 {
            return Err(GraphError::VertexOutOfRange(nodes_count));
        }
        if min_clique_num < 1 || min_clique_num > nodes_count {
            return Err(GraphError::BadCliqueBound(min_clique_num));
        }
        Ok(Graph {
            nodes_count,
            min_clique_num,
            edges: HashSet::new(),
        })
    }

    pub fn nodes_count(&self) -> VertexIndex {
        self.nodes_count
    }

    pub fn min_clique_num(&self) -> VertexIndex {
        self.min_clique_num
    }

    pub fn number_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> {
        1..=self.nodes_count
    }

    /// Add an undirected edge. Both orientations map to the same
    /// canonical pair, so duplicate declarations collapse silently.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        if start == end {
            return Err(GraphError::LoopEdge(start));
        }
        self.edges.insert(canonical_pair(start, end));
        Ok(())
    }

    pub fn lookup_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.edges.contains(&canonical_pair(start, end))
    }

    /// All unordered vertex pairs that are not edges of the graph,
    /// each exactly once with the smaller endpoint first. A clique
    /// cover of the graph is a proper coloring of this complement.
    pub fn complement_edges(&self) -> Vec<(VertexIndex, VertexIndex)> {
        let mut complement = Vec::new();
        for start in 1..=self.nodes_count {
            for end in (start + 1)..=self.nodes_count {
                if !self.lookup_edge(start, end) {
                    complement.push((start, end));
                }
            }
        }
        complement
    }

    fn check_vertex(&self, vertex: VertexIndex) -> Result<(), GraphError> {
        if vertex < 1 || vertex > self.nodes_count {
            Err(GraphError::VertexOutOfRange(vertex))
        } else {
            Ok(())
        }
    }
}

fn canonical_pair(start: VertexIndex, end: VertexIndex) -> (VertexIndex, VertexIndex) {
    if start < end {
        (start, end)
    } else {
        (end, start)
    }
}
