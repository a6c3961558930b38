use crate::graph::{Graph, VertexIndex};

pub type Literal = i32;

const MAX_LITERAL: Literal = i32::MAX;

/// The fixed bijection between (vertex, color) pairs and variable ids.
/// Encode and decode share this mapping; it is the only contract
/// between the two phases.
#[derive(Debug, Clone, Copy)]
pub struct VariableMap {
    nodes: VertexIndex,
    colors: VertexIndex,
}

impl VariableMap {
    pub fn new(graph: &Graph) -> Self {
        let nodes = graph.nodes_count();
        let colors = graph.min_clique_num();

        // The id space must stay within the positive literal range.
        debug_assert!((nodes as i64) * (colors as i64) < MAX_LITERAL as i64);

        VariableMap { nodes, colors }
    }

    /// The variable id stating that `vertex` is in the clique `color`.
    pub fn literal(&self, vertex: VertexIndex, color: VertexIndex) -> Literal {
        (vertex - 1) * self.colors + color
    }

    pub fn variable_count(&self) -> Literal {
        self.nodes * self.colors
    }

    pub fn colors(&self) -> impl Iterator<Item = VertexIndex> {
        1..=self.colors
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphError;
    use std::collections::HashSet;

    #[test]
    fn test_literal_formula() -> Result<(), GraphError> {
        let graph = Graph::new(3, 2)?;
        let variables = VariableMap::new(&graph);
        assert_eq!(1, variables.literal(1, 1));
        assert_eq!(2, variables.literal(1, 2));
        assert_eq!(3, variables.literal(2, 1));
        assert_eq!(6, variables.literal(3, 2));
        assert_eq!(6, variables.variable_count());
        Ok(())
    }

    #[test]
    fn test_literal_bijection() -> Result<(), GraphError> {
        let graph = Graph::new(7, 4)?;
        let variables = VariableMap::new(&graph);

        let mut seen = HashSet::new();
        for vertex in graph.vertices() {
            for color in variables.colors() {
                let literal = variables.literal(vertex, color);
                assert!(literal >= 1);
                assert!(literal <= variables.variable_count());
                assert!(seen.insert(literal));
            }
        }
        // Distinct and in range, so all of 1..=n*k is hit.
        assert_eq!(variables.variable_count() as usize, seen.len());
        Ok(())
    }
}
