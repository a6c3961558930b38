//! Decoding of a satisfying assignment back into a partition of
//! the vertices into cliques.

use crate::{
    dimacs::Model,
    encoding::VariableMap,
    graph::{Graph, VertexIndex},
};

/// Non-empty cliques in color order, members ascending.
pub type CliquePartition = Vec<Vec<VertexIndex>>;

/// Map the model back onto the graph: vertex v belongs to clique c
/// iff the variable for (v, c) is true. The exactly-one color
/// constraints of the encoding guarantee a partition, so nothing
/// is re-validated here.
pub fn decode_partition(model: &Model, graph: &Graph) -> CliquePartition {
    let variables = VariableMap::new(graph);

    let mut buckets: Vec<Vec<VertexIndex>> =
        vec![Vec::new(); graph.min_clique_num() as usize];
    for vertex in graph.vertices() {
        for (bucket, color) in variables.colors().enumerate() {
            if model.contains(&variables.literal(vertex, color)) {
                buckets[bucket].push(vertex);
            }
        }
    }

    buckets.retain(|bucket| !bucket.is_empty());
    buckets
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphError;

    fn model(literals: &[i32]) -> Model {
        literals.iter().copied().collect()
    }

    /// Every vertex in exactly one bucket and every bucket
    /// pairwise adjacent or a singleton.
    fn assert_clique_partition(graph: &Graph, partition: &CliquePartition) {
        let mut covered = Vec::new();
        for clique in partition {
            for (position, vertex) in clique.iter().enumerate() {
                covered.push(*vertex);
                for other in clique.iter().skip(position + 1) {
                    assert!(
                        graph.lookup_edge(*vertex, *other),
                        "vertices {} and {} share a clique but no edge",
                        vertex,
                        other
                    );
                }
            }
        }
        covered.sort_unstable();
        let expected: Vec<_> = graph.vertices().collect();
        assert_eq!(expected, covered);
    }

    #[test]
    fn test_decode_triangle() -> Result<(), GraphError> {
        let mut graph = Graph::new(3, 1)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;
        graph.add_edge(1, 3)?;

        let partition = decode_partition(&model(&[1, 2, 3]), &graph);
        assert_eq!(vec![vec![1, 2, 3]], partition);
        assert_clique_partition(&graph, &partition);
        Ok(())
    }

    #[test]
    fn test_decode_path_two_cliques() -> Result<(), GraphError> {
        let mut graph = Graph::new(3, 2)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;

        // 1 and 2 share color 1, vertex 3 takes color 2.
        let partition = decode_partition(&model(&[1, 3, 6]), &graph);
        assert_eq!(vec![vec![1, 2], vec![3]], partition);
        assert_clique_partition(&graph, &partition);
        Ok(())
    }

    #[test]
    fn test_decode_keeps_color_order() -> Result<(), GraphError> {
        let mut graph = Graph::new(3, 2)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;

        // Vertex 3 alone on color 1, the edge 1-2 on color 2.
        let partition = decode_partition(&model(&[2, 4, 5]), &graph);
        assert_eq!(vec![vec![3], vec![1, 2]], partition);
        assert_clique_partition(&graph, &partition);
        Ok(())
    }

    #[test]
    fn test_decode_skips_empty_buckets() -> Result<(), GraphError> {
        let graph = Graph::new(4, 4)?;

        // Four singletons on colors 1..4; ids are (v-1)*4 + c.
        let partition = decode_partition(&model(&[1, 6, 11, 16]), &graph);
        assert_eq!(vec![vec![1], vec![2], vec![3], vec![4]], partition);
        assert_clique_partition(&graph, &partition);

        // Leaving color 2 unused must not leave a hole behind.
        let mut graph = Graph::new(2, 2)?;
        graph.add_edge(1, 2)?;
        let partition = decode_partition(&model(&[1, 3]), &graph);
        assert_eq!(vec![vec![1, 2]], partition);
        Ok(())
    }
}
