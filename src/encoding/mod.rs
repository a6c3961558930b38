//! Encoding of the clique cover decision problem as a CNF
//! formula which can then be decided by a SAT solver. A clique
//! cover of the input graph is exactly a proper coloring of its
//! complement, so the separation constraints range over
//! complement edges.

mod constraints;
use constraints::{ColorCoverage, ColorUniqueness, SameCliqueExclusion, SatEncoding};

mod variables;
pub use variables::{Literal, VariableMap};

use crate::graph::Graph;

pub type Clause = Vec<Literal>;
pub type Formula = Vec<Clause>;

/// A CNF formula together with the variable count needed for the
/// DIMACS header.
#[derive(Debug, PartialEq, Eq)]
pub struct CnfFormula {
    pub clauses: Formula,
    pub variable_count: Literal,
}

/// Encode the decision problem whether the graph's vertices can be
/// partitioned into at most k cliques into SAT.
pub fn encode_problem(graph: &Graph) -> CnfFormula {
    let variables = VariableMap::new(graph);
    let complement_edges = graph.complement_edges();

    let nodes = graph.nodes_count() as usize;
    let colors = graph.min_clique_num() as usize;
    let clause_count =
        nodes + nodes * (colors * (colors - 1)) / 2 + complement_edges.len() * colors;
    let mut clauses = Formula::with_capacity(clause_count);

    // The constraint family order is fixed for reproducible output:
    // coverage, then uniqueness, then separation.
    clauses.extend(
        graph
            .vertices()
            .flat_map(|vertex| ColorCoverage(vertex).encode_sat(&variables)),
    );
    clauses.extend(
        graph
            .vertices()
            .flat_map(|vertex| ColorUniqueness(vertex).encode_sat(&variables)),
    );
    clauses.extend(complement_edges.iter().flat_map(|(start, end)| {
        SameCliqueExclusion(*start, *end).encode_sat(&variables)
    }));

    CnfFormula {
        clauses,
        variable_count: variables.variable_count(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn test_encode_triangle_single_clique() -> Result<(), GraphError> {
        // Scenario: a triangle fits into one clique.
        let mut graph = Graph::new(3, 1)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;
        graph.add_edge(1, 3)?;

        let formula = encode_problem(&graph);
        assert_eq!(3, formula.variable_count);
        // Only the coverage clauses remain: no color pairs, no
        // complement edges.
        let expected: Formula = vec![vec![1], vec![2], vec![3]];
        assert_eq!(expected, formula.clauses);
        Ok(())
    }

    #[test]
    fn test_encode_path_two_colors() -> Result<(), GraphError> {
        // 1 - 2 - 3 with k=2; complement edge is (1,3).
        let mut graph = Graph::new(3, 2)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;

        let expected: Formula = vec![
            // every vertex gets a color
            vec![1, 2],
            vec![3, 4],
            vec![5, 6],
            // at most one color per vertex
            vec![-1, -2],
            vec![-3, -4],
            vec![-5, -6],
            // 1 and 3 are non-adjacent, so never in the same clique
            vec![-1, -5],
            vec![-2, -6],
        ];

        let formula = encode_problem(&graph);
        assert_eq!(6, formula.variable_count);
        assert_eq!(expected, formula.clauses);
        Ok(())
    }

    #[test]
    fn test_clause_count_formula() -> Result<(), GraphError> {
        // n + n*C(k,2) + |complement| * k, checked on the empty
        // graph with four vertices and four colors.
        let graph = Graph::new(4, 4)?;
        let formula = encode_problem(&graph);
        assert_eq!(16, formula.variable_count);
        assert_eq!(4 + 4 * 6 + 6 * 4, formula.clauses.len());
        Ok(())
    }

    #[test]
    fn test_clause_count_single_color() -> Result<(), GraphError> {
        // Path with k=1: no uniqueness pairs, one complement edge.
        let mut graph = Graph::new(3, 1)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;

        let formula = encode_problem(&graph);
        assert_eq!(3, formula.variable_count);
        assert_eq!(3 + 0 + 1, formula.clauses.len());
        Ok(())
    }

    #[test]
    fn test_clause_count_tight_bound() -> Result<(), GraphError> {
        // Four isolated vertices with only three colors; the
        // formula shape stays n + n*C(k,2) + |complement| * k.
        let graph = Graph::new(4, 3)?;
        let formula = encode_problem(&graph);
        assert_eq!(12, formula.variable_count);
        assert_eq!(4 + 4 * 3 + 6 * 3, formula.clauses.len());
        Ok(())
    }

    #[test]
    fn test_encoding_deterministic() -> Result<(), GraphError> {
        let mut graph = Graph::new(4, 2)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(3, 4)?;

        assert_eq!(encode_problem(&graph), encode_problem(&graph));
        Ok(())
    }

    #[test]
    fn test_uniqueness_pairs() -> Result<(), GraphError> {
        let graph = Graph::new(3, 3)?;
        let variables = VariableMap::new(&graph);
        let formula = ColorUniqueness(2).encode_sat(&variables);

        // C(3,2) exclusion clauses over vertex 2's literals 4,5,6.
        let expected: Formula = vec![vec![-4, -5], vec![-4, -6], vec![-5, -6]];
        assert_eq!(expected, formula);
        Ok(())
    }

    #[test]
    fn test_separation_per_color() -> Result<(), GraphError> {
        let graph = Graph::new(4, 2)?;
        let variables = VariableMap::new(&graph);
        let formula = SameCliqueExclusion(2, 4).encode_sat(&variables);

        let expected: Formula = vec![vec![-3, -7], vec![-4, -8]];
        assert_eq!(expected, formula);
        Ok(())
    }
}
