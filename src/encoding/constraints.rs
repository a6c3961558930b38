use itertools::Itertools;

use crate::graph::VertexIndex;

use super::{variables::VariableMap, Formula};

pub trait SatEncoding {
    fn encode_sat(&self, variables: &VariableMap) -> Formula;
}

/// A vertex must be in at least one clique.
pub struct ColorCoverage(pub VertexIndex);

/// A vertex may be in at most one clique.
pub struct ColorUniqueness(pub VertexIndex);

/// Both endpoints of a complement edge are non-adjacent in the
/// input graph, so they may not share a clique.
pub struct SameCliqueExclusion(pub VertexIndex, pub VertexIndex);

impl SatEncoding for ColorCoverage {
    fn encode_sat(&self, variables: &VariableMap) -> Formula {
        let ColorCoverage(vertex) = self;

        // v(1) || v(2) || ... || v(k)
        vec![variables
            .colors()
            .map(|color| variables.literal(*vertex, color))
            .collect()]
    }
}

impl SatEncoding for ColorUniqueness {
    fn encode_sat(&self, variables: &VariableMap) -> Formula {
        let ColorUniqueness(vertex) = self;

        // Pairwise mutual exclusion over the color pairs:
        // ~v(c1) || ~v(c2) for all c1 < c2
        variables
            .colors()
            .map(|color| variables.literal(*vertex, color))
            .combinations(2)
            .map(|color_pair| vec![-color_pair[0], -color_pair[1]])
            .collect()
    }
}

impl SatEncoding for SameCliqueExclusion {
    fn encode_sat(&self, variables: &VariableMap) -> Formula {
        let SameCliqueExclusion(start, end) = self;

        // ~u(c) || ~v(c) for every color c
        variables
            .colors()
            .map(|color| {
                vec![
                    -variables.literal(*start, color),
                    -variables.literal(*end, color),
                ]
            })
            .collect()
    }
}
