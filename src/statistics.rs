//! Statistics about the different stages of the reduction pipeline.

use custom_debug_derive::Debug;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::debug::opt_fmt;
use crate::{
    encoding::{CnfFormula, Literal},
    graph::Graph,
    Error,
};

#[derive(Debug, PartialEq, Eq)]
pub enum StatisticsLevel {
    None,
    Basic,
    Full,
}

impl From<u64> for StatisticsLevel {
    #[cfg(not(tarpaulin_include))]
    fn from(level: u64) -> Self {
        match level {
            0 => Self::None,
            1 => Self::Basic,
            _ => Self::Full,
        }
    }
}

#[derive(Debug)]
pub struct Statistics {
    // Meta information
    #[debug(skip)]
    level: StatisticsLevel,
    #[debug(skip)]
    out_file: PathBuf,
    // Timings
    #[debug(skip)]
    start_time: Instant,
    #[debug(with = "opt_fmt")]
    encoding_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    write_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    solver_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    decode_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
    // Instance and formula shape
    graph_size: usize,
    edge_count: usize,
    clique_bound: usize,
    #[debug(with = "opt_fmt")]
    complement_edge_count: Option<usize>,
    #[debug(with = "opt_fmt")]
    variable_count: Option<Literal>,
    #[debug(with = "opt_fmt")]
    clause_count: Option<usize>,
    #[debug(with = "opt_fmt")]
    verdict: Option<&'static str>,
}

impl Statistics {
    #[cfg(not(tarpaulin_include))]
    pub fn new(level: StatisticsLevel, out_file: PathBuf, graph: &Graph) -> Self {
        debug_assert!(level != StatisticsLevel::None);

        let graph_size = graph.nodes_count() as usize;
        let edge_count = graph.number_edges();
        // The complement size follows from n and m without
        // another O(n^2) sweep.
        let complement_edge_count = if level == StatisticsLevel::Full {
            Some(graph_size * (graph_size - 1) / 2 - edge_count)
        } else {
            None
        };

        Statistics {
            level,
            out_file,
            start_time: Instant::now(),
            encoding_time: None,
            write_time: None,
            solver_time: None,
            decode_time: None,
            end_time: None,
            graph_size,
            edge_count,
            clique_bound: graph.min_clique_num() as usize,
            complement_edge_count,
            variable_count: None,
            clause_count: None,
            verdict: None,
        }
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_encoded(&mut self, formula: &CnfFormula, duration: Duration) {
        self.encoding_time = Some(duration);
        if self.level == StatisticsLevel::Full {
            self.variable_count = Some(formula.variable_count);
            self.clause_count = Some(formula.clauses.len());
        }
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_written(&mut self, duration: Duration) {
        self.write_time = Some(duration);
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_solved(&mut self, duration: Duration) {
        self.solver_time = Some(duration);
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_decoded(&mut self, duration: Duration) {
        self.decode_time = Some(duration);
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_verdict(&mut self, verdict: &'static str) {
        self.verdict = Some(verdict);
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    #[cfg(not(tarpaulin_include))]
    pub fn save_statistics(&self) -> Result<(), Error> {
        let mut statistics_file = File::create(&self.out_file)?;
        write!(statistics_file, "Raw Statistics: {:#?}", self).map_err(Error::from)
    }
}
