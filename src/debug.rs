//! Debug facilities, error types and the report output.
use itertools::Itertools;
use nom::error::{VerboseError, VerboseErrorKind};
use std::{
    fmt::{self, Debug},
    io,
};

use crate::{
    decode::CliquePartition,
    dimacs::DecodeError,
    encoding::{Clause, Literal},
    graph::GraphError,
    parser::ParseError,
    sat_solving::SolverError,
};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph initialization error")]
    GraphError(GraphError),
    #[error("Error while parsing the instance file")]
    ParseError(Vec<VerboseErrorKind>),
    #[error("I/O or command line error")]
    IoError(io::Error),
    #[error("Error while running the SAT solver: {0}")]
    SolverError(SolverError),
    #[error("Error while decoding the solver model: {0}")]
    DecodeError(DecodeError),
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

#[cfg(not(tarpaulin_include))]
fn handle_nom_verbose_error<E: Debug>(verbose: VerboseError<E>) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(msg, kind)| {
            eprintln!("{:?}", msg);
            kind
        })
        .collect()
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::ParseError(handle_nom_verbose_error(verbose))
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

impl From<SolverError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(se: SolverError) -> Self {
        Self::SolverError(se)
    }
}

impl From<DecodeError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(de: DecodeError) -> Self {
        Self::DecodeError(de)
    }
}

// Report output

#[cfg(not(tarpaulin_include))]
fn print_clause<'a>(clause: impl Iterator<Item = &'a Literal>) {
    print!("(");
    itertools::Itertools::intersperse(
        clause.map(|literal| {
            if *literal < 0 {
                format!("¬{}", -1 * literal)
            } else {
                format!("{}", literal)
            }
        }),
        " ∨ ".to_string(),
    )
    .for_each(|part| print!("{}", part));

    println!(") ∧");
}

#[cfg(not(tarpaulin_include))]
pub fn print_formula<'a>(formula: impl Iterator<Item = &'a Clause>) {
    formula.for_each(|clause| print_clause(clause.iter()));
    println!("True");
}

/// Echo the raw solver output so the verdict can be checked
/// against it.
#[cfg(not(tarpaulin_include))]
pub fn print_solver_output(raw_output: &str) {
    for line in raw_output.lines() {
        println!("{}", line);
    }
}

#[cfg(not(tarpaulin_include))]
pub fn print_partition(partition: &CliquePartition) {
    println!("Given input is satisfiable, here are the cliques:");
    for (index, clique) in partition.iter().enumerate() {
        println!(
            "Clique of color {} consists of vertices: {}",
            index + 1,
            clique.iter().join(" ")
        );
    }
}

#[cfg(not(tarpaulin_include))]
pub fn print_unsat() {
    println!("Given input is unsatisfiable");
}

#[cfg(not(tarpaulin_include))]
pub fn print_timeout() {
    println!("Solver hit the time limit, the verdict stays unknown");
}

// Custom formatter for debug printing

#[cfg(not(tarpaulin_include))]
pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

// Macros for timing single expressions and line based parsing

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

#[macro_export]
macro_rules! get_line {
    ($ret:ident, $lines:ident) => {
        let $ret = $lines.next().unwrap_or_else(|| {
            Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "Unexpected EOF!",
            ))
        })?;
    };
}

#[macro_export]
macro_rules! get_line_parse {
    ($lines:ident, $ret:ident, $exp:expr) => {
        crate::get_line!(line, $lines);
        let (res, $ret) = $exp(&line)?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}

#[macro_export]
macro_rules! parse_single_line {
    ($ret:ident, $exp:expr) => {
        let (res, $ret) = $exp?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}
