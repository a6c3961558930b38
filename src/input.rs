use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use crate::{
    graph::Graph,
    parser::parse_instance,
    sat_solving::{ExitCodeMap, SolverConfig},
    statistics::{Statistics, StatisticsLevel},
    Error,
};

const DEFAULT_INSTANCE: &str = "instances/input.in";
const DEFAULT_CNF_OUTPUT: &str = "formula.cnf";
const DEFAULT_SOLVER: &str = "glucose-syrup";
const DEFAULT_STATISTICS_OUT: &str = "statistics.out";

#[derive(Debug)]
pub struct Settings {
    /// Where to put the serialized DIMACS formula.
    pub cnf_output: PathBuf,
    /// Print the formula instead of solving it.
    pub print_formula: bool,
    /// How to invoke the external solver.
    pub solver: SolverConfig,
}

/// Parse the command line, load and validate the instance file
/// and set up the optional statistics collection.
#[cfg(not(tarpaulin_include))]
pub fn read_instance() -> Result<(Graph, Option<Statistics>, Settings), Error> {
    let mut instance_file = PathBuf::from(DEFAULT_INSTANCE);
    let mut cnf_output = PathBuf::from(DEFAULT_CNF_OUTPUT);
    let mut solver_binary = PathBuf::from(DEFAULT_SOLVER);
    let mut verbosity = 0u8;
    let mut codes = ExitCodeMap::default();
    let mut timeout = None;
    let mut print_formula = false;
    let mut statistics_level = StatisticsLevel::None;
    let mut statistics_out = PathBuf::from(DEFAULT_STATISTICS_OUT);

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let mut index = 0;
    while index < arguments.len() {
        match arguments[index].as_str() {
            "-i" => {
                instance_file = PathBuf::from(flag_value(&arguments, index)?);
                index += 2;
            }
            "-o" => {
                cnf_output = PathBuf::from(flag_value(&arguments, index)?);
                index += 2;
            }
            "-s" => {
                solver_binary = PathBuf::from(flag_value(&arguments, index)?);
                index += 2;
            }
            "-v" => {
                verbosity = parse_number("-v", flag_value(&arguments, index)?)?;
                index += 2;
            }
            "--sat-code" => {
                codes.satisfiable = parse_number("--sat-code", flag_value(&arguments, index)?)?;
                index += 2;
            }
            "--unsat-code" => {
                codes.unsatisfiable = parse_number("--unsat-code", flag_value(&arguments, index)?)?;
                index += 2;
            }
            "--timeout" => {
                let seconds: u64 = parse_number("--timeout", flag_value(&arguments, index)?)?;
                timeout = Some(Duration::from_secs(seconds));
                index += 2;
            }
            "--stats" => {
                let level: u64 = parse_number("--stats", flag_value(&arguments, index)?)?;
                statistics_level = StatisticsLevel::from(level);
                index += 2;
            }
            "--stats-out" => {
                statistics_out = PathBuf::from(flag_value(&arguments, index)?);
                index += 2;
            }
            "--print-formula" => {
                print_formula = true;
                index += 1;
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            unknown => {
                print_usage();
                return Err(cli_error(format!("unknown argument {}", unknown)));
            }
        }
    }

    let reader = BufReader::new(File::open(&instance_file)?);
    let graph = parse_instance(reader)?;

    let statistics = if statistics_level == StatisticsLevel::None {
        None
    } else {
        Some(Statistics::new(statistics_level, statistics_out, &graph))
    };

    let settings = Settings {
        cnf_output,
        print_formula,
        solver: SolverConfig {
            binary: solver_binary,
            verbosity,
            codes,
            timeout,
        },
    };

    Ok((graph, statistics, settings))
}

#[cfg(not(tarpaulin_include))]
fn flag_value<'a>(arguments: &'a [String], index: usize) -> Result<&'a str, Error> {
    arguments
        .get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| cli_error(format!("{} needs a value", arguments[index])))
}

#[cfg(not(tarpaulin_include))]
fn parse_number<N: FromStr>(flag: &str, value: &str) -> Result<N, Error> {
    value
        .parse()
        .map_err(|_| cli_error(format!("{} expects a number, got {}", flag, value)))
}

#[cfg(not(tarpaulin_include))]
fn cli_error(message: String) -> Error {
    Error::IoError(io::Error::new(io::ErrorKind::InvalidInput, message))
}

#[cfg(not(tarpaulin_include))]
fn print_usage() {
    eprintln!("Usage: ccsat [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i <file>          Instance file (default: {})", DEFAULT_INSTANCE);
    eprintln!("  -o <file>          DIMACS output file (default: {})", DEFAULT_CNF_OUTPUT);
    eprintln!("  -s <solver>        SAT solver binary (default: {})", DEFAULT_SOLVER);
    eprintln!("  -v <0|1>           Verbosity passed to the solver");
    eprintln!("  --sat-code <n>     Solver exit code meaning satisfiable (default: 10)");
    eprintln!("  --unsat-code <n>   Solver exit code meaning unsatisfiable (default: 20)");
    eprintln!("  --timeout <secs>   Abort the solver after this many seconds");
    eprintln!("  --print-formula    Print the formula instead of solving it");
    eprintln!("  --stats <0|1|2>    Statistics level (default: 0)");
    eprintln!("  --stats-out <file> Statistics file (default: {})", DEFAULT_STATISTICS_OUT);
}
