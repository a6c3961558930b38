#![warn(rust_2018_idioms)]

//! Decide whether a graph's vertices can be partitioned into at
//! most k cliques by reducing the question to propositional
//! satisfiability and delegating the search to an external SAT
//! solver.

mod graph;

mod parser;

mod input;
use input::read_instance;

mod encoding;
use encoding::encode_problem;

mod dimacs;
use dimacs::{parse_result, write_cnf_file, Verdict};

mod sat_solving;
use sat_solving::{solve, SolverRun};

mod decode;
use decode::decode_partition;

mod statistics;
use statistics::Statistics;

mod debug;
pub use debug::Error;
use debug::{print_formula, print_partition, print_solver_output, print_timeout, print_unsat};

#[cfg(not(tarpaulin_include))]
pub fn do_if_some<F, T>(optional: &mut Option<T>, f: F)
where
    F: FnOnce(&mut T),
{
    if let Some(val) = optional {
        f(val);
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    // Read the graph instance and the settings, then ...
    let (graph, mut statistics, settings) = read_instance()?;

    // ... reduce the clique cover question to a CNF formula ...
    time!(encoding_time, formula, encode_problem(&graph));
    do_if_some(&mut statistics, |st| st.log_encoded(&formula, encoding_time));

    if settings.print_formula {
        print_formula(formula.clauses.iter());
        return Ok(());
    }

    // ... put the formula on disk for the solver ...
    time!(
        write_time,
        write_result,
        write_cnf_file(&settings.cnf_output, &formula)
    );
    write_result?;
    do_if_some(&mut statistics, |st| st.log_written(write_time));

    // ... and let the solver decide it.
    time!(solver_time, run, solve(&settings.solver, &settings.cnf_output));
    let run = run?;
    do_if_some(&mut statistics, |st| st.log_solved(solver_time));

    match run {
        SolverRun::TimedOut => {
            print_timeout();
            do_if_some(&mut statistics, |st| st.log_verdict("unknown"));
        }
        SolverRun::Finished(output) => {
            print_solver_output(&output.stdout);

            match parse_result(&output, &settings.solver.codes, formula.variable_count)? {
                Verdict::Unsatisfiable => {
                    print_unsat();
                    do_if_some(&mut statistics, |st| st.log_verdict("unsatisfiable"));
                }
                Verdict::Satisfiable(model) => {
                    time!(decode_time, partition, decode_partition(&model, &graph));
                    print_partition(&partition);
                    do_if_some(&mut statistics, |st| {
                        st.log_decoded(decode_time);
                        st.log_verdict("satisfiable");
                    });
                }
            }
        }
    }

    do_if_some(&mut statistics, Statistics::log_end);
    if let Some(statistics) = statistics {
        statistics.save_statistics()?;
    }

    Ok(())
}
