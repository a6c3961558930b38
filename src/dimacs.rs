//! Reading and writing of the DIMACS CNF interchange side of the
//! pipeline: serializing formulas for the solver and turning the
//! solver's textual output back into a verdict and a model.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    encoding::{CnfFormula, Literal},
    parser::Input,
    sat_solving::{ExitCodeMap, SolverError, SolverOutput, SolverStatus},
    Error,
};

/// Variable ids the solver assigned true.
pub type Model = HashSet<Literal>;

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable(Model),
    Unsatisfiable,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed model line {0:?}")]
    MalformedModelLine(String),
    #[error("model literal {0} outside the variable range 1..={1}")]
    LiteralOutOfRange(Literal, Literal),
    #[error("satisfiable exit code but no model in the solver output")]
    MissingModel,
}

/// Serialize the formula: `p cnf V C` header, then one line per
/// clause with space separated literals and the trailing 0.
pub fn write_formula(writer: &mut impl Write, formula: &CnfFormula) -> io::Result<()> {
    let mut buffer = itoa::Buffer::new();

    writeln!(
        writer,
        "p cnf {} {}",
        formula.variable_count,
        formula.clauses.len()
    )?;

    for clause in &formula.clauses {
        for literal in clause {
            writer.write_all(buffer.format(*literal).as_bytes())?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b"0\n")?;
    }

    writer.flush()
}

pub fn write_cnf_file(path: &Path, formula: &CnfFormula) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_formula(&mut writer, formula)
}

/// Interpret a finished solver run. The exit code decides the
/// verdict through the configured code map; for satisfiable runs
/// the model is collected from all `v` lines of the output.
pub fn parse_result(
    output: &SolverOutput,
    codes: &ExitCodeMap,
    variable_count: Literal,
) -> Result<Verdict, Error> {
    match codes.classify(output.exit_code) {
        Some(SolverStatus::Unsatisfiable) => Ok(Verdict::Unsatisfiable),
        Some(SolverStatus::Satisfiable) => {
            let model = collect_model(&output.stdout, variable_count)?;
            Ok(Verdict::Satisfiable(model))
        }
        None => Err(Error::from(SolverError::UnmappedExitCode(output.exit_code))),
    }
}

/// A model may span several `v` lines; they all contribute to one
/// literal set. The 0 sentinel ends the model and carries no
/// information, negative literals only confirm unused variables.
fn collect_model(raw_output: &str, variable_count: Literal) -> Result<Model, DecodeError> {
    let mut model = Model::new();
    let mut saw_model_line = false;

    for line in raw_output.lines() {
        if !line.starts_with('v') {
            continue;
        }
        saw_model_line = true;

        for literal in model_literals(line)? {
            if literal == 0 {
                continue;
            }
            if literal.abs() > variable_count {
                return Err(DecodeError::LiteralOutOfRange(literal, variable_count));
            }
            if literal > 0 {
                model.insert(literal);
            }
        }
    }

    if saw_model_line {
        Ok(model)
    } else {
        Err(DecodeError::MissingModel)
    }
}

fn model_literals(line: &str) -> Result<Vec<Literal>, DecodeError> {
    use nom::combinator::eof;

    let malformed = || DecodeError::MalformedModelLine(line.to_string());

    let (rest, literals) = parse_model_line(line).map_err(|_| malformed())?;
    eof::<Input<'_>, crate::parser::ParseError<'_>>(rest).map_err(|_| malformed())?;

    Ok(literals)
}

fn parse_model_line(input: Input<'_>) -> crate::parser::ParseResult<'_, Vec<Literal>> {
    use nom::{
        character::complete::{char, i32, space0, space1},
        multi::many1,
        sequence::{preceded, terminated},
    };

    preceded(
        char('v'),
        terminated(many1(preceded(space1, i32)), space0),
    )(input)
}
