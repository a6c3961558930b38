use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("could not start the solver process: {0}")]
    Spawn(io::Error),
    #[error("could not capture the solver output: {0}")]
    Output(io::Error),
    #[error("solver was terminated by a signal")]
    NoExitCode,
    #[error("solver exited with unmapped code {0}")]
    UnmappedExitCode(i32),
}

/// Which exit codes the solver binary uses to report its verdict.
/// The convention differs between solver binaries, so it is
/// configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodeMap {
    pub satisfiable: i32,
    pub unsatisfiable: i32,
}

impl Default for ExitCodeMap {
    fn default() -> Self {
        // SAT competition convention, shared by glucose and minisat.
        ExitCodeMap {
            satisfiable: 10,
            unsatisfiable: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Satisfiable,
    Unsatisfiable,
}

impl ExitCodeMap {
    pub fn classify(&self, exit_code: i32) -> Option<SolverStatus> {
        if exit_code == self.satisfiable {
            Some(SolverStatus::Satisfiable)
        } else if exit_code == self.unsatisfiable {
            Some(SolverStatus::Unsatisfiable)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct SolverConfig {
    pub binary: PathBuf,
    pub verbosity: u8,
    pub codes: ExitCodeMap,
    pub timeout: Option<Duration>,
}

/// Captured output of a finished solver run.
#[derive(Debug)]
pub struct SolverOutput {
    pub exit_code: i32,
    pub stdout: String,
}

#[derive(Debug)]
pub enum SolverRun {
    Finished(SolverOutput),
    TimedOut,
}

/// Run the solver on the serialized formula and capture its
/// output. Blocks until the solver finishes or, if a timeout is
/// configured, until the deadline passes.
pub fn solve(config: &SolverConfig, cnf_file: &Path) -> Result<SolverRun, SolverError> {
    let mut command = build_command(config, cnf_file);

    match config.timeout {
        None => {
            let output = command.output().map_err(SolverError::Spawn)?;
            let exit_code = output.status.code().ok_or(SolverError::NoExitCode)?;
            Ok(SolverRun::Finished(SolverOutput {
                exit_code,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }))
        }
        Some(limit) => solve_with_deadline(command.stdout(Stdio::piped()), limit),
    }
}

fn build_command(config: &SolverConfig, cnf_file: &Path) -> Command {
    let mut command = Command::new(&config.binary);
    command
        .arg("-model")
        .arg(format!("-verb={}", config.verbosity))
        .arg(cnf_file);
    command
}

fn solve_with_deadline(command: &mut Command, limit: Duration) -> Result<SolverRun, SolverError> {
    let mut child = command.spawn().map_err(SolverError::Spawn)?;

    // Drain stdout on a separate thread so a large model cannot
    // fill the pipe and stall the solver.
    let mut stdout = child.stdout.take().expect("stdout was piped above");
    let reader = thread::spawn(move || {
        let mut raw = String::new();
        stdout.read_to_string(&mut raw).map(|_| raw)
    });

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait().map_err(SolverError::Output)? {
            let stdout = reader
                .join()
                .expect("solver output capture panicked")
                .map_err(SolverError::Output)?;
            let exit_code = status.code().ok_or(SolverError::NoExitCode)?;
            return Ok(SolverRun::Finished(SolverOutput { exit_code, stdout }));
        }

        if Instant::now() >= deadline {
            // Abandon the attempt; the verdict stays unknown.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(SolverRun::TimedOut);
        }

        thread::sleep(POLL_INTERVAL);
    }
}
