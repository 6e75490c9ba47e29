use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::NonZeroUsize;

use serde::Deserialize;

use scheduler::{Pid, Process, Timestamp};

/// One `[[process]]` entry of a workload file
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ProcessSpec {
    pub arrival: usize,
    pub burst: usize,
}

/// A full simulation input: the ordered process set plus the round
/// robin quantum
///
/// Pids are never part of the file; they are assigned from the 1-based
/// position of each entry.
#[derive(Clone, Debug, Deserialize)]
pub struct Workload {
    quantum: usize,
    #[serde(rename = "process")]
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Reads and parses a TOML workload file
    ///
    /// * `path` - path to the file
    pub fn from_file(path: &str) -> Result<Workload, WorkloadError> {
        let contents = fs::read_to_string(path).map_err(WorkloadError::Io)?;
        let workload = toml::from_str(&contents).map_err(WorkloadError::Parse)?;

        Ok(workload)
    }

    /// The round robin quantum, rejected here if not strictly positive
    pub fn quantum(&self) -> Result<NonZeroUsize, WorkloadError> {
        NonZeroUsize::new(self.quantum).ok_or(WorkloadError::InvalidQuantum)
    }

    /// Builds the canonical process list
    pub fn build(&self) -> Vec<Process> {
        self.processes
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                Process::new(Pid::new(idx + 1), Timestamp::new(spec.arrival), spec.burst)
            })
            .collect()
    }
}

/// Workload used when no file is given on the command line
pub fn sample_workload() -> Workload {
    Workload {
        quantum: 3,
        processes: vec![
            ProcessSpec { arrival: 0, burst: 8 },
            ProcessSpec { arrival: 1, burst: 4 },
            ProcessSpec { arrival: 2, burst: 9 },
            ProcessSpec { arrival: 3, burst: 5 },
        ],
    }
}

/// Errors raised while loading a workload
#[derive(Debug)]
pub enum WorkloadError {
    Io(io::Error),
    Parse(toml::de::Error),
    InvalidQuantum,
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadError::Io(err) => write!(f, "cannot read workload file: {}", err),
            WorkloadError::Parse(err) => write!(f, "malformed workload file: {}", err),
            WorkloadError::InvalidQuantum => {
                write!(f, "the time quantum must be strictly positive")
            }
        }
    }
}

impl Error for WorkloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WorkloadError::Io(err) => Some(err),
            WorkloadError::Parse(err) => Some(err),
            WorkloadError::InvalidQuantum => None,
        }
    }
}
