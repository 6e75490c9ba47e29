use std::error::Error;
use std::fmt;

use crate::process::Process;
use crate::{Pid, Timestamp};

/// A scheduling discipline
///
/// Every discipline takes an owned copy of the workload, runs all of
/// its processes to completion and returns the records with the timing
/// outputs filled in. The records come back in the order a report
/// should list them, which is not necessarily the input order.
pub trait Scheduler {
    /// Human readable name of the discipline, used by the report
    fn name(&self) -> &'static str;

    /// Runs the workload to completion
    ///
    /// * `workload` - independent copy of the canonical process list
    fn schedule(&self, workload: Vec<Process>) -> Result<Vec<Process>, ScheduleError>;
}

/// Errors raised before or during a simulation
///
/// A scheduler either completes every process of its workload or fails
/// with one of these; partial results are never returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// A process has a zero burst time
    ///
    /// A zero burst would never reach completion under the preemptive
    /// disciplines, so it is rejected before any simulation starts.
    InvalidBurstTime { pid: Pid },
    /// The workload contains no processes
    EmptyWorkload,
    /// The ready queue drained while uncompleted processes remain and
    /// none of them has a future arrival
    Stalled { time: Timestamp },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidBurstTime { pid } => {
                write!(f, "process {} has a zero burst time", pid)
            }
            ScheduleError::EmptyWorkload => {
                write!(f, "the workload contains no processes")
            }
            ScheduleError::Stalled { time } => {
                write!(
                    f,
                    "no runnable process and no future arrival at time {}",
                    time.get()
                )
            }
        }
    }
}

impl Error for ScheduleError {}
