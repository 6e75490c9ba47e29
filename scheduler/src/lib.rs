//! A scheduling simulator library.
//!
//! This library provides the process record, four classical CPU
//! scheduling disciplines and the report formatting needed to compare
//! them over one workload.
//!
//! Every discipline implements the [`Scheduler`] trait: it receives an
//! owned copy of the workload, runs all processes to completion and
//! returns the records with their waiting and turnaround times filled
//! in. The driver hands each discipline its own copy, so the four runs
//! never interfere.

use std::num::NonZeroUsize;

mod schedulers;

pub use schedulers::FcfsScheduler;
pub use schedulers::RoundRobinScheduler;
pub use schedulers::ShortestJobFirst;
pub use schedulers::ShortestRemainingTime;

mod scheduler;
pub use crate::scheduler::{ScheduleError, Scheduler};

mod common_types;
pub use crate::common_types::Pid;
pub use crate::common_types::Timestamp;

mod common_funcs;
pub use common_funcs::validate_workload;

mod process;
pub use process::Process;

mod report;
pub use crate::report::{averages, render_report, Averages};

/// Returns a structure that implements the `Scheduler` trait with the
/// first-come first-serve policy
pub fn fcfs() -> impl Scheduler {
    FcfsScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with the
/// non-preemptive shortest job first policy
///
/// Once a process is selected it runs its whole burst uninterrupted;
/// only already-arrived processes compete for the CPU.
pub fn shortest_job_first() -> impl Scheduler {
    ShortestJobFirst::new()
}

/// Returns a structure that implements the `Scheduler` trait with the
/// preemptive shortest remaining time policy
///
/// The ready set is re-evaluated every unit of time, so a newly
/// arrived process with a shorter remaining time preempts the running
/// one at the next tick.
pub fn shortest_remaining_time() -> impl Scheduler {
    ShortestRemainingTime::new()
}

/// Returns a structure that implements the `Scheduler` trait with a
/// round robin scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is
/// preempted
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobinScheduler::new(quantum)
}
