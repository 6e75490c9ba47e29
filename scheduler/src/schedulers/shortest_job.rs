use std::ops::Add;

use log::debug;

use crate::common_funcs::{pick_shortest, validate_workload};
use crate::process::Process;
use crate::scheduler::{ScheduleError, Scheduler};
use crate::Timestamp;

/// Non-preemptive shortest job first scheduler
///
/// Repeatedly picks the arrived, uncompleted process with the smallest
/// full burst and runs it to completion without interruption. Only
/// already-arrived processes are eligible, so the result is not the
/// globally optimal schedule when a shorter job arrives mid-burst.
///
/// The records come back in completion order.
pub struct ShortestJobFirst;

impl ShortestJobFirst {
    pub fn new() -> ShortestJobFirst {
        ShortestJobFirst
    }
}

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "Shortest Job First (SJF)"
    }

    fn schedule(&self, mut workload: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
        validate_workload(&workload)?;

        let mut completed: Vec<Process> = Vec::with_capacity(workload.len());
        let mut current_time = Timestamp::new(0);

        while completed.len() < workload.len() {
            match pick_shortest(&workload, current_time, Process::burst_time) {
                Some(idx) => {
                    let proc = &mut workload[idx];

                    debug!(
                        "sjf: pid {} runs at {} for {}",
                        proc.pid(),
                        current_time.get(),
                        proc.burst_time()
                    );

                    /* the selected process runs its whole burst in one
                    go, nothing can preempt it */
                    proc.complete_from_start(current_time);
                    current_time = current_time.add(proc.burst_time());
                    completed.push(*proc);
                }
                /* nothing has arrived yet, idle for one unit */
                None => current_time = current_time.add(1),
            }
        }

        Ok(completed)
    }
}
