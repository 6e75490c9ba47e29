use std::ops::Add;

use log::debug;

use crate::common_funcs::validate_workload;
use crate::process::Process;
use crate::scheduler::{ScheduleError, Scheduler};
use crate::Timestamp;

/// First-come first-serve scheduler
///
/// Processes run to completion in arrival order, idling across any gap
/// before the next arrival. Equal arrivals keep their workload order.
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> FcfsScheduler {
        FcfsScheduler
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "First-Come, First-Serve (FCFS)"
    }

    fn schedule(&self, mut workload: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
        validate_workload(&workload)?;

        /* sort_by_key is stable, so pids with equal arrivals stay in
        workload order */
        workload.sort_by_key(|proc| proc.arrival_time());

        let mut current_time = Timestamp::new(0);
        for proc in workload.iter_mut() {
            if current_time < proc.arrival_time() {
                current_time = proc.arrival_time();
            }

            debug!(
                "fcfs: pid {} runs at {} for {}",
                proc.pid(),
                current_time.get(),
                proc.burst_time()
            );

            proc.complete_from_start(current_time);
            current_time = current_time.add(proc.burst_time());
        }

        Ok(workload)
    }
}
