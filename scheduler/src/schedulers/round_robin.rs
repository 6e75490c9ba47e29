use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::ops::Add;

use log::debug;

use crate::common_funcs::validate_workload;
use crate::process::Process;
use crate::scheduler::{ScheduleError, Scheduler};
use crate::Timestamp;

/// Preemptive round robin scheduler with a fixed time quantum
///
/// Keeps a FIFO ready queue of workload positions. The front process
/// runs for at most one quantum, then either completes or goes to the
/// back of the queue. Arrivals become visible at slice boundaries: the
/// workload is scanned once per slice, with the clock already advanced
/// past the slice, and newly arrived processes join the queue in
/// workload order behind the just-requeued one.
pub struct RoundRobinScheduler {
    /// The maximum time a process can run before being preempted
    quantum: NonZeroUsize,
}

impl RoundRobinScheduler {
    /// Creates a new RoundRobinScheduler
    ///
    /// * `quantum` - the time quanta that a process can run before it
    /// is preempted
    pub fn new(quantum: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round Robin (RR)"
    }

    fn schedule(&self, mut workload: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
        validate_workload(&workload)?;

        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut current_time = Timestamp::new(0);
        let mut completed = 0;

        enqueue_arrivals(&workload, &mut ready, current_time);

        while completed < workload.len() {
            let Some(idx) = ready.pop_front() else {
                /* nobody is ready: jump to the next arrival, or fail
                fast if the bookkeeping lost a process */
                match next_arrival(&workload) {
                    Some(time) if time > current_time => {
                        current_time = time;
                        enqueue_arrivals(&workload, &mut ready, current_time);
                        continue;
                    }
                    _ => return Err(ScheduleError::Stalled { time: current_time }),
                }
            };

            let proc = &mut workload[idx];
            if proc.is_completed() {
                /* cannot happen while the queue invariants hold */
                continue;
            }

            let slice = self.quantum.get().min(proc.remaining_time());
            proc.execute(slice);
            current_time = current_time.add(slice);

            debug!(
                "rr: pid {} ran {} units up to {}, {} remaining",
                proc.pid(),
                slice,
                current_time.get(),
                proc.remaining_time()
            );

            if proc.remaining_time() == 0 {
                proc.complete_at(current_time);
                completed += 1;
            } else {
                ready.push_back(idx);
            }

            /* arrivals during the slice become visible only now, at
            the slice boundary */
            enqueue_arrivals(&workload, &mut ready, current_time);
        }

        Ok(workload)
    }
}

/// Appends to the ready queue, in workload order, every arrived process
/// that is not completed and not already queued
fn enqueue_arrivals(workload: &[Process], ready: &mut VecDeque<usize>, now: Timestamp) {
    for (idx, proc) in workload.iter().enumerate() {
        if proc.is_completed() || !proc.has_arrived(now) {
            continue;
        }

        if !ready.contains(&idx) {
            ready.push_back(idx);
        }
    }
}

/// Earliest arrival among the processes that have not completed yet
fn next_arrival(workload: &[Process]) -> Option<Timestamp> {
    workload
        .iter()
        .filter(|proc| !proc.is_completed())
        .map(|proc| proc.arrival_time())
        .min()
}
