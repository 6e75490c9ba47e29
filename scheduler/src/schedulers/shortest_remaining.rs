use std::ops::Add;

use log::{debug, trace};

use crate::common_funcs::{pick_shortest, validate_workload};
use crate::process::Process;
use crate::scheduler::{ScheduleError, Scheduler};
use crate::Timestamp;

/// Preemptive shortest remaining time scheduler
///
/// The decision granularity is one unit of time: every unit the
/// arrived, uncompleted process with the least remaining time gets the
/// CPU, so a newly arrived shorter process takes over at the very next
/// tick. Ties are broken by earliest arrival, then workload order.
///
/// The records come back in workload order.
pub struct ShortestRemainingTime;

impl ShortestRemainingTime {
    pub fn new() -> ShortestRemainingTime {
        ShortestRemainingTime
    }
}

impl Scheduler for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "Shortest Remaining Time (SRT)"
    }

    fn schedule(&self, mut workload: Vec<Process>) -> Result<Vec<Process>, ScheduleError> {
        validate_workload(&workload)?;

        let mut current_time = Timestamp::new(0);
        let mut completed = 0;

        while completed < workload.len() {
            if let Some(idx) = pick_shortest(&workload, current_time, Process::remaining_time) {
                let proc = &mut workload[idx];

                trace!(
                    "srt: pid {} runs the unit starting at {}",
                    proc.pid(),
                    current_time.get()
                );

                proc.execute(1);

                if proc.remaining_time() == 0 {
                    /* the unit just spent ends at the next clock edge */
                    proc.complete_at(current_time.add(1));
                    completed += 1;

                    debug!(
                        "srt: pid {} completed at {}",
                        proc.pid(),
                        current_time.get() + 1
                    );
                }
            }

            /* the clock ticks whether a process ran or the CPU idled */
            current_time = current_time.add(1);
        }

        Ok(workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pid;

    fn workload(specs: &[(usize, usize)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(idx, &(at, bt))| Process::new(Pid::new(idx + 1), Timestamp::new(at), bt))
            .collect()
    }

    #[test]
    fn reference_workload_timings() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(0, 8), (1, 4), (2, 9), (3, 5)]))
            .unwrap();

        /* pid 2 preempts pid 1 at time 1, pid 4 runs before pid 1
        resumes, pid 3 goes last */
        let waiting: Vec<usize> = done.iter().map(|proc| proc.waiting_time()).collect();
        assert_eq!(waiting, vec![9, 0, 15, 2]);

        let turnaround: Vec<usize> = done.iter().map(|proc| proc.turnaround_time()).collect();
        assert_eq!(turnaround, vec![17, 4, 24, 7]);
    }

    #[test]
    fn shorter_arrival_preempts_the_running_process() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(0, 5), (1, 2)]))
            .unwrap();

        /* pid 2 arrives with 2 remaining against pid 1's 4 and runs
        through; pid 1 resumes afterwards */
        assert_eq!(done[1].waiting_time(), 0);
        assert_eq!(done[1].turnaround_time(), 2);
        assert_eq!(done[0].waiting_time(), 2);
        assert_eq!(done[0].turnaround_time(), 7);
    }

    #[test]
    fn idle_units_advance_the_clock() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(2, 1), (4, 1)]))
            .unwrap();

        assert_eq!(done[0].waiting_time(), 0);
        assert_eq!(done[0].turnaround_time(), 1);
        assert_eq!(done[1].waiting_time(), 0);
        assert_eq!(done[1].turnaround_time(), 1);
    }

    #[test]
    fn remaining_time_ties_fall_back_to_arrival() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(1, 2), (0, 3)]))
            .unwrap();

        /* at time 1 both hold 2 remaining units; the earlier arrival
        keeps the CPU */
        assert_eq!(done[1].waiting_time(), 0);
        assert_eq!(done[1].turnaround_time(), 3);
        assert_eq!(done[0].waiting_time(), 2);
        assert_eq!(done[0].turnaround_time(), 4);
    }

    #[test]
    fn full_ties_keep_workload_order() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(0, 2), (0, 2)]))
            .unwrap();

        assert_eq!(done[0].waiting_time(), 0);
        assert_eq!(done[0].turnaround_time(), 2);
        assert_eq!(done[1].waiting_time(), 2);
        assert_eq!(done[1].turnaround_time(), 4);
    }

    #[test]
    fn completion_happens_exactly_once_per_process() {
        let done = ShortestRemainingTime::new()
            .schedule(workload(&[(0, 8), (1, 4), (2, 9), (3, 5)]))
            .unwrap();

        assert_eq!(done.iter().filter(|proc| proc.is_completed()).count(), 4);
        for proc in done.iter() {
            assert_eq!(proc.remaining_time(), 0);
        }
    }
}
