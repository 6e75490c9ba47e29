use crate::process::Process;
use crate::scheduler::ScheduleError;
use crate::Timestamp;

/// Checks the structural invariants every discipline relies on
///
/// * `workload` - the processes about to be simulated
pub fn validate_workload(workload: &[Process]) -> Result<(), ScheduleError> {
    if workload.is_empty() {
        return Err(ScheduleError::EmptyWorkload);
    }

    for proc in workload.iter() {
        if proc.burst_time() == 0 {
            return Err(ScheduleError::InvalidBurstTime { pid: proc.pid() });
        }
    }

    Ok(())
}

/// Index of the eligible process that should run next under a
/// shortest-first rule
///
/// Eligible means arrived at `now` and not completed. Ties on the key
/// are broken by earliest arrival, a full tie keeps the first match in
/// workload order, so the selection is deterministic.
///
/// * `key` - the quantity to minimize: the full burst for shortest job
/// first, the remaining time for shortest remaining time
pub(crate) fn pick_shortest<F>(workload: &[Process], now: Timestamp, key: F) -> Option<usize>
where
    F: Fn(&Process) -> usize,
{
    let mut best: Option<usize> = None;

    for (idx, proc) in workload.iter().enumerate() {
        if proc.is_completed() || !proc.has_arrived(now) {
            continue;
        }

        match best {
            None => best = Some(idx),
            Some(found) => {
                let other = &workload[found];
                if key(proc) < key(other)
                    || (key(proc) == key(other) && proc.arrival_time() < other.arrival_time())
                {
                    best = Some(idx);
                }
            }
        }
    }

    best
}
