use crate::{Pid, Timestamp};

/// Bookkeeping record for one simulated process
///
/// The driver creates the record with only the identity and the static
/// timings filled in. A scheduler run fills in the waiting and
/// turnaround times of its own copy of the workload, so the runs of
/// different disciplines never interfere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    arrival_time: Timestamp,
    burst_time: usize,
    remaining_time: usize,
    waiting_time: usize,
    turnaround_time: usize,
    completed: bool,
}

impl Process {
    /// Creates a new Process record
    ///
    /// * `pid` - identifier, the 1-based position in the workload
    /// * `arrival_time` - moment the process becomes eligible to run
    /// * `burst_time` - total units of CPU time the process needs
    pub fn new(pid: Pid, arrival_time: Timestamp, burst_time: usize) -> Process {
        Process {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            completed: false,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }

    /// Units of CPU time the process still needs
    ///
    /// Only the preemptive disciplines consume this field.
    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    /// Valid once the process completed
    pub fn waiting_time(&self) -> usize {
        self.waiting_time
    }

    /// Valid once the process completed
    pub fn turnaround_time(&self) -> usize {
        self.turnaround_time
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True if the process is eligible to run at `time`
    pub fn has_arrived(&self, time: Timestamp) -> bool {
        self.arrival_time <= time
    }

    /// Consumes `time` units of the remaining burst
    pub(crate) fn execute(&mut self, time: usize) {
        self.remaining_time -= time;
    }

    /// Completes the process given the moment it was first scheduled
    ///
    /// Used by the non-preemptive disciplines, where a process runs its
    /// whole burst in one go.
    ///
    /// * `start` - moment the process started running
    pub(crate) fn complete_from_start(&mut self, start: Timestamp) {
        self.waiting_time = start.get() - self.arrival_time.get();
        self.turnaround_time = self.waiting_time + self.burst_time;
        self.remaining_time = 0;
        self.completed = true;
    }

    /// Completes the process given the moment its last unit finished
    ///
    /// Used by the preemptive disciplines, where only the completion
    /// point is known.
    ///
    /// * `end` - clock edge at which the last unit of the burst ended
    pub(crate) fn complete_at(&mut self, end: Timestamp) {
        self.turnaround_time = end.get() - self.arrival_time.get();
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.completed = true;
    }
}
