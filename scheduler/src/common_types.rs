use std::fmt;
use std::ops::Add;

/// Identifier of a process
///
/// Equal to the 1-based position of the process in the canonical
/// workload, so it stays stable across all scheduler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pid(usize);

impl Pid {
    /// Creates a new Pid object
    ///
    /// * `pid` - position of the process in the workload, starting at 1
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point on the simulated clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(usize);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `time` - initial value of the Timestamp
    pub fn new(time: usize) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: usize) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}
