//! One file per scheduling discipline, exported here

mod fcfs;
pub use fcfs::FcfsScheduler;

mod shortest_job;
pub use shortest_job::ShortestJobFirst;

mod shortest_remaining;
pub use shortest_remaining::ShortestRemainingTime;

mod round_robin;
pub use round_robin::RoundRobinScheduler;
