use crate::process::Process;
use crate::scheduler::ScheduleError;

/// Arithmetic means of the timing outputs across one completed run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
}

/// Computes the average waiting and turnaround times
///
/// * `procs` - completed processes, must be non-empty
pub fn averages(procs: &[Process]) -> Result<Averages, ScheduleError> {
    if procs.is_empty() {
        return Err(ScheduleError::EmptyWorkload);
    }

    let count = procs.len() as f64;
    let waiting: usize = procs.iter().map(|proc| proc.waiting_time()).sum();
    let turnaround: usize = procs.iter().map(|proc| proc.turnaround_time()).sum();

    Ok(Averages {
        waiting_time: waiting as f64 / count,
        turnaround_time: turnaround as f64 / count,
    })
}

/// Renders one discipline's results as a table followed by the averages
///
/// The rows keep the order of `procs`, which is the order the
/// discipline returned. The records are consumed read-only.
///
/// * `label` - name of the discipline that produced the results
/// * `procs` - completed processes, must be non-empty
pub fn render_report(label: &str, procs: &[Process]) -> Result<String, ScheduleError> {
    let avg = averages(procs)?;

    let mut out = String::new();
    out.push_str(&format!("Results for {}:\n", label));
    out.push_str(&format!(
        "{:<15}{:<15}{:<15}{:<15}{}\n",
        "Process ID", "Arrival Time", "Burst Time", "Waiting Time", "Turnaround Time"
    ));

    for proc in procs.iter() {
        out.push_str(&format!(
            "{:<15}{:<15}{:<15}{:<15}{}\n",
            proc.pid().get(),
            proc.arrival_time().get(),
            proc.burst_time(),
            proc.waiting_time(),
            proc.turnaround_time()
        ));
    }

    out.push_str(&format!("Average Waiting Time: {}\n", avg.waiting_time));
    out.push_str(&format!("Average Turnaround Time: {}", avg.turnaround_time));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedulers::FcfsScheduler;
    use crate::{Pid, Scheduler, Timestamp};

    fn workload(specs: &[(usize, usize)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(idx, &(at, bt))| Process::new(Pid::new(idx + 1), Timestamp::new(at), bt))
            .collect()
    }

    #[test]
    fn averages_over_the_reference_fcfs_run() {
        let done = FcfsScheduler::new()
            .schedule(workload(&[(0, 8), (1, 4), (2, 9), (3, 5)]))
            .unwrap();

        let avg = averages(&done).unwrap();
        assert_eq!(avg.waiting_time, 8.75);
        assert_eq!(avg.turnaround_time, 15.25);
    }

    #[test]
    fn report_lists_rows_in_the_given_order() {
        let done = FcfsScheduler::new()
            .schedule(workload(&[(0, 8), (1, 4), (2, 9), (3, 5)]))
            .unwrap();

        let report = render_report("First-Come, First-Serve (FCFS)", &done).unwrap();
        let expected = "\
Results for First-Come, First-Serve (FCFS):
Process ID     Arrival Time   Burst Time     Waiting Time   Turnaround Time
1              0              8              0              8
2              1              4              7              11
3              2              9              11             20
4              3              5              17             22
Average Waiting Time: 8.75
Average Turnaround Time: 15.25";

        assert_eq!(report, expected);
    }

    #[test]
    fn whole_number_averages_print_without_decimals() {
        let mut only = workload(&[(0, 4)]);
        only[0].complete_from_start(Timestamp::new(2));

        let report = render_report("Shortest Job First (SJF)", &only).unwrap();
        assert!(report.ends_with("Average Waiting Time: 2\nAverage Turnaround Time: 6"));
    }

    #[test]
    fn empty_results_are_an_error_not_a_division_by_zero() {
        assert_eq!(averages(&[]), Err(ScheduleError::EmptyWorkload));
        assert_eq!(
            render_report("Round Robin (RR)", &[]),
            Err(ScheduleError::EmptyWorkload)
        );
    }
}
