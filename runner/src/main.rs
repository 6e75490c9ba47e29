use std::error::Error;
use std::num::NonZeroUsize;
use std::process::exit;

use clap::{value_parser, Arg, Command};
use log::info;

use scheduler::{fcfs, round_robin, shortest_job_first, shortest_remaining_time};
use scheduler::{render_report, Scheduler};

mod workload;
use workload::{sample_workload, Workload, WorkloadError};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("schedsim: {}", err);
        exit(1);
    }
}

fn cli() -> Command {
    Command::new("schedsim")
        .version("0.1.0")
        .about("Compares classical CPU scheduling disciplines over one workload")
        .arg(
            Arg::new("workload")
                .long("workload")
                .value_name("FILE")
                .help("TOML workload file; the built-in sample is used when omitted"),
        )
        .arg(
            Arg::new("quantum")
                .long("quantum")
                .value_name("UNITS")
                .value_parser(value_parser!(usize))
                .help("Round robin time quantum, overrides the workload value"),
        )
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();

    let workload = match matches.get_one::<String>("workload") {
        Some(path) => Workload::from_file(path)?,
        None => sample_workload(),
    };

    let quantum = match matches.get_one::<usize>("quantum") {
        Some(&quantum) => NonZeroUsize::new(quantum).ok_or(WorkloadError::InvalidQuantum)?,
        None => workload.quantum()?,
    };

    /* the canonical list; every discipline gets its own clone */
    let procs = workload.build();

    let disciplines: Vec<Box<dyn Scheduler>> = vec![
        Box::new(fcfs()),
        Box::new(shortest_job_first()),
        Box::new(shortest_remaining_time()),
        Box::new(round_robin(quantum)),
    ];

    for discipline in disciplines.iter() {
        info!("running {}", discipline.name());

        let done = discipline.schedule(procs.clone())?;
        println!("{}\n", render_report(discipline.name(), &done)?);
    }

    Ok(())
}
