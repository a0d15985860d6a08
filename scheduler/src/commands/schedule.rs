use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use flowshop::{construct, makespan::total_time, Time};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ScheduleReport<'a> {
    dataset: &'a str,
    jobs: usize,
    machines: usize,
    order: Vec<usize>,
    makespan: Time,
    elapsed_ms: f64,
}

pub fn schedule(path: PathBuf, index: usize, json: bool) -> Result<()> {
    let datasets = super::load_datasets(&path)?;
    let dataset = datasets.get(index)?;

    let start_time = Instant::now();
    let construction = construct(dataset);
    let elapsed = start_time.elapsed();

    let makespan = total_time(dataset, &construction.order);
    if makespan != construction.makespan {
        anyhow::bail!(
            "makespan of the constructed order is {makespan}, construction reported {}",
            construction.makespan
        );
    }

    info!("scheduled {} in {elapsed:?}", dataset.name());

    let report = ScheduleReport {
        dataset: dataset.name(),
        jobs: dataset.len(),
        machines: dataset.machines(),
        order: construction.job_ids(dataset),
        makespan,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let order: Vec<String> = report.order.iter().map(ToString::to_string).collect();

        println!(
            "{} ({} jobs, {} machines)",
            report.dataset, report.jobs, report.machines
        );
        println!("order: {}", order.join(" "));
        println!("makespan: {}", report.makespan);
        println!("elapsed: {elapsed:?}");
    }

    Ok(())
}
