// src/engine.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, SubsecRound};
use log::{debug, info, log_enabled, Level};

use crate::config::GenSettings;
use crate::drivers::{Dataset, DatasetAssembler, SimError};
use crate::recorder::DataRecorder;
use crate::stats::ChannelStats;
use crate::types::{Channel, SampleRow};

/// What one generation run produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub total_rows: usize,
    pub output_path: PathBuf,
    pub label_counts: BTreeMap<String, usize>,
}

/// Local wall-clock time, truncated to whole seconds.
pub fn clock_start() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Builds the dataset described by `settings` and writes it out.
pub fn run(settings: &GenSettings, start: NaiveDateTime) -> Result<RunSummary, SimError> {
    info!("Defining data profiles...");
    let profiles = settings.profile_table()?;
    let schedule = settings.resolve_schedule(&profiles)?;
    info!(
        "{} activity profiles, {} schedule entries, {} rows planned",
        profiles.len(),
        schedule.entries().len(),
        schedule.total_rows()
    );

    let mut rng = settings.rng();
    let dataset = DatasetAssembler::new(&schedule).build_dataset(start, &mut rng)?;

    let label_counts = dataset.label_counts();
    if log_enabled!(Level::Debug) {
        for (label, stats) in label_channel_stats(&dataset) {
            let means: Vec<String> = Channel::ALL
                .iter()
                .map(|&channel| {
                    format!("{}={:.2}", channel.name(), stats[channel.index()].mean)
                })
                .collect();
            debug!("  {label}: {}", means.join(" "));
        }
    }

    let recorder = DataRecorder::new(&settings.output_path);
    recorder.write(&dataset)?;

    Ok(RunSummary {
        total_rows: dataset.len(),
        output_path: recorder.path().to_path_buf(),
        label_counts,
    })
}

/// Per-label statistics of every channel, in one pass over the rows.
pub fn label_channel_stats(dataset: &Dataset) -> BTreeMap<String, [ChannelStats; 4]> {
    let mut grouped: BTreeMap<&str, Vec<&SampleRow>> = BTreeMap::new();
    for row in dataset.rows() {
        grouped.entry(row.label.as_str()).or_default().push(row);
    }
    grouped
        .into_iter()
        .map(|(label, rows)| {
            let stats = Channel::ALL
                .map(|channel| ChannelStats::from_rows(rows.iter().copied(), channel));
            (label.to_owned(), stats)
        })
        .collect()
}
