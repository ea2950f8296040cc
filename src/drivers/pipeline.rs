use std::collections::BTreeMap;
use chrono::NaiveDateTime;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::drivers::source::{BlockSource, ScheduledSource};
use crate::drivers::{Schedule, SimError};
use crate::types::{SampleRow, TimeBlock};
/// Shuffled collection of every generated row.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<SampleRow>,
}
impl Dataset {
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        label_counts(&self.rows)
    }
}
pub fn label_counts<'a>(
    rows: impl IntoIterator<Item = &'a SampleRow>,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.label.clone()).or_insert(0) += 1;
    }
    counts
}
/// Drives block generation over a schedule and assembles the final dataset.
pub struct DatasetAssembler<'a> {
    schedule: &'a Schedule,
}
impl<'a> DatasetAssembler<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }
    /// Generates every scheduled block from `start`, then shuffles all rows.
    /// A failing block aborts the whole build.
    pub fn build_dataset<R: Rng + ?Sized>(
        &self,
        start: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Dataset, SimError> {
        let blocks = {
            let mut source = ScheduledSource::new(self.schedule, start, rng);
            collect_blocks(&mut source)?
        };
        Ok(assemble(blocks, rng))
    }
}
pub fn collect_blocks<S: BlockSource + ?Sized>(
    source: &mut S,
) -> Result<Vec<TimeBlock>, SimError> {
    let mut blocks = Vec::new();
    while let Some(block) = source.next_block()? {
        blocks.push(block);
    }
    Ok(blocks)
}
/// Concatenates blocks and applies one uniform permutation over all rows.
pub fn assemble<R: Rng + ?Sized>(blocks: Vec<TimeBlock>, rng: &mut R) -> Dataset {
    info!("Combining all data blocks...");
    let total = blocks.iter().map(TimeBlock::len).sum();
    let mut rows = Vec::with_capacity(total);
    for block in blocks {
        rows.extend(block.rows);
    }
    rows.shuffle(rng);
    Dataset { rows }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::block::BlockGenerator;
    use crate::drivers::profile::{FALL, RESTING};
    use crate::drivers::schedule::{default_schedule, ScheduleSpec};
    use crate::drivers::source::ManualSource;
    use crate::drivers::ProfileTable;
    use crate::types::{Channel, DATA_LOSS_LABEL, SENSOR_FAILURE_LABEL};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }
    #[test]
    fn default_build_has_9300_rows() {
        let profiles = ProfileTable::default();
        let schedule = Schedule::resolve(&default_schedule(), &profiles).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = DatasetAssembler::new(&schedule)
            .build_dataset(start(), &mut rng)
            .unwrap();
        assert_eq!(dataset.len(), schedule.total_rows());
        assert_eq!(dataset.len(), 9300);
        let counts = dataset.label_counts();
        assert_eq!(counts[RESTING], 3600);
        assert_eq!(counts[FALL], 100);
        assert_eq!(counts["Anomaly_HealthEvent"], 100);
        assert_eq!(counts[SENSOR_FAILURE_LABEL], 50);
        assert_eq!(counts[DATA_LOSS_LABEL], 50);
    }
    #[test]
    fn shuffle_preserves_label_histogram() {
        let profiles = ProfileTable::default();
        let generator = BlockGenerator::new(&profiles);
        let mut rng = StdRng::seed_from_u64(5);
        let blocks = vec![
            generator.generate_block(RESTING, 200, start(), &mut rng).unwrap(),
            generator.generate_block(FALL, 10, start(), &mut rng).unwrap(),
            generator.generate_block(DATA_LOSS_LABEL, 10, start(), &mut rng).unwrap(),
        ];
        let before = label_counts(blocks.iter().flat_map(|b| b.rows.iter()));
        let mut source = ManualSource::new(blocks);
        let collected = collect_blocks(&mut source).unwrap();
        let dataset = assemble(collected, &mut rng);
        assert_eq!(dataset.label_counts(), before);
        assert_eq!(dataset.len(), 220);
    }
    #[test]
    fn shuffle_moves_rows_across_blocks() {
        let specs = vec![
            ScheduleSpec::new(RESTING, 500, 1),
            ScheduleSpec::new(SENSOR_FAILURE_LABEL, 500, 1),
        ];
        let schedule = Schedule::resolve(&specs, &ProfileTable::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let dataset = DatasetAssembler::new(&schedule)
            .build_dataset(start(), &mut rng)
            .unwrap();
        let first_half_failures = dataset.rows()[..500]
            .iter()
            .filter(|r| r.label == SENSOR_FAILURE_LABEL)
            .count();
        assert!(first_half_failures > 0 && first_half_failures < 500);
        assert!(dataset
            .rows()
            .iter()
            .filter(|r| r.label == SENSOR_FAILURE_LABEL)
            .all(|r| r.reading(Channel::HeartRate) == -1.0));
    }
    struct FailingSource {
        served: usize,
    }
    impl BlockSource for FailingSource {
        fn next_block(&mut self) -> Result<Option<TimeBlock>, SimError> {
            self.served += 1;
            if self.served > 1 {
                return Err(SimError::UnknownProfile("Unknown_X".into()));
            }
            let mut rng = StdRng::seed_from_u64(1);
            let table = ProfileTable::default();
            BlockGenerator::new(&table)
                .generate_block(RESTING, 5, start(), &mut rng)
                .map(Some)
        }
    }
    #[test]
    fn block_failure_aborts_collection() {
        let mut source = FailingSource { served: 0 };
        let err = collect_blocks(&mut source).unwrap_err();
        assert!(matches!(err, SimError::UnknownProfile(_)));
        assert_eq!(source.served, 2);
    }
}
