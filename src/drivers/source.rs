use std::collections::VecDeque;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use crate::drivers::block::render_block;
use crate::drivers::{Schedule, SimError};
use crate::types::TimeBlock;
/// Trait representing something that can yield time blocks on demand.
pub trait BlockSource {
    fn next_block(&mut self) -> Result<Option<TimeBlock>, SimError>;
}
/// Walks a schedule in order, advancing a running clock by each block's duration.
pub struct ScheduledSource<'a, R: Rng + ?Sized> {
    schedule: &'a Schedule,
    rng: &'a mut R,
    clock: NaiveDateTime,
    entry: usize,
    repeat: u32,
}
impl<'a, R: Rng + ?Sized> ScheduledSource<'a, R> {
    pub fn new(schedule: &'a Schedule, start: NaiveDateTime, rng: &'a mut R) -> Self {
        Self {
            schedule,
            rng,
            clock: start,
            entry: 0,
            repeat: 0,
        }
    }
    pub fn clock(&self) -> NaiveDateTime {
        self.clock
    }
}
impl<'a, R: Rng + ?Sized> BlockSource for ScheduledSource<'a, R> {
    fn next_block(&mut self) -> Result<Option<TimeBlock>, SimError> {
        let schedule = self.schedule;
        let entries = schedule.entries();
        while let Some(entry) = entries.get(self.entry) {
            if self.repeat >= entry.repeat_count {
                self.entry += 1;
                self.repeat = 0;
                continue;
            }
            let block = render_block(
                &entry.kind,
                &entry.label,
                entry.duration_seconds,
                self.clock,
                self.rng,
            )?;
            self.repeat += 1;
            self.clock += Duration::seconds(i64::from(entry.duration_seconds));
            return Ok(Some(block));
        }
        Ok(None)
    }
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<TimeBlock>,
}
impl ManualSource {
    pub fn new(blocks: impl IntoIterator<Item = TimeBlock>) -> Self {
        Self {
            queue: blocks.into_iter().collect(),
        }
    }
}
impl BlockSource for ManualSource {
    fn next_block(&mut self) -> Result<Option<TimeBlock>, SimError> {
        Ok(self.queue.pop_front())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::profile::{FALL, RESTING};
    use crate::drivers::schedule::ScheduleSpec;
    use crate::drivers::ProfileTable;
    use crate::types::DATA_LOSS_LABEL;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .unwrap()
    }
    #[test]
    fn clock_advances_across_repeats_and_entries() {
        let specs = vec![
            ScheduleSpec::new(RESTING, 30, 1),
            ScheduleSpec::new(FALL, 10, 3),
            ScheduleSpec::new(DATA_LOSS_LABEL, 5, 2),
        ];
        let schedule = Schedule::resolve(&specs, &ProfileTable::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut source = ScheduledSource::new(&schedule, start(), &mut rng);
        let mut starts = Vec::new();
        while let Some(block) = source.next_block().unwrap() {
            assert_eq!(block.rows[0].timestamp, block.start);
            starts.push((block.label.clone(), (block.start - start()).num_seconds()));
        }
        assert_eq!(
            starts,
            vec![
                (RESTING.to_owned(), 0),
                (FALL.to_owned(), 30),
                (FALL.to_owned(), 40),
                (FALL.to_owned(), 50),
                (DATA_LOSS_LABEL.to_owned(), 60),
                (DATA_LOSS_LABEL.to_owned(), 65),
            ]
        );
        assert_eq!(source.clock(), start() + Duration::seconds(70));
        assert!(source.next_block().unwrap().is_none());
    }
    #[test]
    fn zero_repeat_entries_are_skipped() {
        let specs = vec![ScheduleSpec::new(FALL, 10, 0), ScheduleSpec::new(RESTING, 4, 1)];
        let schedule = Schedule::resolve(&specs, &ProfileTable::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut source = ScheduledSource::new(&schedule, start(), &mut rng);
        let block = source.next_block().unwrap().unwrap();
        assert_eq!(block.label, RESTING);
        assert_eq!(block.start, start());
        assert!(source.next_block().unwrap().is_none());
    }
}
