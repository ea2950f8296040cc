use serde::{Deserialize, Serialize};
use crate::drivers::profile::{FALL, HEALTH_EVENT, RESTING, RUNNING, WALKING};
use crate::drivers::{ProfileTable, SimError};
use crate::types::{BlockKind, DATA_LOSS_LABEL, SENSOR_FAILURE_LABEL};
/// Unresolved schedule entry as it appears in settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    pub label: String,
    pub duration_seconds: u32,
    #[serde(default = "one")]
    pub repeat_count: u32,
}
fn one() -> u32 {
    1
}
impl ScheduleSpec {
    pub fn new(label: &str, duration_seconds: u32, repeat_count: u32) -> Self {
        Self {
            label: label.to_owned(),
            duration_seconds,
            repeat_count,
        }
    }
}
/// Schedule entry with its fill rule already decided.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleEntry {
    pub label: String,
    pub kind: BlockKind,
    pub duration_seconds: u32,
    pub repeat_count: u32,
}
impl ScheduleEntry {
    pub fn total_rows(&self) -> usize {
        self.duration_seconds as usize * self.repeat_count as usize
    }
}
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}
impl Schedule {
    pub fn resolve(specs: &[ScheduleSpec], profiles: &ProfileTable) -> Result<Self, SimError> {
        let entries = specs
            .iter()
            .map(|spec| {
                if spec.duration_seconds == 0 {
                    return Err(SimError::InvalidDuration {
                        label: spec.label.clone(),
                        duration_seconds: spec.duration_seconds,
                    });
                }
                Ok(ScheduleEntry {
                    label: spec.label.clone(),
                    kind: profiles.resolve(&spec.label)?,
                    duration_seconds: spec.duration_seconds,
                    repeat_count: spec.repeat_count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }
    /// Row count of the dataset this schedule produces.
    pub fn total_rows(&self) -> usize {
        self.entries.iter().map(ScheduleEntry::total_rows).sum()
    }
}
/// Builtin composition: two hours of normal activity, then short anomaly bursts.
pub fn default_schedule() -> Vec<ScheduleSpec> {
    vec![
        ScheduleSpec::new(RESTING, 3600, 1),
        ScheduleSpec::new(WALKING, 3600, 1),
        ScheduleSpec::new(RUNNING, 1800, 1),
        ScheduleSpec::new(FALL, 10, 10),
        ScheduleSpec::new(HEALTH_EVENT, 20, 5),
        ScheduleSpec::new(SENSOR_FAILURE_LABEL, 10, 5),
        ScheduleSpec::new(DATA_LOSS_LABEL, 10, 5),
    ]
}
