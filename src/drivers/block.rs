use chrono::{Duration, NaiveDateTime};
use log::info;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use crate::drivers::{ProfileTable, SimError};
use crate::types::{
    ActivityProfile, BlockKind, Channel, SampleRow, TimeBlock, SENSOR_FAILURE_SENTINEL,
};
/// Produces one labelled block of one-second samples.
pub struct BlockGenerator<'a> {
    profiles: &'a ProfileTable,
}
impl<'a> BlockGenerator<'a> {
    pub fn new(profiles: &'a ProfileTable) -> Self {
        Self { profiles }
    }
    /// Resolves `label` against the profile table, then generates the block.
    pub fn generate_block<R: Rng + ?Sized>(
        &self,
        label: &str,
        duration_seconds: u32,
        start: NaiveDateTime,
        rng: &mut R,
    ) -> Result<TimeBlock, SimError> {
        let kind = self.profiles.resolve(label)?;
        render_block(&kind, label, duration_seconds, start, rng)
    }
}
/// Generates a block whose fill rule is already known.
///
/// Standard profiles draw every channel of every row independently from that
/// channel's normal distribution; there is no temporal or cross-channel
/// correlation.
pub fn render_block<R: Rng + ?Sized>(
    kind: &BlockKind,
    label: &str,
    duration_seconds: u32,
    start: NaiveDateTime,
    rng: &mut R,
) -> Result<TimeBlock, SimError> {
    if duration_seconds == 0 {
        return Err(SimError::InvalidDuration {
            label: label.to_owned(),
            duration_seconds,
        });
    }
    info!("  Generating {duration_seconds}s of '{label}'...");
    let fill = match kind {
        BlockKind::SensorFailure => Fill::Constant(SENSOR_FAILURE_SENTINEL),
        BlockKind::DataLoss => Fill::Constant(f64::NAN),
        BlockKind::Standard(profile) => Fill::Normal(channel_distributions(label, profile)?),
    };
    let rows = (0..duration_seconds)
        .map(|offset| SampleRow {
            timestamp: start + Duration::seconds(i64::from(offset)),
            readings: fill.draw(rng),
            label: label.to_owned(),
        })
        .collect();
    Ok(TimeBlock {
        label: label.to_owned(),
        start,
        rows,
    })
}
enum Fill {
    Constant(f64),
    Normal([Normal<f64>; 4]),
}
impl Fill {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 4] {
        match self {
            Fill::Constant(value) => [*value; 4],
            Fill::Normal(dists) => std::array::from_fn(|i| dists[i].sample(rng)),
        }
    }
}
fn channel_distributions(
    label: &str,
    profile: &ActivityProfile,
) -> Result<[Normal<f64>; 4], SimError> {
    let build = |channel: Channel| {
        let params = profile.channel(channel);
        Normal::new(params.mean, params.std_dev).map_err(|err| SimError::InvalidProfile {
            label: label.to_owned(),
            channel: channel.name(),
            reason: err.to_string(),
        })
    };
    Ok([
        build(Channel::HeartRate)?,
        build(Channel::AccelX)?,
        build(Channel::AccelY)?,
        build(Channel::AccelZ)?,
    ])
}
