//! Per-activity channel statistics and label resolution.
//!
//! Two labels never reach the table: `Anomaly_SensorFailure` rows carry the
//! stuck-sensor sentinel and `Anomaly_DataLoss` rows carry NaN on every channel.
//! Every other label must have an entry, otherwise resolution fails with
//! [`SimError::UnknownProfile`].
use std::collections::BTreeMap;
use crate::drivers::SimError;
use crate::types::{
    ActivityProfile, BlockKind, Channel, ChannelProfile, DATA_LOSS_LABEL, SENSOR_FAILURE_LABEL,
};
pub const RESTING: &str = "Normal_Resting";
pub const WALKING: &str = "Normal_Walking";
pub const RUNNING: &str = "Normal_Running";
pub const FALL: &str = "Anomaly_Fall";
pub const HEALTH_EVENT: &str = "Anomaly_HealthEvent";
/// Immutable label -> profile lookup.
#[derive(Clone, Debug)]
pub struct ProfileTable {
    profiles: BTreeMap<String, ActivityProfile>,
}
impl ProfileTable {
    pub fn new(profiles: BTreeMap<String, ActivityProfile>) -> Result<Self, SimError> {
        for (label, profile) in &profiles {
            for channel in Channel::ALL {
                validate_channel(label, channel, profile.channel(channel))?;
            }
        }
        Ok(Self { profiles })
    }
    pub fn get(&self, label: &str) -> Result<&ActivityProfile, SimError> {
        self.profiles
            .get(label)
            .ok_or_else(|| SimError::UnknownProfile(label.to_owned()))
    }
    /// Special labels win over a table entry of the same name.
    pub fn resolve(&self, label: &str) -> Result<BlockKind, SimError> {
        match label {
            SENSOR_FAILURE_LABEL => Ok(BlockKind::SensorFailure),
            DATA_LOSS_LABEL => Ok(BlockKind::DataLoss),
            _ => self.get(label).map(|profile| BlockKind::Standard(*profile)),
        }
    }
    pub fn len(&self) -> usize {
        self.profiles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
        }
    }
}
fn validate_channel(
    label: &str,
    channel: Channel,
    params: ChannelProfile,
) -> Result<(), SimError> {
    let reason = if !params.mean.is_finite() {
        "mean must be finite"
    } else if !params.std_dev.is_finite() || params.std_dev < 0.0 {
        "standard deviation must be finite and non-negative"
    } else {
        return Ok(());
    };
    Err(SimError::InvalidProfile {
        label: label.to_owned(),
        channel: channel.name(),
        reason: reason.to_owned(),
    })
}
fn profile(hr: (f64, f64), x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> ActivityProfile {
    ActivityProfile {
        heart_rate: ChannelProfile::new(hr.0, hr.1),
        accel_x: ChannelProfile::new(x.0, x.1),
        accel_y: ChannelProfile::new(y.0, y.1),
        accel_z: ChannelProfile::new(z.0, z.1),
    }
}
/// Builtin activity fingerprints, `(mean, std_dev)` per channel.
pub fn default_profiles() -> BTreeMap<String, ActivityProfile> {
    let mut profiles = BTreeMap::new();
    // z 轴静止时承受 1g 重力
    profiles.insert(
        RESTING.to_owned(),
        profile((75.0, 5.0), (0.0, 0.1), (0.0, 0.1), (1.0, 0.1)),
    );
    profiles.insert(
        WALKING.to_owned(),
        profile((110.0, 10.0), (0.0, 0.5), (1.0, 0.5), (0.0, 0.5)),
    );
    profiles.insert(
        RUNNING.to_owned(),
        profile((150.0, 15.0), (0.0, 1.5), (2.0, 1.5), (0.0, 1.5)),
    );
    // 跌倒冲击：三轴读数极高且不稳定
    profiles.insert(
        FALL.to_owned(),
        profile((120.0, 10.0), (8.0, 3.0), (8.0, 3.0), (8.0, 3.0)),
    );
    // 心动过速但几乎没有运动
    profiles.insert(
        HEALTH_EVENT.to_owned(),
        profile((195.0, 5.0), (0.0, 0.1), (0.0, 0.1), (1.0, 0.1)),
    );
    profiles
}
