// src/types.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed reading written to every channel of a stuck sensor.
pub const SENSOR_FAILURE_SENTINEL: f64 = -1.0;

pub const SENSOR_FAILURE_LABEL: &str = "Anomaly_SensorFailure";
pub const DATA_LOSS_LABEL: &str = "Anomaly_DataLoss";

// 传感器通道
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Channel {
    HeartRate,
    AccelX,
    AccelY,
    AccelZ,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::HeartRate,
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Channel::HeartRate => "heart_rate",
            Channel::AccelX => "accel_x",
            Channel::AccelY => "accel_y",
            Channel::AccelZ => "accel_z",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Normal distribution parameters of one channel.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub mean: f64,
    pub std_dev: f64,
}

impl ChannelProfile {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

// 每种活动的统计“指纹”
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub heart_rate: ChannelProfile,
    pub accel_x: ChannelProfile,
    pub accel_y: ChannelProfile,
    pub accel_z: ChannelProfile,
}

impl ActivityProfile {
    pub fn channel(&self, channel: Channel) -> ChannelProfile {
        match channel {
            Channel::HeartRate => self.heart_rate,
            Channel::AccelX => self.accel_x,
            Channel::AccelY => self.accel_y,
            Channel::AccelZ => self.accel_z,
        }
    }
}

/// How the rows of a block are filled, decided once per label.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BlockKind {
    Standard(ActivityProfile),
    SensorFailure,
    DataLoss,
}

/// One emitted record. A NaN reading marks missing data.
#[derive(Clone, Debug)]
pub struct SampleRow {
    pub timestamp: NaiveDateTime,
    pub readings: [f64; 4],
    pub label: String,
}

impl SampleRow {
    pub fn reading(&self, channel: Channel) -> f64 {
        self.readings[channel.index()]
    }
}

/// Contiguous run of one-second rows sharing a label.
#[derive(Clone, Debug)]
pub struct TimeBlock {
    pub label: String,
    pub start: NaiveDateTime,
    pub rows: Vec<SampleRow>,
}

impl TimeBlock {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
