// src/stats.rs
use crate::types::{Channel, SampleRow};

/// 单通道统计量，NaN（数据丢失）不参与计算
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelStats {
    pub count: usize,
    pub missing: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl ChannelStats {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a SampleRow>, channel: Channel) -> Self {
        Self::from_values(rows.into_iter().map(|row| row.reading(channel)))
    }

    /// Population statistics over the finite values; NaNs are only counted.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = ChannelStats::default();
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for v in values {
            if v.is_nan() {
                stats.missing += 1;
                continue;
            }
            stats.count += 1;
            sum += v;
            sum_sq += v * v;
        }
        if stats.count == 0 {
            return stats;
        }
        let n = stats.count as f64;
        stats.mean = sum / n;
        // 浮点误差可能让方差略小于 0
        let variance = (sum_sq / n - stats.mean * stats.mean).max(0.0);
        stats.std_dev = variance.sqrt();
        stats
    }
}
