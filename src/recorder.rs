use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::drivers::{Dataset, SimError};
use crate::types::{Channel, SampleRow};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const HEADER: [&str; 6] = [
    "timestamp",
    "heart_rate",
    "accel_x",
    "accel_y",
    "accel_z",
    "label",
];

// 字段顺序必须与 HEADER 一致
#[derive(Serialize)]
struct CsvRecord<'a> {
    timestamp: String,
    heart_rate: Option<f64>,
    accel_x: Option<f64>,
    accel_y: Option<f64>,
    accel_z: Option<f64>,
    label: &'a str,
}

impl<'a> From<&'a SampleRow> for CsvRecord<'a> {
    fn from(row: &'a SampleRow) -> Self {
        // NaN 写成空字段
        let reading = |channel: Channel| Some(row.reading(channel)).filter(|v| !v.is_nan());
        CsvRecord {
            timestamp: row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            heart_rate: reading(Channel::HeartRate),
            accel_x: reading(Channel::AccelX),
            accel_y: reading(Channel::AccelY),
            accel_z: reading(Channel::AccelZ),
            label: &row.label,
        }
    }
}

/// Writes a dataset to one CSV file. The file only appears under its final
/// name once every row has been written and flushed.
pub struct DataRecorder {
    path: PathBuf,
}

impl DataRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, dataset: &Dataset) -> Result<(), SimError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut tmp);
            writer.write_record(HEADER)?;
            for row in dataset.rows() {
                writer.serialize(CsvRecord::from(row))?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        // 失败时临时文件随 drop 删除
        tmp.persist(&self.path)?;

        info!("💾 Dataset saved: {}", self.path.display());
        Ok(())
    }
}
