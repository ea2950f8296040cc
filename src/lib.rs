//! Synthetic smartwatch sensor dataset generator.
//!
//! Produces a labelled table of one-second samples (heart rate plus three
//! accelerometer axes) for a fixed set of activity and anomaly classes:
//!
//! - standard activities draw each channel from a per-label normal distribution
//!   ([`drivers::ProfileTable`]);
//! - `Anomaly_SensorFailure` rows hold the `-1` sentinel on every channel;
//! - `Anomaly_DataLoss` rows hold NaN on every channel (empty CSV fields).
//!
//! Blocks are generated in schedule order against a running clock, concatenated,
//! shuffled as a whole and written to CSV by [`recorder::DataRecorder`].
//!
//! # Example
//!
//! ```ignore
//! use smartwatch_sim::config::GenSettings;
//! use smartwatch_sim::engine;
//!
//! let settings = GenSettings { seed: Some(7), ..GenSettings::default() };
//! let summary = engine::run(&settings, engine::clock_start())?;
//! assert_eq!(summary.total_rows, 9300);
//! ```

pub mod config;
pub mod drivers;
pub mod engine;
pub mod recorder;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use config::GenSettings;
pub use drivers::{Dataset, DatasetAssembler, ProfileTable, Schedule, SimError};
pub use types::{BlockKind, Channel, SampleRow, TimeBlock};
