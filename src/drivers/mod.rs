// src/drivers/mod.rs
// 数据生成核心：画像表、排程、数据块生成、数据集组装
pub mod block;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod schedule;
pub mod source;
// 公开导出常用类型，方便外部调用
pub use block::{render_block, BlockGenerator};
pub use error::SimError;
pub use pipeline::{Dataset, DatasetAssembler};
pub use profile::ProfileTable;
pub use schedule::{Schedule, ScheduleEntry, ScheduleSpec};
pub use source::{BlockSource, ManualSource, ScheduledSource};
