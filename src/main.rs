// src/main.rs
use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use smartwatch_sim::{engine, GenSettings};
// 入口函数：无需参数，跑完即退出
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Script started.");
    let settings = GenSettings::from_env().context("failed to load settings")?;
    let summary = engine::run(&settings, engine::clock_start())
        .with_context(|| format!("failed to generate {}", settings.output_path.display()))?;
    info!("--- SCRIPT COMPLETE ---");
    info!("Total samples generated: {}", summary.total_rows);
    for (label, count) in &summary.label_counts {
        info!("  {label}: {count}");
    }
    info!("Data saved to: {}", summary.output_path.display());
    Ok(())
}
