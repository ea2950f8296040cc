// src/config.rs
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::drivers::profile::default_profiles;
use crate::drivers::schedule::default_schedule;
use crate::drivers::{ProfileTable, Schedule, ScheduleSpec, SimError};
use crate::types::ActivityProfile;

pub const DEFAULT_OUTPUT_PATH: &str = "data/simulated_smartwatch_data.csv";
pub const CONFIG_ENV: &str = "SMARTWATCH_SIM_CONFIG";
pub const SEED_ENV: &str = "SMARTWATCH_SIM_SEED";

/// Run settings. Every field has a default, so `{}` is a valid settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenSettings {
    pub output_path: PathBuf,

    /// `None` seeds from OS entropy, so every run differs.
    pub seed: Option<u64>,

    pub profiles: BTreeMap<String, ActivityProfile>,

    pub schedule: Vec<ScheduleSpec>,
}

impl Default for GenSettings {
    fn default() -> GenSettings {
        GenSettings {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            profiles: default_profiles(),
            schedule: default_schedule(),
        }
    }
}

impl GenSettings {
    pub fn from_json(text: &str) -> Result<GenSettings, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<GenSettings, SimError> {
        GenSettings::from_json(&fs::read_to_string(path)?)
    }

    /// Settings file from the first CLI argument or `SMARTWATCH_SIM_CONFIG`,
    /// builtin defaults otherwise; `SMARTWATCH_SIM_SEED` overrides the seed.
    pub fn from_env() -> Result<GenSettings, SimError> {
        let path = env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut settings = match path {
            Some(path) => GenSettings::from_file(&path)?,
            None => GenSettings::default(),
        };

        if let Ok(seed) = env::var(SEED_ENV) {
            settings.seed = Some(parse_seed(&seed)?);
        }

        Ok(settings)
    }

    pub fn profile_table(&self) -> Result<ProfileTable, SimError> {
        ProfileTable::new(self.profiles.clone())
    }

    pub fn resolve_schedule(&self, profiles: &ProfileTable) -> Result<Schedule, SimError> {
        Schedule::resolve(&self.schedule, profiles)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_seed(value: &str) -> Result<u64, SimError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| SimError::InvalidSeed {
            var: SEED_ENV,
            value: value.to_owned(),
            source,
        })
}
