use crate::consts::DEFAULT_MIN_SETUP;
use crate::error::{KeyingError, KtResult};
use crate::fingers::FingerMap;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Floor for derived setup times that come out zero or negative.
    #[arg(long, default_value_t = DEFAULT_MIN_SETUP)]
    pub min_setup: u32,

    /// JSON fingering file replacing the standard QWERTY finger columns.
    #[arg(long)]
    pub fingering: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_setup: DEFAULT_MIN_SETUP,
            fingering: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> KtResult<()> {
        if self.min_setup == 0 {
            return Err(KeyingError::Config(
                "--min-setup must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn finger_map(&self) -> KtResult<FingerMap> {
        match &self.fingering {
            Some(path) => FingerMap::load_from_file(path),
            None => Ok(FingerMap::standard()),
        }
    }
}
