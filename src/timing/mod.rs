pub mod accumulator;
pub mod engine;
pub mod loader;
pub mod setup;

pub use self::accumulator::{Accumulator, Stroke};
pub use self::engine::Estimator;
pub use self::loader::PressRecord;
pub use self::setup::ClampedPair;

use crate::config::EngineConfig;
use crate::error::KtResult;
use crate::fingers::FingerMap;
use crate::symbol::{PairTable, Symbol};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Measured press times, the setup times derived from them and the fingering
/// both are read through. Read-only once built; share it by reference.
#[derive(Debug, Clone)]
pub struct KeyingTable {
    pub(crate) fingers: FingerMap,
    press: PairTable,
    setup: PairTable,
    clamped: Vec<ClampedPair>,
}

impl KeyingTable {
    /// Loads a keying-time file. Fails only if the file cannot be read.
    pub fn load<P: AsRef<Path>>(
        path: P,
        fingers: FingerMap,
        config: &EngineConfig,
    ) -> KtResult<Self> {
        config.validate()?;
        let records = loader::load_press_records(&path)?;
        info!(
            "Loaded {} keying times from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(Self::from_records(&records, fingers, config.min_setup))
    }

    pub fn from_reader<R: Read>(
        reader: R,
        fingers: FingerMap,
        config: &EngineConfig,
    ) -> KtResult<Self> {
        config.validate()?;
        let records = loader::parse_records(reader)?;
        Ok(Self::from_records(&records, fingers, config.min_setup))
    }

    pub fn from_records(records: &[PressRecord], fingers: FingerMap, min_setup: u32) -> Self {
        let mut press = PairTable::new();
        for r in records {
            press.set(r.first, r.second, r.time);
        }

        let report = setup::derive_setup_table(&press, &fingers, min_setup);
        debug!(
            "Keying table: {} press entries, {} setup entries, {} clamped",
            press.populated(),
            report.table.populated(),
            report.clamped.len()
        );

        Self {
            fingers,
            press,
            setup: report.table,
            clamped: report.clamped,
        }
    }

    /// Time to press `current` right after `previous`; zero when never measured.
    #[inline(always)]
    pub fn press(&self, previous: Symbol, current: Symbol) -> u32 {
        self.press.get(previous, current)
    }

    /// Time for one finger to move from `from` to `to`; zero across fingers.
    #[inline(always)]
    pub fn setup(&self, from: Symbol, to: Symbol) -> u32 {
        self.setup.get(from, to)
    }

    pub fn fingers(&self) -> &FingerMap {
        &self.fingers
    }

    /// Same-finger pairs whose setup time had to be clamped.
    pub fn clamped(&self) -> &[ClampedPair] {
        &self.clamped
    }

    pub fn fresh_state(&self) -> Accumulator {
        Accumulator::at_rest(&self.fingers)
    }
}
