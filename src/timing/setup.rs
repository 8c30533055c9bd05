use crate::fingers::{Finger, FingerMap};
use crate::symbol::{PairTable, Symbol};
use strum::IntoEnumIterator;
use tracing::warn;

/// A same-finger pair whose measured times gave no positive setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedPair {
    pub from: Symbol,
    pub to: Symbol,
    /// `press[from][to] - press[from][from]` before clamping.
    pub raw: i64,
}

#[derive(Debug, Clone)]
pub struct SetupReport {
    pub table: PairTable,
    pub clamped: Vec<ClampedPair>,
}

/// Time for one finger to move between two of its own keys, beyond the
/// baseline press: `setup[c1][c2] = press[c1][c2] - press[c1][c1]`.
/// Only same-finger pairs get an entry and every entry is at least `min_setup`.
pub fn derive_setup_table(press: &PairTable, fingers: &FingerMap, min_setup: u32) -> SetupReport {
    let mut table = PairTable::new();
    let mut clamped = Vec::new();

    for finger in Finger::iter() {
        let keys = fingers.keys(finger);
        for &c1 in keys {
            let home = i64::from(press.get(c1, c1));
            for &c2 in keys {
                if c1 == c2 {
                    continue;
                }
                let raw = i64::from(press.get(c1, c2)) - home;
                let value = if raw <= 0 {
                    warn!(
                        "The time for {}{} is not slower than {}{}, which appears to be wrong",
                        c1, c2, c1, c1
                    );
                    clamped.push(ClampedPair {
                        from: c1,
                        to: c2,
                        raw,
                    });
                    min_setup
                } else {
                    // raw <= u32::MAX since press[c1][c1] >= 0
                    raw as u32
                };
                table.set(c1, c2, value);
            }
        }
    }

    SetupReport { table, clamped }
}
