use crate::consts::{INITIAL_PREVIOUS, MAX_FINGERS};
use crate::fingers::{Finger, FingerMap};
use crate::symbol::Symbol;
use strum::IntoEnumIterator;

/// Per-run typing state. One instance per estimation; the tables it is fed
/// against are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    pub(crate) time: u64,
    pub(crate) previous: Symbol,
    pub(crate) finger_symbols: [Symbol; MAX_FINGERS],
    pub(crate) finger_times: [u64; MAX_FINGERS],
}

impl Accumulator {
    /// Hands resting on the home row, nothing typed yet.
    pub fn at_rest(fingers: &FingerMap) -> Self {
        let mut finger_symbols = [Symbol::LEFT_THUMB; MAX_FINGERS];
        for f in Finger::iter() {
            finger_symbols[f.index()] = fingers.home(f);
        }
        Self {
            time: 0,
            previous: Symbol::from_byte(INITIAL_PREVIOUS),
            finger_symbols,
            finger_times: [0; MAX_FINGERS],
        }
    }

    pub fn current_time(&self) -> u64 {
        self.time
    }

    pub fn previous(&self) -> Symbol {
        self.previous
    }

    /// Last symbol typed by `finger` and the time that keystroke finished.
    pub fn finger_state(&self, finger: Finger) -> (Symbol, u64) {
        let i = finger.index();
        (self.finger_symbols[i], self.finger_times[i])
    }
}

/// Outcome of feeding one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// No measured transition from the previous symbol, or not a symbol at all.
    Dropped,
    Pressed {
        finger: Finger,
        /// Time the sequence stalled waiting for `finger` to get into position.
        waited: u64,
        press: u32,
    },
}

impl Stroke {
    pub fn is_pressed(&self) -> bool {
        matches!(self, Stroke::Pressed { .. })
    }
}
