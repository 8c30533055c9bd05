use super::accumulator::{Accumulator, Stroke};
use super::KeyingTable;
use crate::symbol::Symbol;
use tracing::trace;

impl KeyingTable {
    /// Types one character. Cumulative time never decreases.
    pub fn feed(&self, state: &mut Accumulator, c: char) -> Stroke {
        let Some(sym) = Symbol::canonical(c) else {
            trace!("dropping non-ASCII {:?}", c);
            return Stroke::Dropped;
        };

        let press = self.press(state.previous, sym);
        if press == 0 {
            trace!("no keying time for {}{}, dropping", state.previous, sym);
            return Stroke::Dropped;
        }

        let finger = self.fingers.finger_of(sym);
        let f = finger.index();

        // Another finger typed since this one last did: it had time to move.
        let mut waited = 0;
        let last = state.finger_symbols[f];
        if last != state.previous {
            let ready = state.finger_times[f] + u64::from(self.setup(last, sym));
            if state.time < ready {
                waited = ready - state.time;
                state.time = ready;
            }
        }

        state.time += u64::from(press);
        state.finger_times[f] = state.time;
        state.finger_symbols[f] = sym;
        state.previous = sym;

        Stroke::Pressed {
            finger,
            waited,
            press,
        }
    }

    pub fn feed_str(&self, state: &mut Accumulator, text: &str) {
        for c in text.chars() {
            self.feed(state, c);
        }
    }

    /// Time to type `text` starting from hands at rest.
    pub fn estimate(&self, text: &str) -> u64 {
        let mut state = self.fresh_state();
        self.feed_str(&mut state, text);
        state.current_time()
    }

    /// Like [`KeyingTable::estimate`] for separate words, typed with a space between each.
    pub fn estimate_args<S: AsRef<str>>(&self, args: &[S]) -> u64 {
        let mut est = Estimator::new(self);
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                est.push(' ');
            }
            est.push_str(arg.as_ref());
        }
        est.current_time()
    }
}

/// A table paired with its own running state.
pub struct Estimator<'t> {
    table: &'t KeyingTable,
    state: Accumulator,
}

impl<'t> Estimator<'t> {
    pub fn new(table: &'t KeyingTable) -> Self {
        Self {
            table,
            state: table.fresh_state(),
        }
    }

    pub fn push(&mut self, c: char) -> Stroke {
        self.table.feed(&mut self.state, c)
    }

    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.table.feed_str(&mut self.state, text);
        self
    }

    pub fn current_time(&self) -> u64 {
        self.state.current_time()
    }

    pub fn state(&self) -> &Accumulator {
        &self.state
    }

    pub fn into_state(self) -> Accumulator {
        self.state
    }
}
