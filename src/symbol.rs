use crate::consts::{LEFT_THUMB_SPACE, RIGHT_THUMB_SPACE, SYMBOL_RANGE};
use std::fmt;

/// A single key symbol. Bounded to one byte so it can index the pair tables
/// directly without sign or range surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    pub const LEFT_THUMB: Symbol = Symbol(LEFT_THUMB_SPACE);
    pub const RIGHT_THUMB: Symbol = Symbol(RIGHT_THUMB_SPACE);

    pub const fn from_byte(b: u8) -> Self {
        Symbol(b)
    }

    /// Maps an input character to the symbol the engine sees.
    /// A literal space becomes the left-thumb space. Non-ASCII input has no symbol.
    pub fn canonical(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::LEFT_THUMB),
            c if c.is_ascii() => Some(Symbol(c as u8)),
            _ => None,
        }
    }

    /// Like [`Symbol::canonical`] but keeps a space as a space.
    pub fn raw(c: char) -> Option<Self> {
        c.is_ascii().then_some(Symbol(c as u8))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Dense (previous, current) -> duration table. Unset entries read as zero.
#[derive(Clone, PartialEq, Eq)]
pub struct PairTable {
    // Access: cells[first * SYMBOL_RANGE + second]
    cells: Vec<u32>,
}

impl Default for PairTable {
    fn default() -> Self {
        Self {
            cells: vec![0; SYMBOL_RANGE * SYMBOL_RANGE],
        }
    }
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    fn idx(first: Symbol, second: Symbol) -> usize {
        first.index() * SYMBOL_RANGE + second.index()
    }

    #[inline(always)]
    pub fn get(&self, first: Symbol, second: Symbol) -> u32 {
        self.cells[Self::idx(first, second)]
    }

    pub fn set(&mut self, first: Symbol, second: Symbol, value: u32) {
        self.cells[Self::idx(first, second)] = value;
    }

    /// Number of non-zero entries.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0).count()
    }
}

impl fmt::Debug for PairTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairTable")
            .field("populated", &self.populated())
            .finish()
    }
}
