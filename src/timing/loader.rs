use crate::error::KtResult;
use crate::symbol::Symbol;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One line of a keying-time file: time to press `second` right after `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressRecord {
    pub first: Symbol,
    pub second: Symbol,
    pub time: u32,
}

/// Reads records of the form `<c1><c2> <time>` until the first token that
/// does not fit. Records read before that point are kept.
pub fn parse_records<R: Read>(mut reader: R) -> KtResult<Vec<PressRecord>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    let mut cursor = Cursor::new(&buf);
    let mut records = Vec::new();

    loop {
        let Some(first) = cursor.symbol() else { break };
        let Some(second) = cursor.symbol() else { break };
        let Some(time) = cursor.number() else { break };
        records.push(PressRecord {
            first,
            second,
            time,
        });
    }

    if !cursor.at_end() {
        debug!(
            "Stopped reading keying times at byte {} after {} records",
            cursor.pos,
            records.len()
        );
    }

    Ok(records)
}

pub fn load_press_records<P: AsRef<Path>>(path: P) -> KtResult<Vec<PressRecord>> {
    let path = path.as_ref();
    debug!("Loading keying times from: {}", path.display());
    let file = File::open(path)?;
    parse_records(file)
}

/// Whitespace-skipping byte reader, one field at a time.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.bytes.len()
    }

    fn symbol(&mut self) -> Option<Symbol> {
        self.skip_whitespace();
        let b = *self.bytes.get(self.pos)?;
        if !b.is_ascii() {
            return None;
        }
        self.pos += 1;
        Some(Symbol::from_byte(b))
    }

    fn number(&mut self) -> Option<u32> {
        self.skip_whitespace();
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(&b) = self.bytes.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }
}
