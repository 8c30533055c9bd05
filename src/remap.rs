use crate::error::{KeyingError, KtResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The 32 QWERTY positions a layout row string is laid over.
pub const QWERTY_GRID: &str = "qwertyuiop[asdfghjkl;'zxcvbnm,./";
pub const GRID_SIZE: usize = 32;

const VOICED_MARK: char = '゛';
const SEMI_VOICED_MARK: char = '゜';

fn default_cont() -> bool {
    true
}

/// A layout described by what each QWERTY position produces, optionally with
/// a shifted row (prefix: space) or thumb-shift rows (prefix: `L` / `R`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemapLayout {
    pub normal: String,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
    /// When set, a prefix key is only typed when it differs from the last one.
    #[serde(default = "default_cont")]
    pub cont: bool,
    #[serde(default)]
    pub daku: String,
    #[serde(default)]
    pub handaku: String,
    #[serde(default)]
    pub kogaki: String,
}

impl RemapLayout {
    pub fn from_normal(normal: impl Into<String>) -> KtResult<Self> {
        let layout = Self {
            normal: normal.into(),
            shift: None,
            left: None,
            right: None,
            cont: true,
            daku: String::new(),
            handaku: String::new(),
            kogaki: String::new(),
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KtResult<Self> {
        let content = fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> KtResult<()> {
        let rows = [
            ("normal", Some(&self.normal)),
            ("shift", self.shift.as_ref()),
            ("left", self.left.as_ref()),
            ("right", self.right.as_ref()),
        ];
        for (name, row) in rows {
            if let Some(row) = row {
                let n = row.chars().count();
                if n != GRID_SIZE {
                    return Err(KeyingError::Validation(format!(
                        "Layout row '{}' has {} keys, expected {}",
                        name, n, GRID_SIZE
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rewrites `text` as the QWERTY keystrokes that type it on this layout.
    /// Characters the layout does not produce pass through unchanged.
    pub fn convert(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut prev_prefix: Option<char> = None;

        for u in text.chars() {
            let (base, mark) = self.decompose(u);
            self.emit(base, &mut out, &mut prev_prefix);
            if let Some(m) = mark {
                self.emit(m, &mut out, &mut prev_prefix);
            }
        }
        out
    }

    fn decompose(&self, u: char) -> (char, Option<char>) {
        let shifted = |delta: i32| {
            char::from_u32((u as i32 + delta) as u32).unwrap_or(u)
        };
        if self.daku.contains(u) {
            (shifted(-1), Some(VOICED_MARK))
        } else if self.handaku.contains(u) {
            (shifted(-2), Some(SEMI_VOICED_MARK))
        } else if self.kogaki.contains(u) {
            (shifted(1), Some(VOICED_MARK))
        } else {
            (u, None)
        }
    }

    fn lookup(&self, u: char) -> Option<(Option<char>, char)> {
        if let Some(k) = grid_key(&self.normal, u) {
            return Some((None, k));
        }
        if let Some(shift) = &self.shift {
            return grid_key(shift, u).map(|k| (Some(' '), k));
        }
        if let Some(k) = self.left.as_deref().and_then(|row| grid_key(row, u)) {
            return Some((Some('L'), k));
        }
        self.right
            .as_deref()
            .and_then(|row| grid_key(row, u))
            .map(|k| (Some('R'), k))
    }

    fn emit(&self, u: char, out: &mut String, prev_prefix: &mut Option<char>) {
        match self.lookup(u) {
            Some((prefix, key)) => {
                if let Some(p) = prefix {
                    if *prev_prefix != prefix || !self.cont {
                        out.push(p);
                    }
                }
                out.push(key);
                *prev_prefix = prefix;
            }
            None => out.push(u),
        }
    }
}

fn grid_key(row: &str, u: char) -> Option<char> {
    let pos = row.chars().position(|c| c == u)?;
    QWERTY_GRID.chars().nth(pos)
}
