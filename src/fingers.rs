use crate::consts::{
    FALLBACK_FINGER, MAX_FINGERS, STANDARD_FINGERING, STANDARD_HOME_KEYS, SYMBOL_RANGE,
};
use crate::error::{KeyingError, KtResult};
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    LeftThumb,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

impl Finger {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Finger::iter().nth(i)
    }
}

/// Keys owned by one finger, as written in a fingering file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerGroup {
    pub keys: String,
    pub home: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingeringFile {
    #[serde(default = "default_fallback")]
    pub fallback: usize,
    pub groups: Vec<FingerGroup>,
}

fn default_fallback() -> usize {
    FALLBACK_FINGER
}

/// Immutable symbol -> finger assignment. Total over all 256 symbols.
#[derive(Debug, Clone)]
pub struct FingerMap {
    assignment: [Finger; SYMBOL_RANGE],
    keys: [Vec<Symbol>; MAX_FINGERS],
    homes: [Symbol; MAX_FINGERS],
}

impl Default for FingerMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl FingerMap {
    /// The QWERTY fingering the reference keying-time data was recorded with.
    pub fn standard() -> Self {
        let groups: Vec<FingerGroup> = STANDARD_FINGERING
            .iter()
            .zip(STANDARD_HOME_KEYS)
            .map(|(keys, home)| FingerGroup {
                keys: keys.to_string(),
                home: home as char,
            })
            .collect();

        // The reference table is known to be valid.
        match Self::from_groups(&groups, FALLBACK_FINGER) {
            Ok(map) => map,
            Err(e) => unreachable!("standard fingering rejected: {}", e),
        }
    }

    pub fn from_groups(groups: &[FingerGroup], fallback: usize) -> KtResult<Self> {
        if groups.len() != MAX_FINGERS {
            return Err(KeyingError::Validation(format!(
                "Fingering needs {} groups, got {}",
                MAX_FINGERS,
                groups.len()
            )));
        }
        let fallback_finger = Finger::from_index(fallback).ok_or_else(|| {
            KeyingError::Validation(format!("Fallback finger {} is out of range", fallback))
        })?;

        let mut assignment = [fallback_finger; SYMBOL_RANGE];
        let mut homes = [Symbol::LEFT_THUMB; MAX_FINGERS];

        for (finger, group) in Finger::iter().zip(groups) {
            let home = Symbol::raw(group.home).ok_or_else(|| {
                KeyingError::Validation(format!(
                    "Home key '{}' of {} is not ASCII",
                    group.home, finger
                ))
            })?;
            if !group.keys.contains(group.home) {
                return Err(KeyingError::Validation(format!(
                    "Home key '{}' is not one of {}'s keys \"{}\"",
                    group.home, finger, group.keys
                )));
            }
            homes[finger.index()] = home;

            for c in group.keys.chars() {
                let sym = Symbol::raw(c).ok_or_else(|| {
                    KeyingError::Validation(format!("Key '{}' of {} is not ASCII", c, finger))
                })?;
                // Later groups overwrite earlier ones.
                assignment[sym.index()] = finger;
            }
        }

        // Key lists follow the final assignment so no key is listed under two fingers.
        let mut keys: [Vec<Symbol>; MAX_FINGERS] = Default::default();
        for (finger, group) in Finger::iter().zip(groups) {
            for c in group.keys.chars() {
                let sym = Symbol::from_byte(c as u8);
                let owned = &mut keys[finger.index()];
                if assignment[sym.index()] == finger && !owned.contains(&sym) {
                    owned.push(sym);
                }
            }
        }

        Ok(Self {
            assignment,
            keys,
            homes,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KtResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: FingeringFile = serde_json::from_str(&content)?;
        Self::from_groups(&file.groups, file.fallback)
    }

    #[inline(always)]
    pub fn finger_of(&self, sym: Symbol) -> Finger {
        self.assignment[sym.index()]
    }

    pub fn keys(&self, finger: Finger) -> &[Symbol] {
        &self.keys[finger.index()]
    }

    pub fn home(&self, finger: Finger) -> Symbol {
        self.homes[finger.index()]
    }
}
