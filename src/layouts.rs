use crate::error::KtResult;
use crate::remap::RemapLayout;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Colemak,
    ColemakDH,
    Canary,
    Dvorak,
    HandsDownNeu,
    Sturdy,
    Focal,
    Graphite,
    Gallium,
    Engram,
    Workman,
}

impl KnownLayout {
    /// The 30 main keys, row by row, over `qwertyuiop asdfghjkl; zxcvbnm,./`.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl;zxcvbnm,./",
            Self::Dvorak => "',.pyfgcrlaoeuidhtns;qjkxbmwvz",
            Self::Colemak => "qwfpgjluy;arstdhneiozxcvbkm,./",
            Self::ColemakDH => "qwfpbjluy;arstgmneiozxcdvkh,./",
            Self::Workman => "qdrwbjfup;ashtgyneoizxmcvkl,./",
            Self::Canary => "wlypkzfou;crstgmneiaqjvdkhx,./",
            Self::Sturdy => "vmlhkqjou;strygfaeibxcdwnzp,./",
            Self::HandsDownNeu => "xrybpjlcu;snhtgmoeaizwvdkqf,./",
            Self::Focal => "wlypkvzou;rsntghjaeiqxcbdmf,./",
            Self::Graphite => "bldwz'foujnrtsgyhaeiqxmcvkp.,/",
            Self::Gallium => "bldcvjyou,nrtsgphaeixqmwzkf';.",
            Self::Engram => "byou'ldwvpciea,htsnqjxkrmgzf.;",
        }
    }

    /// Widens the 30-key block to the 32-key grid; `[` and `'` stay put.
    pub fn grid(&self) -> String {
        let s = self.get_str();
        let (top, rest) = s.split_at(10);
        let (home, bottom) = rest.split_at(10);
        format!("{}[{}'{}", top, home, bottom)
    }

    pub fn to_remap(&self) -> KtResult<RemapLayout> {
        RemapLayout::from_normal(self.grid())
    }
}

pub fn all_layouts() -> Vec<KnownLayout> {
    KnownLayout::iter().collect()
}

/// Resolves `--layout`: a built-in layout name, else a JSON layout file.
pub fn resolve(name_or_path: &str) -> KtResult<RemapLayout> {
    match KnownLayout::from_str(&name_or_path.to_lowercase()) {
        Ok(known) => known.to_remap(),
        Err(_) => RemapLayout::load_from_file(name_or_path),
    }
}
