/// Number of fingers modelled (8 finger columns + 2 thumbs).
pub const MAX_FINGERS: usize = 10;

/// Finger index receiving every symbol no group claims.
pub const FALLBACK_FINGER: usize = 4;

/// Size of the symbol alphabet. Every byte value is addressable.
pub const SYMBOL_RANGE: usize = 256;

/// Space bar pressed by the left thumb.
pub const LEFT_THUMB_SPACE: u8 = b'L';

/// Space bar pressed by the right thumb.
pub const RIGHT_THUMB_SPACE: u8 = b'R';

/// Floor applied to derived setup times that come out non-positive.
pub const DEFAULT_MIN_SETUP: u32 = 1;

/// Reference QWERTY fingering, one key string per finger, left pinky first.
pub const STANDARD_FINGERING: [&str; MAX_FINGERS] = [
    "qaz", "wsx", "edc", "rfvtgb", "L", "R", "yhnujm", "ik,", "ol.", "p;/['",
];

/// Hands-at-rest position of each finger.
pub const STANDARD_HOME_KEYS: [u8; MAX_FINGERS] =
    [b'a', b's', b'd', b'f', b'L', b'R', b'j', b'k', b'l', b';'];

/// Global previous symbol before anything has been typed.
pub const INITIAL_PREVIOUS: u8 = b'l';
