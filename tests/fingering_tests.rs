use keyingtime::config::EngineConfig;
use keyingtime::error::KeyingError;
use keyingtime::fingers::{Finger, FingerGroup, FingerMap};
use keyingtime::symbol::Symbol;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

fn sym(c: char) -> Symbol {
    Symbol::from_byte(c as u8)
}

const DVORAK_FINGERING: &str = r#"{
    "groups": [
        { "keys": "'a;", "home": "a" },
        { "keys": ",oq", "home": "o" },
        { "keys": ".ej", "home": "e" },
        { "keys": "pukyix", "home": "u" },
        { "keys": "L", "home": "L" },
        { "keys": "R", "home": "R" },
        { "keys": "fdbghm", "home": "h" },
        { "keys": "ctw", "home": "t" },
        { "keys": "rnv", "home": "n" },
        { "keys": "lsz/-", "home": "s" }
    ]
}"#;

#[test]
fn test_load_custom_fingering() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", DVORAK_FINGERING).unwrap();

    let config = EngineConfig {
        fingering: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let map = config.finger_map().unwrap();

    assert_eq!(map.finger_of(sym('o')), Finger::LeftRing);
    assert_eq!(map.finger_of(sym('s')), Finger::RightPinky);
    assert_eq!(map.home(Finger::RightIndex), sym('h'));
    // Unlisted symbols fall back to the default finger.
    assert_eq!(map.finger_of(sym('7')), Finger::LeftThumb);
}

#[test]
fn test_home_must_belong_to_group() {
    let mut groups: Vec<FingerGroup> = (0..10)
        .map(|i| FingerGroup {
            keys: ((b'a' + i) as char).to_string(),
            home: (b'a' + i) as char,
        })
        .collect();
    groups[3].home = 'z';
    let result = FingerMap::from_groups(&groups, 4);
    assert!(matches!(result, Err(KeyingError::Validation(_))));
}

#[test]
fn test_fallback_out_of_range() {
    let groups: Vec<FingerGroup> = (0..10)
        .map(|i| FingerGroup {
            keys: ((b'a' + i) as char).to_string(),
            home: (b'a' + i) as char,
        })
        .collect();
    assert!(FingerMap::from_groups(&groups, 10).is_err());
    assert!(FingerMap::from_groups(&groups, 9).is_ok());
}

#[test]
fn test_duplicate_key_goes_to_later_finger() {
    let mut groups: Vec<FingerGroup> = (0..10)
        .map(|i| FingerGroup {
            keys: ((b'a' + i) as char).to_string(),
            home: (b'a' + i) as char,
        })
        .collect();
    groups[9].keys.push('a');
    let map = FingerMap::from_groups(&groups, 4).unwrap();
    assert_eq!(map.finger_of(sym('a')), Finger::RightPinky);
    assert!(!map.keys(Finger::LeftPinky).contains(&sym('a')));
}

#[test]
fn test_finger_names() {
    assert_eq!(Finger::LeftIndex.to_string(), "left_index");
    assert_eq!(Finger::from_str("right_thumb").unwrap(), Finger::RightThumb);
    assert_eq!(Finger::from_index(4), Some(Finger::LeftThumb));
    assert_eq!(Finger::from_index(10), None);
}

#[test]
fn test_bad_fingering_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let result = FingerMap::load_from_file(file.path());
    assert!(matches!(result, Err(KeyingError::Json(_))));
}
