#![allow(dead_code)]

use keyingtime::config::EngineConfig;
use keyingtime::fingers::FingerMap;
use keyingtime::timing::KeyingTable;

/// Scenario data: `a` (left pinky) and `b` (left index), reachable from the
/// initial previous symbol `l`.
pub const SCENARIO_A: &str = "la 40\naa 100\nab 50\nba 50\nbb 100\n";

pub fn table_from(data: &str) -> KeyingTable {
    KeyingTable::from_reader(data.as_bytes(), FingerMap::standard(), &EngineConfig::default())
        .expect("in-memory keying data always loads")
}

/// Every ordered pair over `chars` (plus the initial `l`) costs `time`.
pub fn uniform_table(chars: &str, time: u32) -> KeyingTable {
    let mut data = String::new();
    let alphabet: Vec<char> = chars.chars().chain(std::iter::once('l')).collect();
    for a in &alphabet {
        for b in &alphabet {
            data.push_str(&format!("{}{} {}\n", a, b, time));
        }
    }
    table_from(&data)
}
