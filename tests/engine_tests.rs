mod common;

use common::{table_from, uniform_table, SCENARIO_A};
use keyingtime::fingers::Finger;
use keyingtime::symbol::Symbol;
use keyingtime::timing::{Estimator, Stroke};
use rstest::rstest;

fn sym(c: char) -> Symbol {
    Symbol::from_byte(c as u8)
}

#[test]
fn test_different_fingers_add_press_times() {
    let table = table_from(SCENARIO_A);
    // press[l][a] + press[a][b]
    assert_eq!(table.estimate("ab"), 90);
}

#[test]
fn test_same_finger_pair_from_rest() {
    let table = table_from("lq 40\nqq 20\nqa 30\n");
    assert_eq!(table.setup(sym('q'), sym('a')), 10);

    let mut est = Estimator::new(&table);
    // 'q' waits for the pinky to leave its home key 'a': setup[a][q] is clamped to 1.
    assert_eq!(
        est.push('q'),
        Stroke::Pressed {
            finger: Finger::LeftPinky,
            waited: 1,
            press: 40
        }
    );
    assert_eq!(
        est.push('a'),
        Stroke::Pressed {
            finger: Finger::LeftPinky,
            waited: 0,
            press: 30
        }
    );
    assert_eq!(est.current_time(), 71);
    assert!(est.current_time() >= 40 + 30);
}

#[test]
fn test_finger_setup_binds_after_other_finger() {
    // a (pinky), s (ring), then q back on the pinky: the pinky needs
    // setup[a][q] = 200 - 50 after finishing 'a' at t=10.
    let table = table_from("la 10\nas 10\nsq 10\naa 50\naq 200\n");
    let mut est = Estimator::new(&table);
    est.push('a');
    est.push('s');
    assert_eq!(est.current_time(), 20);
    let stroke = est.push('q');
    assert_eq!(
        stroke,
        Stroke::Pressed {
            finger: Finger::LeftPinky,
            waited: 140,
            press: 10
        }
    );
    assert_eq!(est.current_time(), 170);
}

#[test]
fn test_unmeasured_transition_is_noop() {
    let table = table_from(SCENARIO_A);
    let mut est = Estimator::new(&table);
    est.push('a');
    let before = est.state().clone();

    assert_eq!(est.push('z'), Stroke::Dropped);
    assert_eq!(est.push('\n'), Stroke::Dropped);
    assert_eq!(est.state(), &before);
}

#[test]
fn test_non_ascii_is_dropped() {
    let table = table_from(SCENARIO_A);
    assert_eq!(table.estimate("aéb"), table.estimate("ab"));
}

#[test]
fn test_space_is_left_thumb() {
    let table = table_from("lL 30\nLa 20\nla 5\n");
    assert_eq!(table.estimate(" a"), 50);
    assert_eq!(table.estimate(" a"), table.estimate("La"));
}

#[test]
fn test_arguments_joined_by_space() {
    let data = format!("{}aL 15\nLb 25\nbL 15\nLa 25\n", SCENARIO_A);
    let table = table_from(&data);
    assert_eq!(table.estimate_args(&["a", "b"]), 80);
    assert_eq!(table.estimate_args(&["ab", "ba"]), table.estimate("ab ba"));
    assert_eq!(table.estimate_args::<&str>(&[]), 0);
}

#[test]
fn test_single_finger_cost_is_press_plus_waits() {
    let table = uniform_table("qaz", 10);
    let mut est = Estimator::new(&table);
    let mut expected = 0;
    for c in "qazqzaq".chars() {
        if let Stroke::Pressed { waited, press, .. } = est.push(c) {
            expected += waited + u64::from(press);
        }
    }
    assert_eq!(est.current_time(), expected);
    // Only the first stroke waits: the pinky leaves its home key 'a'.
    assert_eq!(est.current_time(), 7 * 10 + 1);
}

#[test]
fn test_reading_time_has_no_side_effect() {
    let table = table_from(SCENARIO_A);
    let mut est = Estimator::new(&table);
    est.push_str("ab");
    let first = est.current_time();
    assert_eq!(est.current_time(), first);
    assert_eq!(est.into_state().current_time(), first);
}

#[test]
fn test_independent_states_share_one_table() {
    let table = table_from(SCENARIO_A);
    let mut s1 = table.fresh_state();
    let mut s2 = table.fresh_state();

    table.feed(&mut s1, 'a');
    table.feed(&mut s2, 'a');
    table.feed(&mut s1, 'b');

    assert_eq!(s1.current_time(), 90);
    assert_eq!(s2.current_time(), 40);
    assert_eq!(s2.previous(), sym('a'));

    let shared = &table;
    let times: Vec<u64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || shared.estimate("abba")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(times.iter().all(|&t| t == times[0]));
}

#[test]
fn test_initial_state_rests_on_home_row() {
    let table = table_from(SCENARIO_A);
    let state = table.fresh_state();
    assert_eq!(state.current_time(), 0);
    assert_eq!(state.previous(), sym('l'));
    assert_eq!(state.finger_state(Finger::LeftPinky), (sym('a'), 0));
    assert_eq!(state.finger_state(Finger::RightThumb), (sym('R'), 0));
    assert_eq!(state.finger_state(Finger::RightPinky), (sym(';'), 0));
}

#[rstest]
#[case("", 0)]
#[case("a", 40)]
#[case("ab", 90)]
#[case("aa", 140)]
#[case("b", 0)]
#[case("abab", 190)]
fn test_scenario_sequences(#[case] text: &str, #[case] expected: u64) {
    let table = table_from(SCENARIO_A);
    assert_eq!(table.estimate(text), expected);
}
