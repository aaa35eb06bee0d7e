use hangar_core::footprint::PlanPoint;
use hangar_core::history::{History, DEFAULT_HISTORY_LIMIT};

#[test]
fn undo_redo_scenario_on_footprint_list() {
    let history: History<Vec<PlanPoint>> = History::new(Vec::new());
    let edited = history.set_current(vec![PlanPoint::new(0.0, 0.0)]);
    assert!(edited.can_undo());

    let undone = edited.undo();
    assert!(undone.current().is_empty());
    assert!(undone.can_redo());

    let redone = undone.redo();
    assert_eq!(&vec![PlanPoint::new(0.0, 0.0)], redone.current());
    assert_eq!(edited, redone);
    assert_eq!(vec![PlanPoint::new(0.0, 0.0)], redone.into_current());
}

#[test]
fn new_history_exposes_initial_value() {
    let history = History::new(7);
    assert_eq!(7, *history.current());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn setting_equal_value_is_a_no_op() {
    let history = History::new(1).set_current(2);
    assert_eq!(history, history.set_current(2));
    assert_eq!(1, history.undo_depth());
}

#[test]
fn set_current_clears_pending_redo() {
    let history = History::new(1).set_current(2).set_current(3).undo();
    assert!(history.can_redo());

    let branched = history.set_current(10);
    assert!(!branched.can_redo());
    assert_eq!(10, *branched.current());
    assert_eq!(2, *branched.undo().current());
}

#[test]
fn transitions_leave_the_receiver_untouched() {
    let history = History::new("a".to_string());
    let next = history.set_current("b".to_string());
    let _ = next.undo();
    assert_eq!("a", history.current().as_str());
    assert_eq!("b", next.current().as_str());
    assert!(!history.can_undo());
}

#[test]
fn replace_current_keeps_stacks() {
    let history = History::new(1).set_current(2).set_current(3).undo();
    let preview = history.replace_current(42);
    assert_eq!(42, *preview.current());
    assert_eq!(history.undo_depth(), preview.undo_depth());
    assert_eq!(history.redo_depth(), preview.redo_depth());
    assert_eq!(1, *preview.undo().current());
}

#[test]
fn undo_and_redo_on_empty_stacks_are_no_ops() {
    let history = History::new(5);
    assert_eq!(history, history.undo());
    assert_eq!(history, history.redo());

    let edited = history.set_current(6);
    assert_eq!(edited, edited.redo());
}

#[test]
fn keeps_only_the_most_recent_thirty_states() {
    let mut history = History::new(0);
    for v in 1..=DEFAULT_HISTORY_LIMIT as i32 + 1 {
        history = history.set_current(v);
    }
    assert_eq!(DEFAULT_HISTORY_LIMIT, history.undo_depth());

    while history.can_undo() {
        history = history.undo();
    }
    // State 0 was evicted by the 31st push.
    assert_eq!(1, *history.current());
    assert_eq!(DEFAULT_HISTORY_LIMIT, history.redo_depth());
}

#[test]
fn custom_limit_bounds_undo_depth() {
    let history = History::with_limit(0, 2).set_current(1).set_current(2).set_current(3);
    assert_eq!(2, history.undo_depth());
    assert_eq!(1, *history.undo().undo().current());
    assert_eq!(1, History::with_limit(0, 0).limit());
}

#[test]
fn history_round_trips_through_json() {
    let history = History::new(vec![1, 2]).set_current(vec![3]).undo();
    let json = serde_json::to_string(&history).expect("serialize");
    let back: History<Vec<i32>> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(history, back);
}

#[test]
fn deserialized_history_clamps_its_limit() {
    let json = r#"{"current":1,"prevs":[],"nexts":[],"limit":0}"#;
    let history: History<i32> = serde_json::from_str(json).expect("deserialize");
    assert_eq!(1, history.limit());

    let edited = history.set_current(2);
    assert!(edited.can_undo());
    assert_eq!(1, *edited.undo().current());

    let json = r#"{"current":5,"prevs":[4,3,2],"nexts":[],"limit":2}"#;
    let history: History<i32> = serde_json::from_str(json).expect("deserialize");
    assert_eq!(2, history.undo_depth());
    assert_eq!(3, *history.undo().undo().current());
}
