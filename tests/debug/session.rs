//! Integration tests for traced sessions
//!
//! Runs the end-to-end scenarios through a session and checks both results
//! and the trace they leave behind.

use xtofu_algorithms::SortAlgorithm;
use xtofu_debug::{EventCategory, Session, SessionConfig, TraceEvent};
use xtofu_foundation::{Array, ErrorCode, Kind, Value};

fn ints(items: &[i32]) -> Value {
    Value::from(Array::of(items.iter().copied()))
}

fn traced() -> Session {
    Session::new(SessionConfig::traced())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn sort_search_accumulate_pipeline() {
    let mut session = traced();
    let mut v = ints(&[5, 3, 8, 1, 7]);

    assert_eq!(session.search_linear(&v, &Value::Int(8)).unwrap(), 2);
    session.sort(&mut v).unwrap();
    assert_eq!(v, ints(&[1, 3, 5, 7, 8]));
    assert_eq!(session.search_binary(&v, &Value::Int(7)).unwrap(), 3);

    let stamped = session.accumulate(&mut v).unwrap();
    assert_eq!(stamped.value(), &ints(&[24]));
    assert_eq!(v, ints(&[24]));

    let ops: Vec<_> = session
        .tracer()
        .buffer()
        .iter()
        .filter_map(|r| match r.event {
            TraceEvent::Algorithm { operation, .. } => Some(operation),
            _ => None,
        })
        .collect();
    assert_eq!(ops, vec!["search_linear", "sort", "search_binary", "accumulate"]);
}

#[test]
fn lifecycle_is_traced() {
    let mut session = traced();
    let original = session.create(Kind::String, &Value::from("hi")).unwrap();
    let mut copied = session.copy(&original).unwrap();
    let moved = session.move_value(&mut copied).unwrap();
    assert_eq!(moved, original);
    assert!(copied.is_invalid());

    let err = session.erase(&mut copied).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NullInput);

    let stats = session.tracer().stats();
    assert_eq!(stats.count(EventCategory::Lifecycle), 3);
    assert_eq!(stats.count(EventCategory::Failure), 1);
    let names: Vec<_> = session
        .tracer()
        .buffer()
        .in_category(EventCategory::Lifecycle)
        .map(|r| r.event.name())
        .collect();
    assert_eq!(names, vec!["create", "copy", "move"]);
}

#[test]
fn every_call_advances_step() {
    let mut session = traced();
    let mut v = ints(&[2, 1]);
    session.reverse(&mut v).unwrap();
    session.sort_with(&mut v, SortAlgorithm::Merge).unwrap();
    let _ = session.compare(&Value::Int(1), &Value::Int(2)).unwrap();

    let steps: Vec<_> = session.tracer().buffer().iter().map(|r| r.step).collect();
    assert_eq!(steps, vec![1, 2, 3]);
}

#[test]
fn failed_filter_records_failure() {
    let mut session = traced();
    let mut v = Value::from(Array::of(["a"]));
    let err = session.filter(&mut v, |_| true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidOperation);

    let last = session.tracer().buffer().last().unwrap();
    assert!(matches!(
        last.event,
        TraceEvent::Failure { operation: "filter", code: ErrorCode::InvalidOperation, .. }
    ));
}

#[test]
fn filter_records_length_change() {
    let mut session = traced();
    let mut v = ints(&[1, 2, 3, 4]);
    session
        .filter(&mut v, |x| x.as_integer().is_some_and(|n| n > 2))
        .unwrap();

    let last = session.tracer().buffer().last().unwrap();
    assert!(matches!(
        last.event,
        TraceEvent::Algorithm { len_before: 4, len_after: 2, .. }
    ));
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn sessions_with_same_seed_shuffle_alike() {
    let config = SessionConfig::default().with_seed(42);
    let mut a = Session::new(config.clone());
    let mut b = Session::new(config);

    let mut va = ints(&(0..30).collect::<Vec<_>>());
    let mut vb = va.clone();
    for _ in 0..3 {
        a.shuffle(&mut va).unwrap();
        b.shuffle(&mut vb).unwrap();
        assert_eq!(va, vb);
    }
}

#[test]
fn reseed_restarts_sequence() {
    let mut session = Session::new(SessionConfig::default().with_seed(7));
    let mut first = ints(&(0..16).collect::<Vec<_>>());
    session.shuffle(&mut first).unwrap();

    session.reseed(7);
    let mut second = ints(&(0..16).collect::<Vec<_>>());
    session.shuffle(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disabled_session_records_nothing() {
    let mut session = Session::default();
    let mut v = ints(&[3, 2, 1]);
    session.sort(&mut v).unwrap();
    assert!(session.tracer().buffer().is_empty());
}
