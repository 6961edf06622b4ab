//! Integration tests for the tracer and formatters

use xtofu_debug::{
    EventCategory, HumanFormatter, JsonFormatter, TraceEvent, TraceFormatter, Tracer,
    TracerConfig,
};
use xtofu_foundation::{Error, ErrorCode, Kind};

// =============================================================================
// Recording
// =============================================================================

#[test]
fn bounded_buffer_keeps_newest() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().with_capacity(4));
    for _ in 0..10 {
        tracer.begin_step();
        tracer.create(Kind::Int);
    }

    let stats = tracer.stats();
    assert_eq!(stats.len, 4);
    assert_eq!(stats.evicted, 6);
    assert_eq!(stats.steps, Some(7..=10));
    assert_eq!(stats.count(EventCategory::Lifecycle), 4);
}

#[test]
fn reenabling_resumes_recording() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    tracer.create(Kind::Bool);
    tracer.disable();
    tracer.create(Kind::Bool);
    tracer.enable();
    tracer.erase(Kind::Bool);

    let types: Vec<_> = tracer.buffer().iter().map(|r| r.event.name()).collect();
    assert_eq!(types, vec!["create", "erase"]);
}

#[test]
fn failure_event_carries_code() {
    let event = TraceEvent::failure("search_linear", &Error::not_found());
    match event {
        TraceEvent::Failure { code, .. } => assert_eq!(code, ErrorCode::NotFound),
        other => panic!("unexpected event {other:?}"),
    }
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn human_and_json_agree_on_content() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    tracer.begin_step();
    tracer.begin_step();
    tracer.algorithm("accumulate", Kind::Int, 5, 1);

    let records: Vec<_> = tracer.buffer().iter().collect();
    let human = HumanFormatter::new().format_many(&records);
    assert_eq!(human, "S0002   accumulate array<int> [5 -> 1]");

    let json = JsonFormatter::new().format_many(&records);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["operation"], "accumulate");
    assert_eq!(parsed[0]["len_after"], 1);
}

#[test]
fn tracer_render_all_follows_config() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().json());
    tracer.copy(Kind::Map);
    let parsed: serde_json::Value = serde_json::from_str(&tracer.render_all()).unwrap();
    assert_eq!(parsed[0]["event"], "copy");
    assert_eq!(parsed[0]["kind"], "map");
}

#[test]
fn muting_failures_keeps_algorithms() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().mute(EventCategory::Failure));
    tracer.failure("sort", &Error::not_found());
    tracer.algorithm("sort", Kind::Int, 3, 3);

    assert_eq!(tracer.buffer().len(), 1);
    assert_eq!(tracer.buffer().in_category(EventCategory::Failure).count(), 0);
}
