//! Query Tests
//!
//! Predicate filter and its severity/emitter shorthands.

use crate::*;
use std::any::TypeId;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Info from A, then Error from B; returns the log and both emitters.
fn two_event_log() -> (EventLog, Emitter, Emitter) {
    let log = active_log();
    let a = component("A");
    let b = component("B");
    log.record(&a, Severity::Info, payload!["hello"]);
    log.record(&b, Severity::Error, payload!["x", "y"]);
    (log, a, b)
}

#[test]
fn test_scenario_severity_queries() {
    let (log, _a, _b) = two_event_log();

    let infos = log.of_severity(Severity::Info);
    assert_eq!(sequences(&infos), vec![0]);

    let serious = log.at_least_severity(Severity::Important);
    assert_eq!(sequences(&serious), vec![1]);

    assert_eq!(sequences(&log.at_least_level(3).unwrap()), vec![1]);
    assert_eq!(sequences(&log.of_level(1).unwrap()), vec![0]);
}

#[test]
fn test_at_least_matches_generic_filter_for_every_level() {
    let log = active_log();
    let e = component("mixed");
    for sev in [
        Severity::Error,
        Severity::Info,
        Severity::Critical,
        Severity::Warning,
        Severity::Important,
        Severity::Info,
    ] {
        log.record(&e, sev, payload![sev]);
    }

    for level in Severity::ALL {
        let shorthand = log.at_least_severity(level);
        let generic = log.filter(|ev| ev.severity() >= level);
        assert_eq!(sequences(&shorthand), sequences(&generic));

        let exact = log.of_severity(level);
        assert!(exact.iter().all(|ev| ev.severity() == level));
    }
}

#[test]
fn test_filter_preserves_order_and_store() {
    let log = active_log();
    let e = component("c");
    for i in 0..6u32 {
        log.record_info(&e, payload![i]);
    }

    let odd = log.filter(|ev| ev.sequence() % 2 == 1);
    assert_eq!(sequences(&odd), vec![1, 3, 5]);
    assert_eq!(log.len(), 6);

    assert!(log.filter(|_| false).is_empty());
    assert_eq!(log.filter(|_| true).len(), 6);
}

#[test]
fn test_predicate_can_read_the_log() {
    let log = active_log();
    let a = component("a");
    log.record_info(&a, payload!["x"]);
    log.record_warning(&a, payload!["y"]);

    let hits = log.filter(|e| log.len() == 2 && !log.is_empty() && e.sequence() == 1);
    assert_eq!(sequences(&hits), vec![1]);

    let nested = log.filter(|e| log.of_severity(e.severity()).len() == 1);
    assert_eq!(sequences(&nested), vec![0, 1]);
    assert!(format!("{:?}", log).contains("len: 2"));
}

#[test]
fn test_predicate_can_record_into_the_log() {
    let log = active_log();
    let a = component("a");
    log.record_info(&a, payload!["seed"]);

    let hits = log.filter(|e| {
        log.record_info(&a, payload!["from predicate"]);
        e.sequence() == 0
    });

    assert_eq!(sequences(&hits), vec![0]);
    assert_eq!(log.len(), 2);
    assert_eq!(log.all_events()[1].message().unwrap(), "from predicate");
}

#[test]
fn test_queries_proceed_while_a_predicate_is_running() {
    let log = Arc::new(active_log());
    let a = component("a");
    log.record_info(&a, payload!["x"]);

    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let slow = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            log.filter(|_| {
                let _ = entered_tx.send(());
                let _ = release_rx.recv();
                true
            })
        })
    };
    entered_rx.recv().unwrap();

    let (done_tx, done_rx) = mpsc::channel();
    let reader = {
        let log = Arc::clone(&log);
        let a = a.clone();
        thread::spawn(move || {
            log.record_warning(&a, payload!["y"]);
            let _ = done_tx.send((log.len(), log.all_events().len(), log.from_emitter(&a).len()));
        })
    };

    let observed = done_rx.recv_timeout(Duration::from_secs(5));
    release_tx.send(()).unwrap();
    assert_eq!(observed, Ok((2, 2, 2)));

    reader.join().unwrap();
    let slow_hits = slow.join().unwrap();
    assert_eq!(sequences(&slow_hits), vec![0]);
}

#[test]
fn test_from_emitter_is_identity_based() {
    let (log, a, _b) = two_event_log();
    let lookalike = component("A");

    assert_eq!(sequences(&log.from_emitter(&a)), vec![0]);
    assert_eq!(sequences(&log.from_emitter(&a.clone())), vec![0]);
    assert!(log.from_emitter(&lookalike).is_empty());
}

#[test]
fn test_from_emitter_equal_is_value_based() {
    let (log, _a, _b) = two_event_log();
    let lookalike = component("A");

    assert_eq!(sequences(&log.from_emitter_equal(lookalike.source())), vec![0]);
    assert_eq!(
        sequences(&log.from_emitter_equal(&Component { name: "B" })),
        vec![1]
    );
    assert!(log.from_emitter_equal(&Component { name: "C" }).is_empty());
    assert!(log.from_emitter_equal(&"A").is_empty());
}

#[test]
fn test_from_emitter_type_is_exact() {
    let log = active_log();
    let c = component("c");
    let j = Emitter::new(Job(1));
    let s = Emitter::new("plain".to_string());

    log.record_info(&c, payload!["c"]);
    log.record_info(&j, payload!["j1"]);
    log.record_info(&s, payload!["s"]);
    log.record_info(&Emitter::new(Job(2)), payload!["j2"]);

    assert_eq!(sequences(&log.from_emitter_type::<Job>()), vec![1, 3]);
    assert_eq!(sequences(&log.from_emitter_type::<Component>()), vec![0]);
    assert_eq!(
        sequences(&log.from_emitter_type_id(TypeId::of::<String>())),
        vec![2]
    );
    assert!(log.from_emitter_type::<&'static str>().is_empty());
}

#[test]
fn test_predicates_compose() {
    let (log, a, b) = two_event_log();
    log.record(&a, Severity::Critical, payload!["boom"]);

    let serious = eventlog::filter::at_least(Severity::Critical);
    let from_a = eventlog::filter::emitted_by(&a);
    let hits = log.filter(|e| serious(e) && from_a(e));
    assert_eq!(sequences(&hits), vec![2]);

    let from_b = eventlog::filter::emitted_by(&b);
    assert_eq!(sequences(&log.filter(|e| from_b(e) || !serious(e))), vec![0, 1]);
}
