//! Rendering Tests
//!
//! Textual form of events and the stdout/writer output paths.

use crate::*;

struct Failing;

impl fmt::Display for Failing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_render_scenario() {
    let log = active_log();
    let a = component("A");
    let b = component("B");
    log.record(&a, Severity::Info, payload!["hello"]);
    log.record(&b, Severity::Error, payload!["x", "y"]);

    let events = log.all_events();
    assert_eq!(
        eventlog::render(&events[1]).unwrap(),
        "Error:\tComponent(B) : \nxy"
    );
    assert_eq!(
        eventlog::render(&events[0]).unwrap(),
        "Info:\tComponent(A) : \nhello"
    );
}

#[test]
fn test_render_uses_severity_names() {
    let log = active_log();
    let e = Emitter::new(Job(9));
    for sev in Severity::ALL {
        log.record(&e, sev, payload![]);
    }

    let heads: Vec<String> = log
        .all_events()
        .iter()
        .map(|ev| ev.render().unwrap())
        .collect();
    assert_eq!(
        heads,
        vec![
            "Info:\tjob-9 : \n",
            "Warning:\tjob-9 : \n",
            "Important:\tjob-9 : \n",
            "Critical:\tjob-9 : \n",
            "Error:\tjob-9 : \n",
        ]
    );
}

#[test]
fn test_payload_items_are_concatenated_without_separator() {
    let log = active_log();
    log.record_info(&component("a"), payload![1, "-", 2.5, '-', false]);

    let event = &log.all_events()[0];
    assert_eq!(event.message().unwrap(), "1-2.5-false");
}

#[test]
fn test_write_events_for_filtered_subset() {
    let log = active_log();
    let a = component("a");
    log.record_info(&a, payload!["quiet"]);
    log.record(&a, Severity::Critical, payload!["loud"]);

    let mut out = Vec::new();
    eventlog::write_events(&mut out, &log.at_least_severity(Severity::Critical)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Critical:\tComponent(a) : \nloud\n"
    );
}

#[test]
fn test_render_failure_propagates_to_caller() {
    let log = active_log();
    let a = component("a");
    log.record_info(&a, payload!["fine"]);
    log.record_info(&a, payload![Failing]);

    let events = log.all_events();
    assert!(eventlog::render(&events[0]).is_ok());
    assert!(matches!(
        eventlog::render(&events[1]),
        Err(Error::Render(_))
    ));

    let mut out = Vec::new();
    let err = log.write_to(&mut out).unwrap_err();
    assert!(matches!(err, Error::Render(_)));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Info:\tComponent(a) : \nfine\n"
    );
}

#[test]
fn test_print_paths_succeed() {
    let log = active_log();
    log.record_info(&component("stdout"), payload!["printed"]);
    log.print_all().unwrap();
    eventlog::print_events(&log.all_events()).unwrap();
}
