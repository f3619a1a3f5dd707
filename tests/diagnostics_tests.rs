/// Diagnostic output tests
///
/// Assertions on the operator-visible lines a run emits.
/// Run with: cargo test --test diagnostics_tests
use neptune_remediation::{
    remediate_with_sink, InMemoryNeptune, MemorySink, RemediationError,
};

#[test]
fn test_run_starts_with_marker_and_ends_with_summary() {
    let service = InMemoryNeptune::new();
    service.register_instance("neptune-db-1", false);
    let sink = MemorySink::new();

    let outcome = remediate_with_sink(&service, "neptune-db-1", &sink);

    let lines = sink.lines();
    assert_eq!(lines.first().map(String::as_str), Some("Executing remediation"));
    assert_eq!(lines.last().cloned(), Some(outcome.summary_line()));
}

#[test]
fn test_successful_run_emits_exactly_two_lines() {
    let service = InMemoryNeptune::new();
    service.register_instance("neptune-db-1", false);
    let sink = MemorySink::new();

    remediate_with_sink(&service, "neptune-db-1", &sink);

    assert_eq!(
        sink.lines(),
        vec![
            "Executing remediation".to_string(),
            "200-Auto version upgrade is now enabled for neptune instance : neptune-db-1 \n"
                .to_string(),
        ]
    );
}

#[test]
fn test_modify_failure_message_is_emitted_twice() {
    let service = InMemoryNeptune::new();
    service.register_instance("neptune-db-1", false);
    service.fail_modify_with(RemediationError::unexpected("connection reset by peer"));
    let sink = MemorySink::new();

    let outcome = remediate_with_sink(&service, "neptune-db-1", &sink);

    // once from the failure handler, once inside the final summary line
    let lines = sink.lines();
    let occurrences = lines
        .iter()
        .filter(|line| line.contains(&outcome.message))
        .count();
    assert_eq!(occurrences, 2);
    assert_eq!(lines[1], outcome.message);
    assert_eq!(lines[2], format!("400-{}", outcome.message));
}

#[test]
fn test_already_enabled_run_emits_no_failure_lines() {
    let service = InMemoryNeptune::new();
    service.register_instance("neptune-db-1", true);
    let sink = MemorySink::new();

    remediate_with_sink(&service, "neptune-db-1", &sink);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| !line.contains("Unexpected error")));
}
