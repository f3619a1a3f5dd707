use crate::diag::{DiagnosticSink, StdoutSink};
use crate::interface::NeptuneClient;
use crate::result::RemediationOutcome;
use log::{error, info, warn};

/// Enable auto minor version upgrade on `instance_identifier` if it is not
/// already enabled.
///
/// Diagnostic lines go to stdout; see [`remediate_with_sink`] for the
/// injectable variant and the full behavior contract.
///
/// # Examples
///
/// ```
/// use neptune_remediation::{remediate, InMemoryNeptune};
///
/// let service = InMemoryNeptune::new();
/// service.register_instance("neptune-db-1", false);
///
/// let outcome = remediate(&service, "neptune-db-1");
/// assert!(outcome.is_success());
/// ```
pub fn remediate(client: &dyn NeptuneClient, instance_identifier: &str) -> RemediationOutcome {
    remediate_with_sink(client, instance_identifier, &StdoutSink)
}

/// Enable auto minor version upgrade on `instance_identifier`, writing
/// diagnostic lines to `sink`.
///
/// Exactly one outcome is produced per invocation and nothing is re-raised:
/// every failure becomes a 400 outcome. The sink always receives an
/// `"Executing remediation"` marker first and a `"<status>-<message>"` line
/// last. Idempotent at the resource level: an already-enabled instance is
/// reported as success without a mutation.
///
/// If the describe call fails, the flag is treated as disabled and the modify
/// call still runs; the final outcome is then whatever the modify call
/// produced. The describe failure itself is only logged.
pub fn remediate_with_sink(
    client: &dyn NeptuneClient,
    instance_identifier: &str,
    sink: &dyn DiagnosticSink,
) -> RemediationOutcome {
    sink.emit("Executing remediation");
    info!(
        "checking auto minor version upgrade on instance '{}'",
        instance_identifier
    );

    let upgrade_enabled = match client.describe_db_instances(instance_identifier) {
        Ok(instances) => match instances.first() {
            Some(descriptor) => descriptor.auto_minor_version_upgrade,
            None => {
                warn!(
                    "describe returned no records for '{}', treating auto-upgrade as disabled",
                    instance_identifier
                );
                false
            }
        },
        Err(e) => {
            warn!(
                "describe failed for '{}' ({}), treating auto-upgrade as disabled",
                instance_identifier, e
            );
            false
        }
    };

    let outcome = if !upgrade_enabled {
        match client.modify_db_instance(instance_identifier, true, true) {
            Ok(response) => {
                let status_code = response.status_code();
                if status_code >= 400 {
                    error!(
                        "modify rejected with transport status {} for '{}'",
                        status_code, instance_identifier
                    );
                    let raw = serde_json::to_string(&response)
                        .unwrap_or_else(|_| format!("{:?}", response));
                    RemediationOutcome::new(status_code, format!("Unexpected error: {} \n", raw))
                } else {
                    info!(
                        "auto minor version upgrade enabled on '{}'",
                        instance_identifier
                    );
                    RemediationOutcome::new(
                        status_code,
                        format!(
                            "Auto version upgrade is now enabled for neptune instance : {} \n",
                            instance_identifier
                        ),
                    )
                }
            }
            Err(e) => {
                error!("modify failed for '{}': {}", instance_identifier, e);
                let outcome = RemediationOutcome::new(400, format!("Unexpected error: {}", e));
                sink.emit(&outcome.message);
                outcome
            }
        }
    } else {
        // Already compliant, nothing to mutate.
        info!(
            "auto minor version upgrade already enabled on '{}'",
            instance_identifier
        );
        RemediationOutcome::new(
            200,
            format!(
                "Auto version upgrade already enabled for neptune instance : {}, no action needed \n",
                instance_identifier
            ),
        )
    };

    sink.emit(&outcome.summary_line());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::MemorySink;
    use crate::facade::InMemoryNeptune;

    #[test]
    fn test_already_enabled_short_circuits() {
        let service = InMemoryNeptune::new();
        service.register_instance("neptune-db-1", true);
        let sink = MemorySink::new();

        let outcome = remediate_with_sink(&service, "neptune-db-1", &sink);

        assert_eq!(outcome.status_code, 200);
        assert_eq!(
            outcome.message,
            "Auto version upgrade already enabled for neptune instance : neptune-db-1, no action needed \n"
        );
        assert!(service.modify_calls().is_empty());
    }

    #[test]
    fn test_disabled_instance_gets_one_modify_call() {
        let service = InMemoryNeptune::new();
        service.register_instance("neptune-db-1", false);
        let sink = MemorySink::new();

        let outcome = remediate_with_sink(&service, "neptune-db-1", &sink);

        assert_eq!(outcome.status_code, 200);
        let calls = service.modify_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].auto_minor_version_upgrade);
        assert!(calls[0].apply_immediately);
    }

    #[test]
    fn test_sink_marker_and_summary_lines() {
        let service = InMemoryNeptune::new();
        service.register_instance("neptune-db-1", false);
        let sink = MemorySink::new();

        let outcome = remediate_with_sink(&service, "neptune-db-1", &sink);

        let lines = sink.lines();
        assert_eq!(lines.first().map(String::as_str), Some("Executing remediation"));
        assert_eq!(lines.last().cloned(), Some(outcome.summary_line()));
    }
}
