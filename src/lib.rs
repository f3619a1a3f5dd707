// ============================================================================
// Neptune Remediation Library
// ============================================================================

pub mod core;
pub mod diag;
pub mod facade;
pub mod interface;
pub mod result;
mod remediation;

// Re-export main types for convenience
pub use self::core::{
    DbInstanceDescriptor, ModifyDbInstanceResponse, RemediationError, ResponseMetadata, Result,
};
pub use diag::{DiagnosticSink, MemorySink, StdoutSink};
pub use facade::{InMemoryNeptune, ModifyCall};
pub use interface::NeptuneClient;
pub use remediation::{remediate, remediate_with_sink};
pub use result::RemediationOutcome;

// ============================================================================
// High-level Remediator API
// ============================================================================

/// Remediator bound to one service client and one diagnostic sink.
///
/// This is the recommended way to embed the remediation in an orchestrator
/// that runs it for many instances: build it once, then call [`Remediator::run`]
/// per instance identifier.
///
/// # Examples
///
/// ```
/// use neptune_remediation::{InMemoryNeptune, Remediator};
///
/// let service = InMemoryNeptune::new();
/// service.register_instance("neptune-db-1", false);
///
/// let remediator = Remediator::new(service);
/// let (status, message) = remediator.run("neptune-db-1").into_parts();
///
/// assert_eq!(status, 200);
/// assert!(message.contains("neptune-db-1"));
/// ```
pub struct Remediator<C: NeptuneClient> {
    client: C,
    sink: Box<dyn DiagnosticSink>,
}

impl<C: NeptuneClient> Remediator<C> {
    /// Build a remediator writing diagnostics to stdout.
    pub fn new(client: C) -> Self {
        Self {
            client,
            sink: Box::new(StdoutSink),
        }
    }

    /// Replace the diagnostic sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use neptune_remediation::{InMemoryNeptune, MemorySink, Remediator};
    ///
    /// let service = InMemoryNeptune::new();
    /// service.register_instance("neptune-db-1", true);
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let remediator = Remediator::new(service).with_sink(sink.clone());
    /// remediator.run("neptune-db-1");
    ///
    /// assert_eq!(sink.lines()[0], "Executing remediation");
    /// ```
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Run the remediation for one instance.
    pub fn run(&self, instance_identifier: &str) -> RemediationOutcome {
        remediate_with_sink(&self.client, instance_identifier, self.sink.as_ref())
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }
}
