use crate::core::{DbInstanceDescriptor, ModifyDbInstanceResponse, Result};

/// A generic trait for Neptune service clients.
///
/// This trait allows writing remediation code that is agnostic to the
/// underlying client implementation. You can use `InMemoryNeptune` for tests
/// and simple apps, or wrap a real service client to implement this trait for
/// production use.
///
/// Both calls are synchronous and blocking; any timeout behavior belongs to
/// the implementation, not to callers.
pub trait NeptuneClient: Send + Sync {
    /// Describe the instances matching `identifier`. The first record's
    /// auto-upgrade flag is the one remediation reads.
    fn describe_db_instances(&self, identifier: &str) -> Result<Vec<DbInstanceDescriptor>>;

    /// Change the instance's auto-upgrade configuration. With
    /// `apply_immediately` the change takes effect at once instead of waiting
    /// for the maintenance window.
    fn modify_db_instance(
        &self,
        identifier: &str,
        auto_minor_version_upgrade: bool,
        apply_immediately: bool,
    ) -> Result<ModifyDbInstanceResponse>;
}
