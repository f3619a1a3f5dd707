use crate::core::{
    DbInstanceDescriptor, ModifyDbInstanceResponse, RemediationError, ResponseMetadata, Result,
};
use crate::interface::NeptuneClient;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// One recorded `modify_db_instance` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyCall {
    pub identifier: String,
    pub auto_minor_version_upgrade: bool,
    pub apply_immediately: bool,
}

/// In-process Neptune service stand-in.
///
/// Holds a map of instance descriptors, records every modify call, and
/// supports failure injection on both operations. This is the crate's test
/// double and demo service.
///
/// # Examples
///
/// ```
/// use neptune_remediation::{InMemoryNeptune, NeptuneClient};
///
/// let service = InMemoryNeptune::new();
/// service.register_instance("neptune-db-1", false);
///
/// let instances = service.describe_db_instances("neptune-db-1").unwrap();
/// assert!(!instances[0].auto_minor_version_upgrade);
/// ```
pub struct InMemoryNeptune {
    state: Mutex<ServiceState>,
}

#[derive(Default)]
struct ServiceState {
    instances: HashMap<String, DbInstanceDescriptor>,
    modify_calls: Vec<ModifyCall>,
    describe_failure: Option<RemediationError>,
    modify_failure: Option<RemediationError>,
    modify_status_code: u16,
}

impl InMemoryNeptune {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ServiceState {
                modify_status_code: 200,
                ..ServiceState::default()
            }),
        }
    }

    /// Add an instance with the given auto-upgrade flag.
    pub fn register_instance(&self, identifier: &str, auto_minor_version_upgrade: bool) {
        let descriptor = DbInstanceDescriptor::new(identifier)
            .auto_minor_version_upgrade(auto_minor_version_upgrade);
        self.lock_state()
            .instances
            .insert(identifier.to_string(), descriptor);
    }

    /// Make every subsequent describe call fail with `error`.
    pub fn fail_describe_with(&self, error: RemediationError) {
        self.lock_state().describe_failure = Some(error);
    }

    /// Make every subsequent modify call fail with `error`.
    pub fn fail_modify_with(&self, error: RemediationError) {
        self.lock_state().modify_failure = Some(error);
    }

    /// Override the transport status code on modify responses (default 200).
    pub fn set_modify_status_code(&self, code: u16) {
        self.lock_state().modify_status_code = code;
    }

    /// Every modify attempt seen so far, in order, including rejected ones.
    pub fn modify_calls(&self) -> Vec<ModifyCall> {
        self.lock_state().modify_calls.clone()
    }

    /// Current descriptor for `identifier`, if registered.
    pub fn instance(&self, identifier: &str) -> Option<DbInstanceDescriptor> {
        self.lock_state().instances.get(identifier).cloned()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ServiceState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryNeptune {
    fn default() -> Self {
        Self::new()
    }
}

impl NeptuneClient for InMemoryNeptune {
    fn describe_db_instances(&self, identifier: &str) -> Result<Vec<DbInstanceDescriptor>> {
        let state = self.lock_state();
        if let Some(error) = &state.describe_failure {
            return Err(error.clone());
        }

        // A real service rejects unknown identifiers with a structured error.
        match state.instances.get(identifier) {
            Some(descriptor) => Ok(vec![descriptor.clone()]),
            None => Err(RemediationError::service(
                "DBInstanceNotFound",
                format!("DBInstance {} not found.", identifier),
            )),
        }
    }

    fn modify_db_instance(
        &self,
        identifier: &str,
        auto_minor_version_upgrade: bool,
        apply_immediately: bool,
    ) -> Result<ModifyDbInstanceResponse> {
        let mut state = self.lock_state();
        state.modify_calls.push(ModifyCall {
            identifier: identifier.to_string(),
            auto_minor_version_upgrade,
            apply_immediately,
        });

        if let Some(error) = &state.modify_failure {
            return Err(error.clone());
        }
        if !state.instances.contains_key(identifier) {
            return Err(RemediationError::service(
                "DBInstanceNotFound",
                format!("DBInstance {} not found.", identifier),
            ));
        }

        let status_code = state.modify_status_code;
        let db_instance = if status_code < 400 {
            state.instances.get_mut(identifier).map(|descriptor| {
                descriptor.auto_minor_version_upgrade = auto_minor_version_upgrade;
                descriptor.clone()
            })
        } else {
            None
        };

        Ok(ModifyDbInstanceResponse {
            db_instance,
            response_metadata: ResponseMetadata {
                http_status_code: status_code,
                request_id: Uuid::new_v4().to_string(),
            },
        })
    }
}
