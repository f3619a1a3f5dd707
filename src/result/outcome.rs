/// Final result of one remediation run: a transport-style status code and a
/// human-readable message.
///
/// Built once per branch as an immutable value. Callers and operators
/// distinguish success from failure solely by the status code threshold:
/// anything below 400 is success, whether or not a mutation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationOutcome {
    pub status_code: u16,
    pub message: String,
}

impl RemediationOutcome {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }

    /// The `<status>-<message>` line written to the diagnostic sink at the
    /// end of every run.
    pub fn summary_line(&self) -> String {
        format!("{}-{}", self.status_code, self.message)
    }

    pub fn into_parts(self) -> (u16, String) {
        (self.status_code, self.message)
    }
}

impl From<RemediationOutcome> for (u16, String) {
    fn from(outcome: RemediationOutcome) -> Self {
        outcome.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_threshold() {
        assert!(RemediationOutcome::new(200, "ok").is_success());
        assert!(RemediationOutcome::new(399, "ok").is_success());
        assert!(!RemediationOutcome::new(400, "bad").is_success());
        assert!(!RemediationOutcome::new(503, "bad").is_success());
    }

    #[test]
    fn test_summary_line() {
        let outcome = RemediationOutcome::new(400, "Unexpected error: boom");
        assert_eq!(outcome.summary_line(), "400-Unexpected error: boom");
    }

    #[test]
    fn test_into_parts() {
        let (code, message) = RemediationOutcome::new(200, "done").into_parts();
        assert_eq!(code, 200);
        assert_eq!(message, "done");
    }
}
