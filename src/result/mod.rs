mod outcome;

pub use outcome::RemediationOutcome;
