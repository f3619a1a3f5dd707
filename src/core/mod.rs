pub mod error;
pub mod types;

pub use error::{RemediationError, Result};
pub use types::{DbInstanceDescriptor, ModifyDbInstanceResponse, ResponseMetadata};
