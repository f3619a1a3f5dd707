mod minor_version_upgrade;

pub use minor_version_upgrade::{remediate, remediate_with_sink};
