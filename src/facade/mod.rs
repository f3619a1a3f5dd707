mod service;

pub use service::{InMemoryNeptune, ModifyCall};
