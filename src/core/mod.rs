// Public modules
pub mod command;
pub mod defaults;
pub mod error;
pub mod literal;
pub mod naming;
pub mod output;
pub mod shell;
pub mod value;
pub mod version;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use command::CommandLine;
pub use error::{Error, ErrorCode, Result};
pub use output::CommandOutput;
pub use value::{Identifier, Mapping, Number, Scalar, Value};
pub use version::{require_version, HostVersion};
