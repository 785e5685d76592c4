//! Pipeline gates.
//!
//! Each gate inspects one aspect of the host and produces a
//! [`StageOutcome`]. Gates never return errors: anything that goes wrong
//! inside a gate becomes a failed outcome.
//!
//! - [`version`] - interpreter version floor
//! - [`capability`] - required interpreter facilities
//! - [`config_oracle`] - agreement with the configuration layer
//! - [`runtime`] - the interpreter probe the first two gates consult

pub mod capability;
pub mod config_oracle;
pub mod outcome;
pub mod runtime;
pub mod version;

pub use capability::{Capability, CapabilityGate};
pub use config_oracle::ConfigOracle;
pub use outcome::{FailureKind, StageOutcome};
pub use runtime::{InterpreterProbe, RuntimeProbe, RuntimeVersion};
pub use version::{VersionGate, MIN_VERSION};
