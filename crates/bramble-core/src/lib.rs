pub mod error;
pub mod probe;
pub mod types;

pub use error::{BrambleError, BrambleResult};
pub use probe::{EnvironmentProbe, SharedProbe};
pub use types::{
    ActivationOutcome, ActivationTrigger, AutomationSignal, EnvironmentSnapshot, InteractionKind,
    SignalKind,
};
