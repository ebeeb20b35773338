pub mod controller;
pub mod race;

pub use controller::{ActivationController, ArmedGate, Engagement, GateConfig};
pub use race::{InteractionHandle, InteractionRace};
