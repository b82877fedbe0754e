//! Config Module
//!
//! Designer-tunable controller parameters, loadable from JSON.

pub mod controller_config;

pub use controller_config::{ControllerConfig, DEFAULT_JUMP_COOLDOWN_SECONDS};
