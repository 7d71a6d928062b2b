//! Rostername Core — deterministic, collision-free usernames from given and family names.

pub mod config;
pub mod error;
pub mod existing;
pub mod roster;
pub mod rules;
pub mod username;

pub use config::{GeneratorConfig, RosternameConfig};
pub use error::{Result, RosternameError};
pub use existing::UsernameSet;
pub use rules::{ReplacementRule, ReplacementRules};
pub use username::{take_first_n_characters, UsernameGenerator, MIN_LENGTH_FLOOR};
