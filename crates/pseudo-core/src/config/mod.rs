//! Configuration for the pseudonymization toolkit.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod output_config;
pub mod pseudo_config;
pub mod pseudonymize_config;

pub use output_config::OutputConfig;
pub use pseudo_config::PseudoConfig;
pub use pseudonymize_config::{default_category_word, validate_category_word, PseudonymizeConfig};
