//! Configuration loaded from `.storyscribe.toml`.

mod core;
mod init;
mod loader;
mod thresholds;

pub use self::core::{OutputConfig, StoryscribeConfig};
pub use init::{init_config, DEFAULT_CONFIG};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use thresholds::ThresholdsConfig;
