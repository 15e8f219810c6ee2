use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::StoryscribeConfig;
use super::thresholds::ThresholdsConfig;

pub const CONFIG_FILE_NAME: &str = ".storyscribe.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string, replacing invalid thresholds with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<StoryscribeConfig, String> {
    let mut config = toml::from_str::<StoryscribeConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.thresholds.validate() {
        warn!("Invalid thresholds: {}. Using defaults.", e);
        config.thresholds = ThresholdsConfig::default();
    }

    Ok(config)
}

/// Try loading config from a specific file. Missing files are silent.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<StoryscribeConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: &Path) -> StoryscribeConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            StoryscribeConfig::default()
        })
}

pub fn load_config() -> StoryscribeConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            StoryscribeConfig::default()
        }
    }
}
