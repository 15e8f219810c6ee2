use std::path::Path;

use tracing::info;

use super::loader::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};

pub const DEFAULT_CONFIG: &str = r#"# Storyscribe Configuration

[thresholds]
# Sentences with more words than this are highlighted as complex
complex_sentence_words = 20

[output]
# terminal, json, or markdown
default_format = "terminal"
"#;

/// Write a default config file into `dir`
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::Configuration(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| Error::io_at(e, &config_path))?;
    info!("Created {}", config_path.display());

    Ok(())
}
