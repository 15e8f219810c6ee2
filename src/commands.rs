//! Command handlers behind the CLI.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::AnalysisConfig;
use crate::config::StoryscribeConfig;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{create_writer, read_input, source_name, AnalysisReport, OutputFormat};

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub complex_threshold: Option<usize>,
    pub formatting: FormattingConfig,
}

/// `--plain` turns off colors and emoji. An explicit color mode overrides the
/// environment but keeps its emoji setting.
pub fn create_formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    let from_env = FormattingConfig::from_env();
    match color {
        Some(color) => FormattingConfig::new(color, from_env.emoji),
        None => from_env,
    }
}

/// CLI flags win over the config file.
fn resolve(config: &AnalyzeConfig, file: &StoryscribeConfig) -> (OutputFormat, AnalysisConfig) {
    let format = config.format.unwrap_or_else(|| {
        OutputFormat::parse(&file.output.default_format).unwrap_or_else(|| {
            warn!(
                "Unknown default_format '{}'. Using terminal.",
                file.output.default_format
            );
            OutputFormat::Terminal
        })
    });

    let mut analysis = file.thresholds.analysis_config();
    if let Some(threshold) = config.complex_threshold {
        analysis.complex_word_threshold = threshold;
    }

    (format, analysis)
}

pub fn handle_analyze(config: AnalyzeConfig, file_config: &StoryscribeConfig) -> Result<()> {
    let (format, analysis) = resolve(&config, file_config);
    let path = config.path.as_deref();

    let text = read_input(path).context("Failed to read input text")?;
    let report = AnalysisReport::new(source_name(path), &text, &analysis);
    info!(
        source = %report.source,
        sentences = report.sentences.len(),
        grade = report.reading_level.value(),
        "analysis complete"
    );

    let sink: Box<dyn Write> = match &config.output {
        Some(output) => Box::new(BufWriter::new(File::create(output).with_context(|| {
            format!("Failed to create output file {}", output.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };

    // Files never get escape codes
    let formatting = if config.output.is_some() {
        FormattingConfig::plain()
    } else {
        config.formatting
    };

    create_writer(format, sink, formatting).write_report(&report)
}

pub fn handle_init(dir: &Path, force: bool) -> Result<()> {
    crate::config::init_config(dir, force)?;
    println!("Created {}", dir.join(crate::config::CONFIG_FILE_NAME).display());
    Ok(())
}
