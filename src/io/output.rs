use serde::Serialize;
use std::io::Write;

use crate::analysis::{
    analyze_with, AnalysisConfig, AnalysisResult, AnalyzedSentence, ReadabilityScore,
    SentenceCategory, TextStatistics,
};
use crate::formatting::{readability_summary, FormattingConfig, Highlighter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub complex: usize,
    pub passive: usize,
    pub complex_passive: usize,
    pub clear: usize,
}

/// Everything a writer renders for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub source: String,
    pub complex_word_threshold: usize,
    pub sentences: Vec<AnalyzedSentence>,
    pub reading_level: ReadabilityScore,
    pub summary: String,
    pub statistics: TextStatistics,
    pub categories: CategoryCounts,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, text: &str, config: &AnalysisConfig) -> Self {
        let result = analyze_with(text, config);
        let categories = CategoryCounts {
            complex: result.count(SentenceCategory::Complex),
            passive: result.count(SentenceCategory::Passive),
            complex_passive: result.count(SentenceCategory::ComplexPassive),
            clear: result.count(SentenceCategory::Clear),
        };

        Self {
            source: source.into(),
            complex_word_threshold: config.complex_word_threshold,
            summary: readability_summary(result.reading_level),
            reading_level: result.reading_level,
            sentences: result.sentences,
            statistics: TextStatistics::collect(text),
            categories,
        }
    }

    fn result(&self) -> AnalysisResult {
        AnalysisResult {
            sentences: self.sentences.clone(),
            reading_level: self.reading_level,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Readability Report: {}", report.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", report.summary)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let stats = &report.statistics;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Sentences | {} |", report.sentences.len())?;
        writeln!(self.writer, "| Words | {} |", stats.words)?;
        writeln!(self.writer, "| Syllables | {} |", stats.syllables)?;
        writeln!(self.writer, "| Complex | {} |", report.categories.complex)?;
        writeln!(self.writer, "| Passive | {} |", report.categories.passive)?;
        writeln!(
            self.writer,
            "| Complex + Passive | {} |",
            report.categories.complex_passive
        )?;
        writeln!(self.writer, "| Clear | {} |", report.categories.clear)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sentences(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.sentences.is_empty() {
            writeln!(self.writer, "_No sentences to analyze._")?;
            return Ok(());
        }

        writeln!(self.writer, "## Sentences")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Category | Sentence |")?;
        writeln!(self.writer, "|---|----------|----------|")?;
        for (index, sentence) in report.sentences.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                index + 1,
                sentence.category(),
                escape_table_cell(&sentence.text)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_sentences(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    highlighter: Highlighter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            highlighter: Highlighter::new(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let result = report.result();
        if !result.is_empty() {
            writeln!(self.writer, "{}", self.highlighter.passage(&result))?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", self.highlighter.legend(&result))?;
        writeln!(self.writer, "{}", self.highlighter.summary(report.reading_level))?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
