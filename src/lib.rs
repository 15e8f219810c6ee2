//! # storyscribe
//!
//! Readability analysis for short stories. The core is a pure text analyzer
//! that splits a draft into sentences, flags long sentences and passive
//! voice, and estimates a Flesch-Kincaid grade level. Around it sit the
//! story domain (tags, search, sticky notes), a backend seam for the
//! hosted service that stores stories, and a CLI that renders the analysis.
//!
//! ```rust
//! use storyscribe::{analyze, readability_summary};
//!
//! let result = analyze("Hello world.");
//! assert_eq!(result.sentences.len(), 1);
//! assert_eq!(readability_summary(result.reading_level), "Grade 2.9");
//! ```

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod service;
pub mod story;

// Re-export commonly used types
pub use crate::analysis::{
    analyze, analyze_with, AnalysisConfig, AnalysisResult, AnalyzedSentence, ReadabilityScore,
    SentenceCategory, TextStatistics,
};
pub use crate::backend::{AuthProvider, Backend, InMemoryBackend, RecordStore};
pub use crate::config::{load_config, StoryscribeConfig};
pub use crate::errors::{Error, Result};
pub use crate::formatting::readability_summary;
pub use crate::service::{StickyNoteService, StoryService};
pub use crate::story::{NoteColor, StickyNote, Story, StoryDraft};
