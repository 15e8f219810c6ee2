//! Story records as stored by the backend, and the pure helpers the editing
//! surface uses on them.

pub mod notes;

pub use notes::{NoteColor, StickyNote};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A stored story owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    /// Case-insensitive match against title, content, tags, and notes.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
            || self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(needle))
    }
}

/// Story fields as typed into the editor. Tags are the raw comma-separated
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub notes: Option<String>,
}

impl StoryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("Story title is required"));
        }
        Ok(())
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Blank notes are stored as absent.
    pub fn normalized_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string)
    }
}

/// Editing an existing story starts from its stored fields, with tags
/// joined back into one comma-separated line.
impl From<&Story> for StoryDraft {
    fn from(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            content: story.content.clone(),
            tags: story.tags.join(", "),
            notes: story.notes.clone(),
        }
    }
}

/// Split comma-separated tags, trimming each and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stories matching `query`, in their original order. A blank query
/// matches everything.
pub fn filter_stories<'a>(stories: &'a [Story], query: &str) -> Vec<&'a Story> {
    if query.trim().is_empty() {
        return stories.iter().collect();
    }

    let needle = query.to_lowercase();
    stories.iter().filter(|story| story.matches(&needle)).collect()
}
