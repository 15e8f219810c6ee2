use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::StoryService;
use crate::backend::{from_record, to_record, Backend, Direction, Query, STICKY_NOTES};
use crate::errors::{Error, Result};
use crate::story::{NoteColor, StickyNote};

#[derive(Serialize)]
struct NewNote<'a> {
    story_id: &'a str,
    content: &'a str,
    color: NoteColor,
}

/// Fields to change on a sticky note; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
}

/// Sticky notes on stories the signed-in user owns.
pub struct StickyNoteService<'a, B: Backend + ?Sized> {
    backend: &'a B,
    stories: StoryService<'a, B>,
}

impl<'a, B: Backend + ?Sized> StickyNoteService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            stories: StoryService::new(backend),
        }
    }

    /// Notes on a story, oldest first.
    pub fn list(&self, story_id: &str) -> Result<Vec<StickyNote>> {
        self.stories.get(story_id)?;
        self.backend
            .select(
                &Query::on(STICKY_NOTES)
                    .eq("story_id", story_id)
                    .order("created_at", Direction::Ascending),
            )?
            .into_iter()
            .map(from_record)
            .collect()
    }

    /// Add an empty note, colored by its position on the story.
    pub fn add(&self, story_id: &str) -> Result<StickyNote> {
        let existing = self.list(story_id)?.len();
        let note = NewNote {
            story_id,
            content: "",
            color: NoteColor::for_index(existing),
        };
        let note: StickyNote = from_record(self.backend.insert(STICKY_NOTES, to_record(&note)?)?)?;
        debug!(note = %note.id, story = %story_id, "added sticky note");
        Ok(note)
    }

    pub fn update(&self, note_id: &str, update: &NoteUpdate) -> Result<StickyNote> {
        self.owned_note(note_id)?;
        let patch = to_record(update)?;
        if !patch.is_empty() {
            self.backend.update(&Self::by_id(note_id), patch)?;
        }
        self.owned_note(note_id)
    }

    pub fn delete(&self, note_id: &str) -> Result<()> {
        self.owned_note(note_id)?;
        self.backend.delete(&Self::by_id(note_id))?;
        debug!(note = %note_id, "deleted sticky note");
        Ok(())
    }

    fn by_id(note_id: &str) -> Query {
        Query::on(STICKY_NOTES).eq("id", Value::from(note_id))
    }

    /// Notes carry no owner; ownership follows the story they are pinned to.
    fn owned_note(&self, note_id: &str) -> Result<StickyNote> {
        let record = self
            .backend
            .select(&Self::by_id(note_id))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(STICKY_NOTES, note_id))?;
        let note: StickyNote = from_record(record)?;
        match self.stories.get(&note.story_id) {
            Ok(_) => Ok(note),
            Err(Error::NotFound { .. }) => Err(Error::not_found(STICKY_NOTES, note_id)),
            Err(e) => Err(e),
        }
    }
}
