use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{analyze_with, AnalysisConfig, AnalysisResult};
use crate::backend::{
    from_record, to_record, Backend, Direction, Query, STICKY_NOTES, STORIES,
};
use crate::errors::{Error, Result};
use crate::story::{filter_stories, Story, StoryDraft};

/// Columns written on create and update. A draft without notes leaves the
/// stored notes untouched.
#[derive(Serialize)]
struct StoryFields<'a> {
    title: &'a str,
    content: &'a str,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    user_id: &'a str,
    updated_at: DateTime<Utc>,
}

impl<'a> StoryFields<'a> {
    fn from_draft(draft: &'a StoryDraft, user_id: &'a str) -> Self {
        Self {
            title: draft.title.trim(),
            content: &draft.content,
            tags: draft.parsed_tags(),
            notes: draft.normalized_notes(),
            user_id,
            updated_at: Utc::now(),
        }
    }
}

/// Story CRUD scoped to the signed-in user.
pub struct StoryService<'a, B: Backend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> StoryService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    fn owned(&self, user_id: &str) -> Query {
        Query::on(STORIES).eq("user_id", user_id)
    }

    pub fn create(&self, draft: &StoryDraft) -> Result<Story> {
        draft.validate()?;
        let user = self.backend.current_user()?;

        let record = to_record(&StoryFields::from_draft(draft, &user.id))?;
        let story: Story = from_record(self.backend.insert(STORIES, record)?)?;
        info!(story = %story.id, user = %user.id, "created story");
        Ok(story)
    }

    pub fn update(&self, id: &str, draft: &StoryDraft) -> Result<Story> {
        draft.validate()?;
        let user = self.backend.current_user()?;

        let patch = to_record(&StoryFields::from_draft(draft, &user.id))?;
        let updated = self.backend.update(&self.owned(&user.id).eq("id", id), patch)?;
        if updated == 0 {
            return Err(Error::not_found(STORIES, id));
        }
        debug!(story = %id, "updated story");
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Result<Story> {
        let user = self.backend.current_user()?;
        let record = self
            .backend
            .select(&self.owned(&user.id).eq("id", id))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(STORIES, id))?;
        from_record(record)
    }

    /// The user's stories, newest first.
    pub fn list(&self) -> Result<Vec<Story>> {
        let user = self.backend.current_user()?;
        self.backend
            .select(
                &self
                    .owned(&user.id)
                    .order("created_at", Direction::Descending),
            )?
            .into_iter()
            .map(from_record)
            .collect()
    }

    pub fn search(&self, query: &str) -> Result<Vec<Story>> {
        let stories = self.list()?;
        Ok(filter_stories(&stories, query).into_iter().cloned().collect())
    }

    /// Delete a story and the sticky notes attached to it.
    pub fn delete(&self, id: &str) -> Result<()> {
        let user = self.backend.current_user()?;
        let deleted = self.backend.delete(&self.owned(&user.id).eq("id", id))?;
        if deleted == 0 {
            return Err(Error::not_found(STORIES, id));
        }
        let notes = self
            .backend
            .delete(&Query::on(STICKY_NOTES).eq("story_id", id))?;
        info!(story = %id, notes, "deleted story");
        Ok(())
    }

    pub fn analyze(&self, id: &str, config: &AnalysisConfig) -> Result<AnalysisResult> {
        let story = self.get(id)?;
        Ok(analyze_with(&story.content, config))
    }
}
