//! User-scoped operations over an injected [`Backend`](crate::backend::Backend).

mod notes;
mod stories;

pub use notes::{NoteUpdate, StickyNoteService};
pub use stories::StoryService;
