use pretty_assertions::assert_eq;
use storyscribe::backend::{AuthProvider, User};
use storyscribe::service::NoteUpdate;
use storyscribe::*;

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
    }
}

fn signed_in(id: &str) -> InMemoryBackend {
    let backend = InMemoryBackend::new();
    backend.sign_in(user(id));
    backend
}

#[test]
fn test_create_parses_tags_and_notes() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);

    let story = stories
        .create(
            &StoryDraft::new("  The Lighthouse ", "The lamp was lit.")
                .with_tags("sea, ,mystery ")
                .with_notes("   "),
        )
        .unwrap();

    assert_eq!(story.title, "The Lighthouse");
    assert_eq!(story.tags, vec!["sea", "mystery"]);
    assert_eq!(story.notes, None);
    assert_eq!(story.user_id, "alice");
}

#[test]
fn test_operations_require_a_session() {
    let backend = InMemoryBackend::new();
    let stories = StoryService::new(&backend);

    assert!(matches!(
        stories.create(&StoryDraft::new("Title", "Body")),
        Err(Error::NotAuthenticated)
    ));
    assert!(matches!(stories.list(), Err(Error::NotAuthenticated)));
}

#[test]
fn test_blank_title_is_rejected_before_backend_call() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    assert!(matches!(
        stories.create(&StoryDraft::new(" ", "Body")),
        Err(Error::Validation(_))
    ));
    assert!(stories.list().unwrap().is_empty());
}

#[test]
fn test_list_is_newest_first_and_user_scoped() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    stories.create(&StoryDraft::new("First", "a")).unwrap();
    stories.create(&StoryDraft::new("Second", "b")).unwrap();

    backend.sign_in(user("bob"));
    stories.create(&StoryDraft::new("Bob's", "c")).unwrap();
    let bobs: Vec<String> = stories.list().unwrap().into_iter().map(|s| s.title).collect();
    assert_eq!(bobs, vec!["Bob's"]);

    backend.sign_in(user("alice"));
    let titles: Vec<String> = stories.list().unwrap().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[test]
fn test_update_is_scoped_to_owner() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let story = stories.create(&StoryDraft::new("Draft", "old")).unwrap();

    let updated = stories
        .update(&story.id, &StoryDraft::new("Final", "new").with_tags("done"))
        .unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "new");
    assert_eq!(updated.tags, vec!["done"]);
    assert_eq!(updated.created_at, story.created_at);

    backend.sign_in(user("mallory"));
    assert!(matches!(
        stories.update(&story.id, &StoryDraft::new("Hijack", "x")),
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(stories.delete(&story.id), Err(Error::NotFound { .. })));
}

#[test]
fn test_update_without_notes_keeps_stored_notes() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let story = stories
        .create(&StoryDraft::new("T", "Body.").with_notes("outline: storm in act 2"))
        .unwrap();

    let updated = stories.update(&story.id, &StoryDraft::new("T2", "Body.")).unwrap();
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.notes.as_deref(), Some("outline: storm in act 2"));

    let revised = stories
        .update(&story.id, &StoryDraft::new("T2", "Body.").with_notes("act 3"))
        .unwrap();
    assert_eq!(revised.notes.as_deref(), Some("act 3"));
}

#[test]
fn test_editing_a_stored_story_round_trips_its_fields() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let story = stories
        .create(
            &StoryDraft::new("Harbor", "Gulls circled.")
                .with_tags("sea,birds")
                .with_notes("keep it short"),
        )
        .unwrap();

    let mut draft = StoryDraft::from(&story);
    assert_eq!(draft.tags, "sea, birds");
    draft.title = "Harbor at Dusk".to_string();

    let updated = stories.update(&story.id, &draft).unwrap();
    assert_eq!(updated.title, "Harbor at Dusk");
    assert_eq!(updated.tags, vec!["sea", "birds"]);
    assert_eq!(updated.notes.as_deref(), Some("keep it short"));
}

#[test]
fn test_search_filters_current_users_stories() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    stories
        .create(&StoryDraft::new("Harbor", "Boats.").with_tags("sea"))
        .unwrap();
    stories
        .create(&StoryDraft::new("Forest", "Trees.").with_notes("add a wolf"))
        .unwrap();

    let titles = |query: &str| -> Vec<String> {
        stories
            .search(query)
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect()
    };
    assert_eq!(titles("SEA"), vec!["Harbor"]);
    assert_eq!(titles("wolf"), vec!["Forest"]);
    assert_eq!(titles(""), vec!["Forest", "Harbor"]);
}

#[test]
fn test_analyze_stored_story() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let story = stories
        .create(&StoryDraft::new("Match", "The ball was kicked. I kicked the ball."))
        .unwrap();

    let result = stories.analyze(&story.id, &AnalysisConfig::default()).unwrap();
    assert_eq!(result, analyze(&story.content));
    assert_eq!(result.count(SentenceCategory::Passive), 1);
}

#[test]
fn test_sticky_notes_lifecycle() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let notes = StickyNoteService::new(&backend);
    let story = stories.create(&StoryDraft::new("Notes", "Body.")).unwrap();

    let first = notes.add(&story.id).unwrap();
    let second = notes.add(&story.id).unwrap();
    assert_eq!(first.content, "");
    assert_eq!(first.color, NoteColor::Yellow);
    assert_eq!(second.color, NoteColor::Green);

    let edited = notes
        .update(
            &first.id,
            &NoteUpdate {
                content: Some("foreshadow the storm".to_string()),
                color: Some(NoteColor::Pink),
            },
        )
        .unwrap();
    assert_eq!(edited.content, "foreshadow the storm");
    assert_eq!(edited.color, NoteColor::Pink);

    let listed: Vec<String> = notes.list(&story.id).unwrap().into_iter().map(|n| n.id).collect();
    assert_eq!(listed, vec![first.id.clone(), second.id.clone()]);

    notes.delete(&second.id).unwrap();
    assert_eq!(notes.list(&story.id).unwrap().len(), 1);
}

#[test]
fn test_notes_follow_story_ownership() {
    let backend = signed_in("alice");
    let story = StoryService::new(&backend)
        .create(&StoryDraft::new("Private", "Body."))
        .unwrap();
    let notes = StickyNoteService::new(&backend);
    let note = notes.add(&story.id).unwrap();

    backend.sign_in(user("bob"));
    assert!(matches!(notes.list(&story.id), Err(Error::NotFound { .. })));
    assert!(matches!(notes.delete(&note.id), Err(Error::NotFound { .. })));
}

#[test]
fn test_deleting_story_removes_its_notes() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    let notes = StickyNoteService::new(&backend);
    let story = stories.create(&StoryDraft::new("Gone", "Soon.")).unwrap();
    let note = notes.add(&story.id).unwrap();

    stories.delete(&story.id).unwrap();
    assert!(matches!(stories.get(&story.id), Err(Error::NotFound { .. })));
    assert!(matches!(
        notes.update(&note.id, &NoteUpdate::default()),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_sign_out_ends_access() {
    let backend = signed_in("alice");
    let stories = StoryService::new(&backend);
    stories.create(&StoryDraft::new("Title", "Body")).unwrap();

    backend.sign_out().unwrap();
    assert!(matches!(stories.list(), Err(Error::NotAuthenticated)));
}
