//! The backend seam.
//!
//! Persistence, authentication, and row-level authorization belong to an
//! external backend-as-a-service. This module describes what the rest of the
//! crate needs from it as two capabilities, [`AuthProvider`] and
//! [`RecordStore`]. Callers receive a backend explicitly; there is no global
//! client.

pub mod memory;

pub use memory::InMemoryBackend;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::errors::{Error, Result};

pub const STORIES: &str = "stories";
pub const STICKY_NOTES: &str = "sticky_notes";

/// A row as the backend stores it.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Called with the new session (or `None` after sign-out) on every change.
pub type SessionListener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

pub trait AuthProvider {
    fn current_session(&self) -> Result<Option<Session>>;

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId;

    /// Returns false if the subscription was already gone.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    fn sign_out(&self) -> Result<()>;

    fn current_user(&self) -> Result<User> {
        self.current_session()?
            .map(|session| session.user)
            .ok_or(Error::NotAuthenticated)
    }
}

/// Collection CRUD with equality filters and single-field ordering.
pub trait RecordStore {
    /// Insert a record, returning it with backend-assigned fields
    /// (`id`, `created_at`) filled in.
    fn insert(&self, collection: &str, record: Record) -> Result<Record>;

    fn select(&self, query: &Query) -> Result<Vec<Record>>;

    /// Merge `patch` into every matching record. Returns the match count.
    fn update(&self, query: &Query, patch: Record) -> Result<usize>;

    fn delete(&self, query: &Query) -> Result<usize>;
}

/// Everything a story service needs from the backend.
pub trait Backend: AuthProvider + RecordStore {}

impl<T: AuthProvider + RecordStore + ?Sized> Backend for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
}

impl Query {
    pub fn on(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Order {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| record.get(field) == Some(value))
    }
}

pub fn to_record<T: Serialize>(value: &T) -> Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::backend(format!(
            "expected an object record, got {}",
            other
        ))),
    }
}

pub fn from_record<T: DeserializeOwned>(record: Record) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(record))?)
}
