//! In-process backend used by tests and the CLI.
//!
//! Tables are vectors in insertion order, so sorting is stable and records
//! with equal sort keys come back in the order they were written.

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use tracing::debug;

use super::{
    AuthProvider, Direction, Query, Record, RecordStore, Session, SessionListener,
    SubscriptionId, User,
};
use crate::errors::Result;

#[derive(Default)]
pub struct InMemoryBackend {
    tables: RwLock<HashMap<String, Vec<Record>>>,
    session: RwLock<Option<Session>>,
    listeners: Mutex<Vec<(SubscriptionId, SessionListener)>>,
    next_id: AtomicU64,
    next_subscription: AtomicU64,
    last_created: Mutex<Option<DateTime<Utc>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user` and notify subscribers.
    pub fn sign_in(&self, user: User) -> Session {
        let session = Session { user };
        *self.session.write() = Some(session.clone());
        debug!(user = %session.user.id, "signed in");
        self.notify(Some(&session));
        session
    }

    fn notify(&self, session: Option<&Session>) {
        // listeners run outside the lock so they may subscribe or unsubscribe
        let listeners: Vec<SessionListener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(session);
        }
    }

    fn next_id(&self) -> String {
        (self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1).to_string()
    }

    /// Creation timestamps strictly increase even within one clock tick.
    fn next_created_at(&self) -> DateTime<Utc> {
        let mut last = self.last_created.lock();
        let now = Utc::now();
        let stamp = match *last {
            Some(previous) if now <= previous => previous + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(stamp);
        stamp
    }
}

impl AuthProvider for InMemoryBackend {
    fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.read().clone())
    }

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, AtomicOrdering::SeqCst));
        self.listeners.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn sign_out(&self) -> Result<()> {
        let previous = self.session.write().take();
        if previous.is_some() {
            debug!("signed out");
            self.notify(None);
        }
        Ok(())
    }
}

impl RecordStore for InMemoryBackend {
    fn insert(&self, collection: &str, mut record: Record) -> Result<Record> {
        if !record.contains_key("id") {
            record.insert("id".to_string(), Value::String(self.next_id()));
        }
        if !record.contains_key("created_at") {
            let created_at = serde_json::to_value(self.next_created_at())?;
            record.insert("created_at".to_string(), created_at);
        }

        self.tables
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn select(&self, query: &Query) -> Result<Vec<Record>> {
        let tables = self.tables.read();
        let mut rows: Vec<Record> = tables
            .get(&query.collection)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.field), b.get(&order.field));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        Ok(rows)
    }

    fn update(&self, query: &Query, patch: Record) -> Result<usize> {
        let mut tables = self.tables.write();
        let Some(rows) = tables.get_mut(&query.collection) else {
            return Ok(0);
        };

        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| query.matches(row)) {
            for (field, value) in &patch {
                row.insert(field.clone(), value.clone());
            }
            updated += 1;
        }
        Ok(updated)
    }

    fn delete(&self, query: &Query) -> Result<usize> {
        let mut tables = self.tables.write();
        let Some(rows) = tables.get_mut(&query.collection) else {
            return Ok(0);
        };

        let before = rows.len();
        rows.retain(|row| !query.matches(row));
        Ok(before - rows.len())
    }
}

/// Timestamps compare chronologically, numbers numerically, other strings
/// lexically. Missing values sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (x.parse::<DateTime<Utc>>(), y.parse::<DateTime<Utc>>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
