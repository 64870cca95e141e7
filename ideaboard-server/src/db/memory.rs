//! In-memory `IdeaStore` for router tests

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use super::{DbError, Idea, IdeaStore};
use crate::models::IdeaContent;

/// Keeps ideas in a Vec; can be switched into a failing mode.
#[derive(Default)]
pub(crate) struct MemoryStore {
    ideas: Mutex<Vec<Idea>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Make every subsequent call fail like an unreachable database.
    pub(crate) fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub(crate) async fn len(&self) -> usize {
        self.ideas.lock().await.len()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl IdeaStore for MemoryStore {
    async fn list_ideas(&self) -> Result<Vec<Idea>, DbError> {
        self.check()?;
        let mut ideas = self.ideas.lock().await.clone();
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ideas)
    }

    async fn insert_idea(&self, content: IdeaContent) -> Result<Idea, DbError> {
        self.check()?;
        let mut ideas = self.ideas.lock().await;

        // Strictly increasing timestamps so ordering is deterministic
        let now = Utc::now();
        let created_at = match ideas.last() {
            Some(last) if last.created_at >= now => last.created_at + Duration::microseconds(1),
            _ => now,
        };

        let idea = Idea {
            id: ideas.len() as i32 + 1,
            content: content.into_string(),
            created_at,
        };
        ideas.push(idea.clone());
        Ok(idea)
    }
}
