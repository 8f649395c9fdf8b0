use std::sync::Arc;

use async_trait::async_trait;
use travelog_boundary::Message;

use crate::{keys, AppState, AuthGate, EndUser, LocalStore, PublicApi, Result};

/// The remote side of the inbox.
#[async_trait]
pub trait MessageApi: Send + Sync + 'static {
    async fn messages(&self, token: &str) -> Result<Vec<Message>>;
    async fn mark_message_read(&self, token: &str, id: i64) -> Result<()>;
    async fn mark_all_messages_read(&self, token: &str) -> Result<()>;
}

#[async_trait]
impl MessageApi for PublicApi {
    async fn messages(&self, token: &str) -> Result<Vec<Message>> {
        self.user(token).messages(None).await
    }
    async fn mark_message_read(&self, token: &str, id: i64) -> Result<()> {
        self.user(token).mark_message_read(id).await
    }
    async fn mark_all_messages_read(&self, token: &str) -> Result<()> {
        self.user(token).mark_all_messages_read().await
    }
}

/// Messages of the logged in user, cached locally so that the last known
/// inbox is still shown while the server is unreachable.
///
/// The read flags are changed locally first, a failing request does not
/// undo them.
pub struct MessageInbox<A> {
    api: Arc<A>,
    store: Arc<dyn LocalStore>,
    gate: AuthGate<EndUser>,
}

impl<A: MessageApi> MessageInbox<A> {
    pub fn new(api: Arc<A>, state: &AppState) -> Self {
        let store = state.store();
        Self {
            api,
            gate: AuthGate::new(Arc::clone(&store)),
            store,
        }
    }

    /// The cached messages, newest first.
    pub fn cached(&self) -> Result<Vec<Message>> {
        Ok(self
            .store
            .get::<Vec<Message>>(keys::MESSAGES)?
            .unwrap_or_default())
    }

    /// Cached messages of one kind (`review` or `like`), all if `None`.
    pub fn filtered(&self, kind: Option<&str>) -> Result<Vec<Message>> {
        let mut messages = self.cached()?;
        if let Some(kind) = kind {
            messages.retain(|m| m.kind == kind);
        }
        Ok(messages)
    }

    pub fn unread_count(&self) -> Result<usize> {
        Ok(self.cached()?.iter().filter(|m| !m.is_read).count())
    }

    /// Fetches the inbox and replaces the cache.
    ///
    /// If the request fails the cached messages are returned instead,
    /// unless nothing has been cached yet.
    pub async fn refresh(&self, current_path: &str) -> Result<Vec<Message>> {
        let token = self.gate.require(current_path)?;
        match self.api.messages(&token).await {
            Ok(messages) => {
                self.store.set(keys::MESSAGES, &messages)?;
                debug!("Cached {} messages", messages.len());
                Ok(messages)
            }
            Err(err) => match self.store.get::<Vec<Message>>(keys::MESSAGES)? {
                Some(cached) => {
                    warn!("Could not fetch messages ({err}), showing {} cached", cached.len());
                    Ok(cached)
                }
                None => Err(err),
            },
        }
    }

    pub async fn mark_read(&self, id: i64, current_path: &str) -> Result<()> {
        let token = self.gate.require(current_path)?;
        self.update_cache(|m| {
            if m.id == id {
                m.is_read = true;
            }
        })?;
        self.api.mark_message_read(&token, id).await
    }

    pub async fn mark_all_read(&self, current_path: &str) -> Result<()> {
        let token = self.gate.require(current_path)?;
        self.update_cache(|m| m.is_read = true)?;
        self.api.mark_all_messages_read(&token).await
    }

    fn update_cache<F>(&self, f: F) -> Result<()>
    where
        F: FnMut(&mut Message),
    {
        let mut messages = self.cached()?;
        messages.iter_mut().for_each(f);
        self.store.set(keys::MESSAGES, &messages)
    }
}
