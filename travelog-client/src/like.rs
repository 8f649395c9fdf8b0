use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use travelog_boundary::{LikeToggled, Page, Travelogue};

use crate::{keys, AppState, AuthGate, EndUser, LocalStore, PublicApi, Result, RetryPolicy};

/// Page size used to refetch the liked list.
const RESYNC_PAGE_SIZE: u64 = 100;

/// The remote side of the like toggle.
#[async_trait]
pub trait LikeApi: Send + Sync + 'static {
    async fn toggle_like(&self, token: &str, travel_id: i64) -> Result<LikeToggled>;
    async fn liked_travelogues(
        &self,
        token: &str,
        page: u64,
        limit: u64,
    ) -> Result<Page<Travelogue>>;
}

#[async_trait]
impl LikeApi for PublicApi {
    async fn toggle_like(&self, token: &str, travel_id: i64) -> Result<LikeToggled> {
        self.user(token).toggle_like(travel_id).await
    }
    async fn liked_travelogues(
        &self,
        token: &str,
        page: u64,
        limit: u64,
    ) -> Result<Page<Travelogue>> {
        self.user(token).liked_travelogues(page, limit).await
    }
}

/// What a feed card shows about a travelogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelogueCard {
    pub travel_id: i64,
    pub title: String,
    pub cover: Option<String>,
    pub location: String,
    pub nickname: Option<String>,
    pub likes: u64,
}

impl From<&Travelogue> for TravelogueCard {
    fn from(t: &Travelogue) -> Self {
        Self {
            travel_id: t.travel_id,
            title: t.title.clone(),
            cover: t.images.first().map(|img| img.url.clone()),
            location: t.location.clone(),
            nickname: t.author.as_ref().map(|a| a.nickname.clone()),
            likes: t.likes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing sent since the last resync.
    #[default]
    Idle,
    Pending,
    Confirmed,
    /// All attempts failed or the chain was aborted.
    /// The optimistic state is kept anyway.
    FailedUnconfirmed,
}

#[derive(Debug, Clone, Copy)]
struct Tracked {
    chain: u64,
    state: SyncState,
}

#[derive(Debug, Default)]
struct SyncBook {
    next_chain: u64,
    entries: HashMap<i64, Tracked>,
}

impl SyncBook {
    fn start(&mut self, travel_id: i64) -> u64 {
        self.next_chain += 1;
        let chain = self.next_chain;
        self.entries.insert(
            travel_id,
            Tracked {
                chain,
                state: SyncState::Pending,
            },
        );
        chain
    }

    /// Only the most recent chain of a travelogue may settle its state.
    fn settle(&mut self, travel_id: i64, chain: u64, outcome: SyncState) {
        if let Some(tracked) = self.entries.get_mut(&travel_id) {
            if tracked.chain == chain && tracked.state == SyncState::Pending {
                tracked.state = outcome;
            }
        }
    }
}

/// Result of an optimistic toggle.
#[derive(Debug)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes: u64,
    pub sync: SyncHandle,
}

/// The request chain started by one toggle.
#[derive(Debug)]
pub struct SyncHandle {
    travel_id: i64,
    chain: u64,
    book: Arc<Mutex<SyncBook>>,
    task: JoinHandle<SyncState>,
}

impl SyncHandle {
    pub const fn travel_id(&self) -> i64 {
        self.travel_id
    }

    /// Stops retrying. The optimistic state stays as it is.
    pub fn abort(&self) {
        self.task.abort();
        self.book
            .lock()
            .settle(self.travel_id, self.chain, SyncState::FailedUnconfirmed);
    }

    pub async fn outcome(self) -> SyncState {
        match self.task.await {
            Ok(state) => state,
            Err(err) => {
                debug!("Like sync of travelogue {} ended: {err}", self.travel_id);
                SyncState::FailedUnconfirmed
            }
        }
    }
}

/// Optimistic like toggle backed by a locally persisted liked mirror.
pub struct LikeReconciler<A> {
    api: Arc<A>,
    store: Arc<dyn LocalStore>,
    gate: AuthGate<EndUser>,
    retry: RetryPolicy,
    book: Arc<Mutex<SyncBook>>,
}

impl<A: LikeApi> LikeReconciler<A> {
    pub fn new(api: Arc<A>, state: &AppState, retry: RetryPolicy) -> Self {
        let store = state.store();
        Self {
            api,
            gate: AuthGate::new(Arc::clone(&store)),
            store,
            retry,
            book: Arc::default(),
        }
    }

    /// The liked mirror, most recently liked first.
    pub fn liked(&self) -> Result<Vec<TravelogueCard>> {
        Ok(self
            .store
            .get::<Vec<TravelogueCard>>(keys::LIKED_TRAVELOGUES)?
            .unwrap_or_default())
    }

    pub fn is_liked(&self, travel_id: i64) -> Result<bool> {
        Ok(self.liked()?.iter().any(|c| c.travel_id == travel_id))
    }

    pub fn state(&self, travel_id: i64) -> SyncState {
        self.book
            .lock()
            .entries
            .get(&travel_id)
            .map(|t| t.state)
            .unwrap_or_default()
    }

    /// Flips the like state of `card` locally and sends the toggle in
    /// the background.
    ///
    /// `card.likes` is the currently displayed count and `current_path`
    /// the page to come back to after a login.
    /// Must be called from within a tokio runtime.
    pub async fn toggle_like(
        &self,
        card: &TravelogueCard,
        current_path: &str,
    ) -> Result<LikeToggle> {
        let token = self.gate.require(current_path)?;
        let travel_id = card.travel_id;

        let (liked, likes, chain) = {
            let mut book = self.book.lock();
            let mut mirror = self.liked()?;
            let was_liked = mirror.iter().any(|c| c.travel_id == travel_id);
            mirror.retain(|c| c.travel_id != travel_id);
            let liked = !was_liked;
            let likes = if liked {
                card.likes.saturating_add(1)
            } else {
                card.likes.saturating_sub(1)
            };
            if liked {
                mirror.insert(
                    0,
                    TravelogueCard {
                        likes,
                        ..card.clone()
                    },
                );
            }
            self.store.set(keys::LIKED_TRAVELOGUES, &mirror)?;
            (liked, likes, book.start(travel_id))
        };

        let api = Arc::clone(&self.api);
        let book = Arc::clone(&self.book);
        let retry = self.retry;
        let task = tokio::spawn(async move {
            let outcome = send_toggle(&*api, &token, travel_id, retry).await;
            book.lock().settle(travel_id, chain, outcome);
            outcome
        });
        Ok(LikeToggle {
            liked,
            likes,
            sync: SyncHandle {
                travel_id,
                chain,
                book: Arc::clone(&self.book),
                task,
            },
        })
    }

    /// Replaces the liked mirror with the list the server knows.
    pub async fn resync(&self, current_path: &str) -> Result<Vec<TravelogueCard>> {
        let token = self.gate.require(current_path)?;
        let mut cards = vec![];
        let mut page = 1;
        loop {
            let Page { data, pages, .. } = self
                .api
                .liked_travelogues(&token, page, RESYNC_PAGE_SIZE)
                .await?;
            let done = data.is_empty() || page >= pages;
            cards.extend(data.iter().map(TravelogueCard::from));
            if done {
                break;
            }
            page += 1;
        }
        let mut book = self.book.lock();
        self.store.set(keys::LIKED_TRAVELOGUES, &cards)?;
        book.entries.retain(|_, t| t.state == SyncState::Pending);
        info!("Resynced {} liked travelogues", cards.len());
        Ok(cards)
    }
}

async fn send_toggle<A: LikeApi>(
    api: &A,
    token: &str,
    travel_id: i64,
    retry: RetryPolicy,
) -> SyncState {
    let mut attempt = 0;
    loop {
        match api.toggle_like(token, travel_id).await {
            Ok(LikeToggled { liked, likes }) => {
                debug!("Travelogue {travel_id}: liked = {liked}, likes = {likes}");
                return SyncState::Confirmed;
            }
            Err(err) if attempt < retry.max_retries => {
                attempt += 1;
                let delay = retry.delay(attempt);
                warn!("Could not toggle like of travelogue {travel_id} ({err}), retry {attempt} in {delay:?}");
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                warn!("Giving up to toggle like of travelogue {travel_id}: {err}");
                return SyncState::FailedUnconfirmed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_chain_settles() {
        let mut book = SyncBook::default();
        let first = book.start(1);
        let second = book.start(1);
        book.settle(1, first, SyncState::FailedUnconfirmed);
        assert_eq!(book.entries[&1].state, SyncState::Pending);
        book.settle(1, second, SyncState::Confirmed);
        assert_eq!(book.entries[&1].state, SyncState::Confirmed);
        book.settle(1, second, SyncState::FailedUnconfirmed);
        assert_eq!(book.entries[&1].state, SyncState::Confirmed);
    }
}
