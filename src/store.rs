//! In-memory source of truth for one entity collection.
//!
//! Each store holds the full collection as fetched from the server plus a
//! collection-wide status. Mutations call the API first and reconcile the
//! response into the list: fetch replaces wholesale, add appends, update
//! swaps in place, remove filters. Nothing is retried, queued or rolled
//! back; whichever response arrives last wins.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, warn};

use crate::api::{ApiClient, Resource};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Idle,
    Loading,
    Error,
}

/// Result of reconciling a successful update into the local list.
/// An unknown id is not an error: the server applied the write, the
/// local copy just has nowhere to put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome {
    Applied,
    UnknownId,
}

struct StoreState<R> {
    items: Vec<R>,
    status: StoreStatus,
    last_error: Option<String>,
}

pub struct EntityStore<R: Resource> {
    client: Arc<ApiClient>,
    state: Mutex<StoreState<R>>,
}

impl<R: Resource> EntityStore<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: Mutex::new(StoreState {
                items: Vec::new(),
                status: StoreStatus::Idle,
                last_error: None,
            }),
        }
    }

    /// Downloads the collection and replaces the local list with it.
    /// On failure the previous list is preserved untouched.
    pub async fn fetch_all(&self) -> AppResult<usize> {
        self.begin();
        match self.client.list::<R>().await {
            Ok(list) => {
                let count = list.len();
                let mut st = self.lock();
                st.items = list;
                st.status = StoreStatus::Idle;
                debug!(collection = R::COLLECTION, count, "collection replaced");
                Ok(count)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Creates the entity remotely and appends the server's copy (with
    /// its assigned id) at the end of the list.
    pub async fn add(&self, draft: &R::Create) -> AppResult<R> {
        self.begin();
        match self.client.create::<R>(draft).await {
            Ok(created) => {
                let mut st = self.lock();
                st.items.push(created.clone());
                st.status = StoreStatus::Idle;
                Ok(created)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Full-replace update. The server's response body is swapped into
    /// the matching slot, keeping list position. If the id is not in the
    /// local list the response is dropped and `UnknownId` reported.
    pub async fn update(&self, entity: R) -> AppResult<UpdateOutcome> {
        self.begin();
        match self.client.replace::<R>(&entity).await {
            Ok(fresh) => {
                let mut st = self.lock();
                let outcome = replace_in_place(&mut st.items, fresh);
                st.status = StoreStatus::Idle;
                if outcome == UpdateOutcome::UnknownId {
                    warn!(
                        collection = R::COLLECTION,
                        id = entity.id(),
                        "update reconciled against unknown id; dropped"
                    );
                }
                Ok(outcome)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Deletes remotely, then filters the entity out of the local list.
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        self.begin();
        match self.client.remove::<R>(id).await {
            Ok(()) => {
                let mut st = self.lock();
                remove_by_id(&mut st.items, id);
                st.status = StoreStatus::Idle;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Snapshot of the current collection.
    pub fn items(&self) -> Vec<R> {
        self.lock().items.clone()
    }

    pub fn find(&self, id: &str) -> Option<R> {
        self.lock().items.iter().find(|it| it.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn status(&self) -> StoreStatus {
        self.lock().status
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    // Status is collection-wide, not per request: overlapping operations
    // share the one flag, and the last response to land decides it.
    fn begin(&self) {
        let mut st = self.lock();
        st.status = StoreStatus::Loading;
        st.last_error = None;
    }

    fn fail(&self, err: AppError) -> AppError {
        error!(
            error = %err,
            collection = R::COLLECTION,
            "store operation failed"
        );
        let mut st = self.lock();
        st.status = StoreStatus::Error;
        st.last_error = Some(err.store_message());
        err
    }

    fn lock(&self) -> MutexGuard<'_, StoreState<R>> {
        // The lock is never held across an await, so poisoning means a
        // panic mid-reconciliation; nothing sane to recover to.
        self.state.lock().expect("entity store mutex poisoned")
    }
}

fn replace_in_place<R: Resource>(items: &mut [R], fresh: R) -> UpdateOutcome {
    match items.iter().position(|it| it.id() == fresh.id()) {
        Some(idx) => {
            items[idx] = fresh;
            UpdateOutcome::Applied
        }
        None => UpdateOutcome::UnknownId,
    }
}

fn remove_by_id<R: Resource>(items: &mut Vec<R>, id: &str) {
    items.retain(|it| it.id() != id);
}
