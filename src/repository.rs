//! Item Repository
//!
//! Owns the canonical in-memory item list and mediates every mutation
//! through the persistent store. The store call always runs first; memory
//! is only updated once it succeeds, so the in-memory view never runs
//! ahead of a failed write.

use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{GroceryItem, ItemDraft};
use crate::store::{IndexedDbStore, ItemStore, StoreError};

/// State controller over a swappable store backend.
///
/// The item list lives in a signal: the repository is its sole writer and
/// the presentation layer subscribes by reading it reactively.
#[derive(Clone, Copy)]
pub struct GroceryRepository<S: 'static> {
    store: S,
    items: RwSignal<Vec<GroceryItem>>,
}

/// The repository as wired in the running app
pub type AppRepository = GroceryRepository<IndexedDbStore>;

impl<S: ItemStore + Clone + 'static> GroceryRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Read handle for the presentation layer
    pub fn items(&self) -> ReadSignal<Vec<GroceryItem>> {
        self.items.read_only()
    }

    /// One-shot load at startup. Until this resolves the list renders
    /// empty, which is not an error state.
    pub async fn hydrate(&self) -> Result<(), StoreError> {
        let all = self.store.get_all().await?;
        self.items.set(all);
        Ok(())
    }

    /// Mint a fresh id, persist, then append to memory.
    pub async fn add(&self, draft: ItemDraft) -> Result<GroceryItem, StoreError> {
        let item = GroceryItem::from_draft(mint_id(), draft);
        self.store.insert(&item).await?;
        self.items.update(|items| items.push(item.clone()));
        Ok(item)
    }

    /// Persist the replacement, then swap it into memory by id.
    pub async fn update(&self, updated: GroceryItem) -> Result<(), StoreError> {
        self.store.upsert(&updated).await?;
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
                *item = updated;
            }
        });
        Ok(())
    }

    /// Flip the bought flag. A vanished id is a silent no-op.
    pub async fn toggle_completed(&self, id: &str) -> Result<(), StoreError> {
        let found = self
            .items
            .with_untracked(|items| items.iter().find(|item| item.id == id).cloned());
        let Some(mut item) = found else {
            return Ok(());
        };
        item.completed = !item.completed;
        self.update(item).await
    }

    /// Delete from the store, then drop from memory. Idempotent.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete_by_key(id).await?;
        self.items.update(|items| items.retain(|item| item.id != id));
        Ok(())
    }
}

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}
