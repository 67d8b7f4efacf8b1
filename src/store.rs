//! Persistent Store
//!
//! A thin async key-value layer over browser IndexedDB: one `items`
//! collection keyed by item id. Implementations are swappable behind the
//! `ItemStore` trait so the repository can run against an in-memory
//! backend in tests.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IdbDatabase, IdbObjectStoreParameters, IdbOpenDbRequest, IdbRequest, IdbTransactionMode,
    IdbVersionChangeEvent,
};

use crate::models::GroceryItem;

const DB_NAME: &str = "itemsStorage";
const DB_VERSION: u32 = 1;
const STORE_NAME: &str = "items";
const KEY_PATH: &str = "id";

/// Store-level failures, surfaced to the repository caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The engine cannot be opened at all; fatal for the session
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Insert hit an existing id. Ids are minted fresh, so this is a
    /// logic error rather than an expected condition.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// A read or write failed after the engine opened
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Async CRUD contract for the item collection
#[async_trait(?Send)]
pub trait ItemStore {
    /// Every stored record; order is unspecified by the store
    async fn get_all(&self) -> Result<Vec<GroceryItem>, StoreError>;

    /// Store a new record; fails with `DuplicateKey` if the id exists
    async fn insert(&self, item: &GroceryItem) -> Result<(), StoreError>;

    /// Insert or replace by id; never fails on an existing key
    async fn upsert(&self, item: &GroceryItem) -> Result<(), StoreError>;

    /// Idempotent delete; a missing key is not an error
    async fn delete_by_key(&self, id: &str) -> Result<(), StoreError>;
}

/// IndexedDB-backed store. Opens a fresh database handle per operation,
/// so the struct itself carries no connection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedDbStore;

impl IndexedDbStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ItemStore for IndexedDbStore {
    async fn get_all(&self) -> Result<Vec<GroceryItem>, StoreError> {
        let db = open_db().await?;
        let tx = db.transaction_with_str(STORE_NAME).map_err(persistence)?;
        let store = tx.object_store(STORE_NAME).map_err(persistence)?;
        let request = store.get_all().map_err(persistence)?;
        let value = await_request(request).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Persistence(e.to_string()))
    }

    async fn insert(&self, item: &GroceryItem) -> Result<(), StoreError> {
        let value = to_record(item)?;
        let store = writable_store(&open_db().await?)?;
        let request = store.add(&value).map_err(persistence)?;
        await_request(request).await?;
        Ok(())
    }

    async fn upsert(&self, item: &GroceryItem) -> Result<(), StoreError> {
        let value = to_record(item)?;
        let store = writable_store(&open_db().await?)?;
        let request = store.put(&value).map_err(persistence)?;
        await_request(request).await?;
        Ok(())
    }

    async fn delete_by_key(&self, id: &str) -> Result<(), StoreError> {
        let store = writable_store(&open_db().await?)?;
        let request = store.delete(&JsValue::from_str(id)).map_err(persistence)?;
        await_request(request).await?;
        Ok(())
    }
}

fn to_record(item: &GroceryItem) -> Result<JsValue, StoreError> {
    serde_wasm_bindgen::to_value(item).map_err(|e| StoreError::Persistence(e.to_string()))
}

fn writable_store(db: &IdbDatabase) -> Result<web_sys::IdbObjectStore, StoreError> {
    let tx = db
        .transaction_with_str_and_mode(STORE_NAME, IdbTransactionMode::Readwrite)
        .map_err(persistence)?;
    tx.object_store(STORE_NAME).map_err(persistence)
}

fn persistence(err: JsValue) -> StoreError {
    StoreError::Persistence(js_error_text(&err))
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn open_db() -> Result<IdbDatabase, StoreError> {
    let factory = web_sys::window()
        .and_then(|win| win.indexed_db().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("IndexedDB is not accessible".to_string()))?;

    let request = factory
        .open_with_u32(DB_NAME, DB_VERSION)
        .map_err(|e| StoreError::Unavailable(js_error_text(&e)))?;

    // First open of this version: create the object store. A future
    // version bump must migrate here or start from an empty store.
    let on_upgrade = Closure::<dyn FnMut(IdbVersionChangeEvent)>::new(move |ev: IdbVersionChangeEvent| {
        let Some(target) = ev.target() else { return };
        let Ok(request) = target.dyn_into::<IdbOpenDbRequest>() else { return };
        let Ok(result) = request.result() else { return };
        let Ok(db) = result.dyn_into::<IdbDatabase>() else { return };
        if !db.object_store_names().contains(STORE_NAME) {
            let params = IdbObjectStoreParameters::new();
            params.set_key_path(&JsValue::from_str(KEY_PATH));
            let _ = db.create_object_store_with_optional_parameters(STORE_NAME, &params);
        }
    });
    request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

    let value = await_request(request.clone().into()).await.map_err(|err| match err {
        // a failed open means the engine itself is unusable
        StoreError::Persistence(msg) => StoreError::Unavailable(msg),
        other => other,
    })?;
    value
        .dyn_into::<IdbDatabase>()
        .map_err(|_| StoreError::Unavailable("open returned no database".to_string()))
}

/// Adapt an IDBRequest's success/error callbacks into a future.
async fn await_request(request: IdbRequest) -> Result<JsValue, StoreError> {
    let (tx, rx) = oneshot::channel::<Result<JsValue, StoreError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = Rc::clone(&tx);
        let request = request.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let value = request.result().unwrap_or(JsValue::UNDEFINED);
                let _ = tx.send(Ok(value));
            }
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        let request = request.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(request_error(&request)));
            }
        })
    };
    request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = rx
        .await
        .map_err(|_| StoreError::Persistence("request dropped before completion".to_string()));
    request.set_onsuccess(None);
    request.set_onerror(None);
    outcome?
}

fn request_error(request: &IdbRequest) -> StoreError {
    match request.error().ok().flatten() {
        Some(ex) if ex.name() == "ConstraintError" => StoreError::DuplicateKey(ex.message()),
        Some(ex) => StoreError::Persistence(format!("{}: {}", ex.name(), ex.message())),
        None => StoreError::Persistence("unknown IndexedDB failure".to_string()),
    }
}
