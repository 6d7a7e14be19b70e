//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the server half of every store in the
//! system. It owns the in-memory record map and processes messages
//! sequentially, which gives each operation exclusive access to the state
//! without any locking.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// # Concurrency Model
/// Each `StoreActor` runs in its own tokio task and processes one message at
/// a time. A multi-step handler (a checkout that reads the catalog, writes
/// the ledger, and clears the cart) therefore executes as one logical
/// transaction with respect to every other message sent to the same store –
/// no `Mutex` or `RwLock` anywhere.
///
/// # Usage Pattern
/// 1. **Create**: `StoreActor::new()` returns the actor (server) and its
///    [`StoreClient`] (interface).
/// 2. **Wire**: dependencies (other stores' clients) go into `run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use tiffin_actor::{StoreActor, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, body: String }
/// #[derive(Debug)] struct NoteCreate { body: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Filter = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, body: params.body })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(NoteCreate { body: "hello".into() }).await.unwrap();
///     let note = client.get(id).await.unwrap().unwrap();
///     assert_eq!(note.body, "hello");
/// }
/// ```
///
/// # Operations
/// * **Create** – allocate the next `u32` id, build the record via
///   `from_create_params`, run `on_create`, insert, return the id.
/// * **Ensure** – if the caller-supplied id exists, return it untouched;
///   otherwise build, hook, and insert under that id.
/// * **Get** – return a clone of the record, or `None`.
/// * **Query** – return clones of every record matching the filter
///   (unordered; callers sort when order matters).
/// * **Update** – run `on_update` with the DTO, return the new state.
/// * **Action** – run `handle_action`, return its result.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the mpsc channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every entity hook, giving records
    /// access to dependencies (other stores' clients) that were wired up
    /// after the actor was constructed but before the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("Cart" rather than "tiffin_app::model::cart::Cart").
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    // Skip over ids already taken through Ensure.
                    let mut id = T::Id::from(self.next_id);
                    self.next_id += 1;
                    while self.records.contains_key(&id) {
                        id = T::Id::from(self.next_id);
                        self.next_id += 1;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.records.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Ensure {
                    id,
                    params,
                    respond_to,
                } => {
                    if self.records.contains_key(&id) {
                        debug!(entity_type, %id, "Ensure (exists)");
                        let _ = respond_to.send(Ok(id));
                        continue;
                    }
                    debug!(entity_type, %id, ?params, "Ensure (new)");
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.records.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Ensure failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Query { filter, respond_to } => {
                    let items: Vec<T> = self
                        .records
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, hits = items.len(), "Query");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.records.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.records.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
