//! # Mock Store Clients
//!
//! Test doubles for [`StoreClient`]. The [`MockClient`] type serves the same
//! API as the production client but answers from an in-memory expectation
//! queue, so client-side logic can be unit tested without spawning any
//! actors and with full control over failures.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (involves a tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to the scheduler |
//! | **State** | None (expectations only) | Real record state |
//! | **Use case** | Logic *around* a client | The actor itself, or the full system |
//! | **Error injection** | Easy (`return_err`) | Needs specific state |
//!
//! ## Patterns
//!
//! - **Pure mock**: test a domain client's orchestration against
//!   [`MockClient`] expectations alone.
//! - **Actor with mocked dependencies**: run the actor under test for real
//!   and hand its context clients built from mocks. See
//!   `tiffin-app/tests/` for worked examples.
//! - **Full system**: all real actors via the lifecycle orchestrator.
//!
//! For channel-level assertions (inspecting the exact request a client
//! sends), use [`create_mock_client`] with the `expect_*` helpers instead of
//! the fluent API.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response to serve for it.
#[allow(dead_code)] // Update expectations have no builder yet
enum Expectation<T: StoreEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Ensure {
        id: T::Id,
        response: Result<T::Id, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Query {
        response: Result<Vec<T>, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<MenuItem>::new();
/// mock.expect_get(MenuItemId(1)).return_ok(Some(item));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps);

                match (request, expectation) {
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Ensure {
                            id: _,
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Ensure { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Query {
                            filter: _,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action {
                            id: _,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `ensure` operation.
    pub fn expect_ensure(&mut self, id: T::Id) -> EnsureExpectationBuilder<T> {
        EnsureExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `ensure` expectations.
pub struct EnsureExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> EnsureExpectationBuilder<T> {
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        let id = self.id.clone();
        exps.push_back(Expectation::Ensure {
            id: self.id,
            response: Ok(id),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Ensure {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> QueryExpectationBuilder<T> {
    pub fn return_ok(self, values: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Ok(values),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When the subject under test is a *client* (its payload conversion, its
/// result unwrapping), there is no need for an actor at all. This client
/// sends into a channel the test controls; the test inspects the request,
/// asserts on it, and answers through the captured responder.
///
/// **Note**: consider [`MockClient`] when a fluent expectation API reads
/// better than channel plumbing.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Ensure request.
pub async fn expect_ensure<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Ensure {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StoreEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        body: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        body: String,
    }

    #[derive(Debug)]
    struct NoteUpdate;

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl StoreEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Action = NoteAction;
        type ActionResult = bool;
        type Filter = bool;
        type Context = ();
        type Error = NoteError;

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                body: params.body,
                pinned: false,
            })
        }

        fn matches(&self, pinned: &bool) -> bool {
            self.pinned == *pinned
        }

        async fn on_update(&mut self, _: NoteUpdate, _: &Self::Context) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: NoteAction,
            _: &Self::Context,
        ) -> Result<bool, Self::Error> {
            match action {
                NoteAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }
    }

    impl Note {
        fn new(id: u32, body: &str) -> Self {
            Self {
                id,
                body: body.to_string(),
                pinned: false,
            }
        }
    }

    #[tokio::test]
    async fn test_channel_level_mock() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(NoteCreate {
                    body: "remember the milk".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.body, "remember the milk");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Note::new(1, "hello")));
        mock.expect_ensure(2).return_ok();
        mock.expect_action(1).return_ok(true);

        let client = mock.client();

        let id = client
            .create(NoteCreate {
                body: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().body, "hello");

        let ensured = client
            .ensure(
                2,
                NoteCreate {
                    body: "lazy".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(ensured, 2);

        let changed = client.perform_action(1, NoteAction::Pin).await.unwrap();
        assert!(changed);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut mock = MockClient::<Note>::new();
        let client = mock.client();

        mock.expect_get(1).return_err(StoreError::ActorClosed);

        let result = client.get(1).await;
        assert!(matches!(result, Err(StoreError::ActorClosed)));
    }
}
