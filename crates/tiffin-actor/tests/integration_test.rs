use async_trait::async_trait;
use tiffin_actor::{StoreActor, StoreEntity};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
    stocked: bool,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
}

#[derive(Debug)]
struct ShelfUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum ShelfAction {
    Stock,
    #[allow(dead_code)]
    Relabel(String),
}

#[derive(Debug, thiserror::Error)]
#[error("shelf error")]
struct ShelfError;

#[async_trait]
impl StoreEntity for Shelf {
    type Id = u32;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Action = ShelfAction;
    type ActionResult = bool;
    type Filter = bool;
    type Context = ();
    type Error = ShelfError;

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            stocked: false,
        })
    }

    fn matches(&self, stocked: &bool) -> bool {
        self.stocked == *stocked
    }

    async fn on_update(
        &mut self,
        update: ShelfUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            ShelfAction::Stock => {
                if self.stocked {
                    Ok(false)
                } else {
                    self.stocked = true;
                    Ok(true)
                }
            }
            ShelfAction::Relabel(label) => {
                self.label = label;
                Ok(true)
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let payload = ShelfCreate {
        label: "Spices".into(),
    };
    let id: u32 = client.create(payload).await.unwrap();
    assert_eq!(id, 1); // Ids are assigned monotonically from 1

    // 2. Perform Action: Stock
    let changed: bool = client.perform_action(id, ShelfAction::Stock).await.unwrap();
    assert!(changed);

    // Verify state
    let shelf: Shelf = client.get(id).await.unwrap().unwrap();
    assert!(shelf.stocked);

    // 3. Perform Action: Stock again (no change)
    let changed_again: bool = client.perform_action(id, ShelfAction::Stock).await.unwrap();
    assert!(!changed_again);

    // 4. Update
    let update = ShelfUpdate {
        label: Some("Dry goods".into()),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.label, "Dry goods");
}

#[tokio::test]
async fn test_ensure_is_create_if_absent() {
    let (actor, client) = StoreActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    // First ensure materializes the record under the caller's id.
    let id = client
        .ensure(
            7,
            ShelfCreate {
                label: "Produce".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(id, 7);

    client.perform_action(7, ShelfAction::Stock).await.unwrap();

    // Second ensure is a no-op: the stocked flag survives.
    let id = client
        .ensure(
            7,
            ShelfCreate {
                label: "Produce".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(id, 7);

    let shelf = client.get(7).await.unwrap().unwrap();
    assert!(shelf.stocked);
    assert_eq!(shelf.label, "Produce");
}

#[tokio::test]
async fn test_query_filters_records() {
    let (actor, client) = StoreActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["A", "B", "C"] {
        client
            .create(ShelfCreate {
                label: label.into(),
            })
            .await
            .unwrap();
    }
    client.perform_action(2, ShelfAction::Stock).await.unwrap();

    let stocked = client.query(true).await.unwrap();
    assert_eq!(stocked.len(), 1);
    assert_eq!(stocked[0].label, "B");

    let unstocked = client.query(false).await.unwrap();
    assert_eq!(unstocked.len(), 2);
}

#[tokio::test]
async fn test_action_on_missing_record_is_not_found() {
    let (actor, client) = StoreActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.perform_action(99, ShelfAction::Stock).await;
    assert!(matches!(
        result,
        Err(tiffin_actor::StoreError::NotFound(_))
    ));
}
