use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::{cart_actor, catalog_actor, order_actor};
use tracing::{error, info};

/// The runtime orchestrator for the food-ordering core.
///
/// `TiffinSystem` is responsible for:
/// - **Lifecycle management**: starting and stopping every store actor
/// - **Dependency wiring**: the menu-item actor checks references against
///   the restaurant and category stores; the cart actor reads the catalog
///   and writes the order ledger
///
/// # Architecture
///
/// Five actors behind three clients:
/// - **Catalog** (restaurants, categories, menu items): read-only after
///   seeding
/// - **Carts**: one actor holding every user's cart; all mutations and
///   checkout run inside it
/// - **Order ledger**: append-only orders with status updates
///
/// # Example
///
/// ```ignore
/// let system = TiffinSystem::new();
/// seed::apply(&system.catalog, seed::demo()).await?;
///
/// let view = system.carts.add_item(user, item_id, 1).await?;
/// let order = system.carts.checkout(user, "42 Curry Lane").await?;
///
/// system.shutdown().await?;
/// ```
pub struct TiffinSystem {
    /// Client for the catalog stores
    pub catalog: CatalogClient,

    /// Client for the cart actor
    pub carts: CartClient,

    /// Client for the order ledger actor
    pub orders: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TiffinSystem {
    /// Creates and initializes the system with all actors running.
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (restaurant_actor, restaurant_store) = catalog_actor::restaurants();
        let (category_actor, category_store) = catalog_actor::categories();
        let (menu_item_actor, menu_item_store) = catalog_actor::menu_items();
        let (ledger_actor, ledger_store) = order_actor::new();
        let (cart_actor, cart_store) = cart_actor::new();

        let catalog = CatalogClient::new(
            restaurant_store.clone(),
            category_store.clone(),
            menu_item_store,
        );
        let orders = OrderClient::new(ledger_store);
        let carts = CartClient::new(cart_store);

        // 2. Start actors with injected context.
        // Restaurants, categories, and the ledger stand alone.
        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(()));
        let ledger_handle = tokio::spawn(ledger_actor.run(()));

        // The menu-item actor validates references against the other two
        // catalog stores.
        let menu_item_handle =
            tokio::spawn(menu_item_actor.run((restaurant_store, category_store)));

        // The cart actor resolves prices through the catalog and records
        // checked-out orders through the ledger.
        let cart_handle = tokio::spawn(cart_actor.run((catalog.clone(), orders.clone())));

        Self {
            catalog,
            carts,
            orders,
            handles: vec![
                restaurant_handle,
                category_handle,
                ledger_handle,
                menu_item_handle,
                cart_handle,
            ],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels; each actor drains its
    /// queue and exits. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the actors' receivers. The cart actor
        // holds clones of the catalog and ledger clients in its context, so
        // those actors exit once the cart actor has.
        drop(self.catalog);
        drop(self.carts);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for TiffinSystem {
    fn default() -> Self {
        Self::new()
    }
}
