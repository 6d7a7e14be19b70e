//! Demo walk-through of the food-ordering core.
//!
//! Starts the actor system, seeds the catalog (from `TIFFIN_SEED` if set,
//! the built-in demo data otherwise), fills a cart, checks out, and lists
//! the user's orders.

use tiffin_actor::tracing::setup_tracing;
use tiffin_app::lifecycle::TiffinSystem;
use tiffin_app::model::UserId;
use tiffin_app::seed;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting food-ordering core");

    let system = TiffinSystem::new();

    // Seed the catalog
    let data = match std::env::var("TIFFIN_SEED") {
        Ok(path) => seed::load(&path).map_err(|e| e.to_string())?,
        Err(_) => seed::demo(),
    };
    seed::apply(&system.catalog, data)
        .await
        .map_err(|e| e.to_string())?;

    let restaurants = system.catalog.restaurants().await.map_err(|e| e.to_string())?;
    let first = restaurants.first().ok_or("catalog seeded empty")?;
    info!(restaurant = %first.id, name = %first.name, "Browsing menu");

    let menu = system
        .catalog
        .menu_items(Some(first.id.clone()))
        .await
        .map_err(|e| e.to_string())?;
    for item in &menu {
        info!(item = %item.id, name = %item.name, price = item.price, "On the menu");
    }

    let user_id = UserId(1);

    // Fill the cart: two of the first dish, one of the second.
    let span = tracing::info_span!("cart_session");
    let cart = async {
        let first_item = menu.first().ok_or("restaurant has no menu")?;
        system
            .carts
            .add_item(user_id.clone(), first_item.id.clone(), 2)
            .await
            .map_err(|e| e.to_string())?;

        if let Some(second_item) = menu.get(1) {
            system
                .carts
                .add_item(user_id.clone(), second_item.id.clone(), 1)
                .await
                .map_err(|e| e.to_string())?;
        }

        system
            .carts
            .cart(user_id.clone())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(lines = cart.items.len(), total = cart.total, "Cart ready");

    // Convert the cart into an order.
    let span = tracing::info_span!("checkout");
    let order = async {
        info!("Checking out");
        system
            .carts
            .checkout(user_id.clone(), "42 Curry Lane, Koramangala")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        order = %order.id,
        total = order.total_amount,
        status = %order.status,
        "Order placed"
    );

    let history = system
        .orders
        .orders(user_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = history.len(), "Order history");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Done");
    Ok(())
}
