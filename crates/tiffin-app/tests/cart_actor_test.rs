use chrono::Utc;
use tiffin_actor::mock::MockClient;
use tiffin_app::cart_actor;
use tiffin_app::clients::{CartClient, CatalogClient, OrderClient};
use tiffin_app::model::{
    Category, MenuItem, MenuItemId, Order, OrderId, OrderItem, OrderStatus, Restaurant,
    RestaurantId, UserId,
};

fn menu_item(id: u32, restaurant: u32, price: f64) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        restaurant_id: RestaurantId(restaurant),
        category_id: None,
        name: format!("Dish {id}"),
        description: "A test dish".to_string(),
        price,
        is_veg: true,
        image_url: "/static/images/dish.jpg".to_string(),
    }
}

fn restaurant(id: u32) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: "Mock Kitchen".to_string(),
        cuisine: "Fusion".to_string(),
        rating: 4.2,
        delivery_time: "20-30 min".to_string(),
        image_url: "/static/images/mock-kitchen.jpg".to_string(),
    }
}

/// Integration test: real cart actor with mocked catalog and ledger.
/// This exercises the cart's own logic (merge, totals, checkout
/// orchestration) while isolating it from the other actors.
///
/// Pattern 2: Actor + Mocks
/// - Real cart actor (the logic under test lives in its action handlers)
/// - Mocked catalog and order stores (dependencies isolated)
#[tokio::test]
async fn test_cart_actor_with_mocked_dependencies() {
    // Setup mock dependencies
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    let category_mock = MockClient::<Category>::new();
    let mut menu_mock = MockClient::<MenuItem>::new();
    let mut order_mock = MockClient::<Order>::new();

    // add_item resolves the item once to validate it, then once more for the
    // returned view.
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));

    // Checkout resolves the line again, then the owning restaurant, then
    // records the order (create + read-back of the stamped record).
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));
    restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(1)));
    order_mock.expect_create().return_ok(OrderId(1));
    order_mock.expect_get(OrderId(1)).return_ok(Some(Order {
        id: OrderId(1),
        user_id: UserId(1),
        restaurant_id: RestaurantId(1),
        delivery_address: "42 Curry Lane".to_string(),
        total_amount: 240.0,
        status: OrderStatus::Pending,
        order_date: Utc::now(),
        items: vec![OrderItem {
            menu_item_id: MenuItemId(1),
            quantity: 2,
            price_at_order: 120.0,
        }],
    }));

    // Create clients from mocks
    let catalog = CatalogClient::new(
        restaurant_mock.client(),
        category_mock.client(),
        menu_mock.client(),
    );
    let orders = OrderClient::new(order_mock.client());

    // Create the REAL cart actor and spawn it with the mocked context
    let (actor, cart_store) = cart_actor::new();
    let carts = CartClient::new(cart_store);
    let actor_handle = tokio::spawn(actor.run((catalog, orders)));

    // Execute: add then check out, flowing through the real actor
    let view = carts.add_item(UserId(1), MenuItemId(1), 2).await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].price, 120.0);
    assert_eq!(view.total, 240.0);

    let order = carts.checkout(UserId(1), "42 Curry Lane").await.unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.total_amount, 240.0);

    // The real actor cleared the cart after the ledger write; an empty view
    // needs no catalog lookups.
    let view = carts.cart(UserId(1)).await.unwrap();
    assert!(view.items.is_empty());
    assert_eq!(view.total, 0.0);

    // Verify every expectation was consumed in order
    restaurant_mock.verify();
    menu_mock.verify();
    order_mock.verify();

    // Cleanup
    drop(carts);
    actor_handle.await.unwrap();
}

/// A checkout that aborts mid-validation must leave the cart untouched.
#[tokio::test]
async fn test_aborted_checkout_keeps_cart() {
    let restaurant_mock = MockClient::<Restaurant>::new();
    let category_mock = MockClient::<Category>::new();
    let mut menu_mock = MockClient::<MenuItem>::new();
    let mut order_mock = MockClient::<Order>::new();

    // add_item: validation + view
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));

    // checkout: the line no longer resolves – the catalog lost the item
    // (simulating the abort path; with a real catalog this cannot happen
    // after seeding).
    menu_mock.expect_get(MenuItemId(1)).return_ok(None);

    // The surviving cart still resolves its view afterwards.
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, 1, 120.0)));

    let catalog = CatalogClient::new(
        restaurant_mock.client(),
        category_mock.client(),
        menu_mock.client(),
    );
    let orders = OrderClient::new(order_mock.client());

    let (actor, cart_store) = cart_actor::new();
    let carts = CartClient::new(cart_store);
    let actor_handle = tokio::spawn(actor.run((catalog, orders)));

    carts.add_item(UserId(1), MenuItemId(1), 1).await.unwrap();

    let result = carts.checkout(UserId(1), "42 Curry Lane").await;
    assert_eq!(
        result.unwrap_err(),
        tiffin_app::cart_actor::CartError::ItemNotFound(MenuItemId(1))
    );

    // No order was recorded and the cart kept its line.
    order_mock.verify();
    let view = carts.cart(UserId(1)).await.unwrap();
    assert_eq!(view.items.len(), 1);
    menu_mock.verify();

    drop(carts);
    actor_handle.await.unwrap();
}
