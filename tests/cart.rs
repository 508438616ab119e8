//! Cart badge and cart page scenarios
//!
//! Cart contents are server/DOM state; every assertion re-queries the page
//! rather than trusting anything tracked locally.

use swaglabs_e2e::TestContext;

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn adding_one_item_sets_badge_to_one() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();
    inventory.add_to_cart("Sauce Labs Backpack").await.unwrap();

    assert_eq!(inventory.chrome().cart_badge_count().await.unwrap(), 1);
    assert!(inventory.is_product_in_cart("Sauce Labs Backpack").await.unwrap());

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn removing_the_item_clears_the_badge() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();

    inventory.add_to_cart("Sauce Labs Onesie").await.unwrap();
    assert_eq!(inventory.chrome().cart_badge_count().await.unwrap(), 1);

    inventory.remove_from_cart("Sauce Labs Onesie").await.unwrap();
    assert_eq!(
        inventory.chrome().cart_badge_count().await.unwrap(),
        0,
        "badge must read zero (or be absent) after the only item is removed"
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn adding_every_item_matches_badge_count() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();

    let titles = inventory.product_titles().await.unwrap();
    assert!(!titles.is_empty(), "catalog rendered no products");
    for title in &titles {
        inventory.add_to_cart(title).await.unwrap();
    }

    assert_eq!(
        inventory.chrome().cart_badge_count().await.unwrap() as usize,
        titles.len()
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn cart_page_lists_added_items_and_removal_works() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();
    inventory.add_to_cart("Sauce Labs Bike Light").await.unwrap();
    inventory.chrome().go_to_cart().await.unwrap();

    let cart = ctx.cart_page();
    assert!(cart.list_visible().await.unwrap());
    assert_eq!(cart.item_names().await.unwrap(), vec!["Sauce Labs Bike Light"]);

    cart.remove_item("Sauce Labs Bike Light").await.unwrap();
    assert_eq!(cart.item_count().await.unwrap(), 0);
    assert_eq!(cart.chrome().cart_badge_count().await.unwrap(), 0);

    cart.continue_shopping().await.unwrap();
    assert!(inventory.list_visible().await.unwrap());

    ctx.close().await.unwrap();
}
