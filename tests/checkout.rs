//! Checkout flow scenarios

use swaglabs_e2e::random::{random_string, CharClasses};
use swaglabs_e2e::{Route, TestContext};

// Currency amounts come from rendered text, so the arithmetic check allows
// half a cent of float error.
const PRICE_TOLERANCE: f64 = 0.005;

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn review_total_is_subtotal_plus_tax() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();
    inventory.add_to_cart("Sauce Labs Fleece Jacket").await.unwrap();

    let cart = ctx.cart_page();
    cart.goto().await.unwrap();
    assert!(cart.list_visible().await.unwrap());
    cart.checkout().await.unwrap();

    let step_one = ctx.checkout_step_one_page();
    step_one
        .fill_information(
            &random_string(7, CharClasses::default()),
            &random_string(3, CharClasses::default()),
            &random_string(5, CharClasses::numeric()),
        )
        .await
        .unwrap();
    step_one.continue_to_overview().await.unwrap();

    let step_two = ctx.checkout_step_two_page();
    ctx.session()
        .wait_for_visible(&step_two.subtotal_label)
        .await
        .unwrap();

    let subtotal = step_two.subtotal().await.unwrap();
    let tax = step_two.tax().await.unwrap();
    let total = step_two.total().await.unwrap();
    assert!(subtotal > 0.0, "subtotal did not render");
    assert!(
        (total - (subtotal + tax)).abs() < PRICE_TOLERANCE,
        "total {total} != subtotal {subtotal} + tax {tax}"
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn missing_address_fields_surface_a_validation_error() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();
    inventory.add_to_cart("Sauce Labs Backpack").await.unwrap();

    let cart = ctx.cart_page();
    cart.goto().await.unwrap();
    cart.checkout().await.unwrap();

    let step_one = ctx.checkout_step_one_page();
    // Submit with the form left empty.
    step_one.continue_to_overview().await.unwrap();

    assert!(step_one.has_error().await.unwrap());
    let message = step_one.error_message().await.unwrap().unwrap_or_default();
    assert!(
        message.contains("First Name is required"),
        "unexpected validation message: {message:?}"
    );
    assert!(
        ctx.session().at_route(Route::CheckoutStepOne).await.unwrap(),
        "a rejected form must not advance to the overview"
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn cancelling_the_review_returns_to_the_catalog() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.goto().await.unwrap();
    inventory.add_to_cart("Sauce Labs Bike Light").await.unwrap();

    let cart = ctx.cart_page();
    cart.goto().await.unwrap();
    cart.checkout().await.unwrap();

    let step_one = ctx.checkout_step_one_page();
    step_one
        .fill_information(
            &random_string(7, CharClasses::default()),
            &random_string(3, CharClasses::default()),
            &random_string(5, CharClasses::numeric()),
        )
        .await
        .unwrap();
    step_one.continue_to_overview().await.unwrap();

    let step_two = ctx.checkout_step_two_page();
    ctx.session()
        .wait_for_visible(&step_two.subtotal_label)
        .await
        .unwrap();
    step_two.cancel().await.unwrap();

    assert!(inventory.list_visible().await.unwrap());
    // Cancelling must not drop the cart contents.
    assert_eq!(inventory.chrome().cart_badge_count().await.unwrap(), 1);

    ctx.close().await.unwrap();
}
