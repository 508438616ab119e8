//! Login and logout scenarios

use std::time::Instant;

use swaglabs_e2e::random::{random_string, CharClasses};
use swaglabs_e2e::users::{credentials, Role};
use swaglabs_e2e::{Route, TestContext};

const LOGIN_ERROR: &str =
    "Epic sadface: Username and password do not match any user in this service";

async fn assert_login_succeeds(role: Role) {
    let ctx = TestContext::new().await.unwrap();
    let creds = credentials(role);

    let login = ctx.login_page();
    login.goto().await.unwrap();
    login.login(creds.username, creds.password).await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.wait_for_list().await.unwrap();
    assert!(
        ctx.session().at_route(Route::Inventory).await.unwrap(),
        "expected a redirect to the catalog for {}",
        creds.username
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn successful_login_redirects_to_catalog() {
    assert_login_succeeds(Role::Valid).await;
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn problem_user_can_still_log_in() {
    assert_login_succeeds(Role::Problem).await;
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn invalid_credentials_show_error_banner() {
    let ctx = TestContext::new().await.unwrap();
    let creds = credentials(Role::Invalid);

    let login = ctx.login_page();
    login.goto().await.unwrap();
    login.login(creds.username, creds.password).await.unwrap();

    assert!(login.has_error().await.unwrap());
    assert_eq!(login.error_message().await.unwrap().as_deref(), Some(LOGIN_ERROR));
    assert!(
        ctx.session().at_route(Route::Login).await.unwrap(),
        "a rejected login must not navigate away"
    );

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn unknown_username_with_valid_password_is_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let login = ctx.login_page();
    login.goto().await.unwrap();
    login
        .login(
            &random_string(8, CharClasses::default()),
            credentials(Role::Valid).password,
        )
        .await
        .unwrap();

    assert!(login.has_error().await.unwrap());
    assert_eq!(login.error_message().await.unwrap().as_deref(), Some(LOGIN_ERROR));

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn valid_username_with_wrong_password_is_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let login = ctx.login_page();
    login.goto().await.unwrap();
    login
        .login(
            credentials(Role::Valid).username,
            &random_string(10, CharClasses::default()),
        )
        .await
        .unwrap();

    assert!(login.has_error().await.unwrap());
    assert_eq!(login.error_message().await.unwrap().as_deref(), Some(LOGIN_ERROR));

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "session-expiry interval of the storefront is unconfirmed; scenario intentionally unimplemented"]
async fn session_times_out_after_inactivity() {
    // The backend's idle-session lifetime has never been confirmed, so there
    // is no duration to wait for and no post-expiry behavior to assert on.
    // TODO: measure the session cookie lifetime, then drive the wait and the
    // post-timeout redirect here.
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn logout_returns_to_login_screen() {
    let ctx = TestContext::new_authenticated().await.unwrap();

    let inventory = ctx.inventory_page();
    inventory.chrome().logout().await.unwrap();

    let login = ctx.login_page();
    assert!(
        ctx.session().at_route(Route::Login).await.unwrap(),
        "logout must land on the base URL"
    );
    assert!(login.logo_visible().await.unwrap());

    ctx.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running WebDriver and the storefront"]
async fn login_page_load_reports_timing() {
    let ctx = TestContext::new().await.unwrap();

    let login = ctx.login_page();
    let started = Instant::now();
    login.goto().await.unwrap();
    ctx.session().wait_for_visible(&login.logo).await.unwrap();
    let wall_clock_ms = started.elapsed().as_millis() as u64;

    // DOMContentLoaded duration from the browser's own navigation timing.
    let dom_content_loaded = ctx
        .session()
        .execute(
            "const nav = performance.getEntriesByType('navigation')[0]; \
             return nav ? nav.domContentLoadedEventEnd - nav.domContentLoadedEventStart : 0;",
            vec![],
        )
        .await
        .unwrap()
        .as_f64()
        .unwrap_or(0.0);
    tracing::info!(wall_clock_ms, dom_content_loaded, "login page timing");

    assert_eq!(login.logo_text().await.unwrap(), "Swag Labs");
    assert!(
        ctx.session().is_visible(&login.login_button).await.unwrap(),
        "login form must be present"
    );
    // Example threshold; a real limit would come from benchmarks.
    assert!(dom_content_loaded < 3000.0);

    ctx.close().await.unwrap();
}
