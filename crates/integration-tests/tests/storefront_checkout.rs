//! Integration tests for the checkout and contact flows.

use axum::http::StatusCode;
use nordic_integration_tests::TestApp;

const VALID_ORDER: &str =
    "name=Anna&phone=89000000000&email=anna%40example.com&address=Moscow%2C%20Arbat%201";

#[tokio::test]
async fn checkout_page_shows_order_summary() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;
    app.post_form("/cart/add", "product_id=1").await;

    let response = app.get("/checkout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Оформление заказа"));
    assert!(response.body.contains("Товаров: 2"));
    assert!(response.body.contains("179\u{a0}800 ₽"));
}

#[tokio::test]
async fn checkout_clears_cart_and_confirms() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;
    app.post_form("/cart/add", "product_id=3").await;

    let response = app.post_form("/checkout", VALID_ORDER).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("HX-Trigger"), Some("cart-updated"));
    assert!(response.body.contains("Заказ оформлен!"));
    assert!(response.body.contains("Anna"));

    // Cart is empty afterwards
    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Корзина пуста"));

    let count = app.get("/cart/count").await;
    assert!(!count.body.contains("badge"));
}

#[tokio::test]
async fn checkout_rejects_missing_required_fields() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;

    let response = app
        .post_form("/checkout", "name=&phone=&email=&address=")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Заполните все обязательные поля."));

    // Cart is untouched on validation failure
    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Модульный диван Oslo"));
}

#[tokio::test]
async fn checkout_rejects_malformed_email() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;

    let response = app
        .post_form(
            "/checkout",
            "name=Anna&phone=89000000000&email=not-an-email&address=Moscow",
        )
        .await;

    assert!(response.body.contains("Укажите корректный email."));
    // The submitted values are echoed back into the form
    assert!(response.body.contains("value=\"Anna\""));
}

#[tokio::test]
async fn checkout_with_empty_cart_still_confirms() {
    let mut app = TestApp::new();
    let response = app.post_form("/checkout", VALID_ORDER).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Заказ оформлен!"));
}

#[tokio::test]
async fn contact_form_acknowledges_valid_submission() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/contact",
            "name=Anna&email=anna%40example.com&message=Hello",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Сообщение отправлено!"));
    assert!(response.body.contains("Anna"));
}

#[tokio::test]
async fn contact_form_rejects_missing_fields() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/contact", "name=&email=anna%40example.com&message=")
        .await;

    assert!(response.body.contains("Заполните все обязательные поля."));
}

#[tokio::test]
async fn contact_form_rejects_malformed_email() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/contact", "name=Anna&email=nope&message=Hello")
        .await;

    assert!(response.body.contains("Укажите корректный email."));
    assert!(response.body.contains("value=\"Anna\""));
}

#[tokio::test]
async fn contact_does_not_touch_the_cart() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=3").await;

    app.post_form(
        "/contact",
        "name=Anna&email=anna%40example.com&message=Hello",
    )
    .await;

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Стул Loft"));
}
