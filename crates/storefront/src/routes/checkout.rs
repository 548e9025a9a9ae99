//! Checkout route handlers.
//!
//! The checkout flow is a pure UI simulation: there is no payment backend
//! and no order storage. Submitting a valid order form clears the session
//! cart and returns a confirmation fragment; the cart badge refreshes via
//! the `cart-updated` HTMX trigger.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use nordic_core::Cart;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{CartView, load_cart, save_cart};

/// Order form data.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub cart: CartView,
    pub form: OrderFormValues,
}

/// Order confirmation fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate {
    pub name: String,
}

/// Validation error fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "checkout/error.html")]
pub struct CheckoutErrorTemplate {
    pub message: String,
    pub form: OrderFormValues,
}

/// Submitted values echoed back into the re-rendered form.
#[derive(Debug, Default, Clone)]
pub struct OrderFormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Display the checkout page with the order form.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CheckoutShowTemplate {
        cart: CartView::from(&cart),
        form: OrderFormValues::default(),
    }
}

/// Submit the order (HTMX).
///
/// Validates the required fields, then unconditionally treats the
/// submission as successful: the cart is cleared and a confirmation
/// fragment replaces the form. No network call is made anywhere.
#[instrument(skip(session, form), fields(email = %form.email))]
pub async fn submit(session: Session, Form(form): Form<OrderForm>) -> Result<Response> {
    let name = form.name.trim().to_string();
    let phone = form.phone.trim().to_string();
    let email = form.email.trim().to_lowercase();
    let address = form.address.trim().to_string();

    if let Some(message) = validate_order(&name, &phone, &email, &address) {
        return Ok(CheckoutErrorTemplate {
            message,
            form: OrderFormValues {
                name,
                phone,
                email,
                address,
            },
        }
        .into_response());
    }

    let items = load_cart(&session).await.total_items();
    save_cart(&session, &Cart::new()).await?;

    tracing::info!(email = %email, items, "Order confirmed, cart cleared");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CheckoutSuccessTemplate { name },
    )
        .into_response())
}

/// Validate the order form, mirroring the browser's required-field and
/// email-shape checks server-side. Returns a message for the first problem.
fn validate_order(name: &str, phone: &str, email: &str, address: &str) -> Option<String> {
    if name.is_empty() || phone.is_empty() || email.is_empty() || address.is_empty() {
        return Some("Заполните все обязательные поля.".to_string());
    }
    if !is_valid_email(email) {
        return Some("Укажите корректный email.".to_string());
    }
    None
}

/// Basic email validation.
pub(crate) fn is_valid_email(email: &str) -> bool {
    // Simple validation: contains @, has content before and after @
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
