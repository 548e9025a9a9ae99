//! Contact form route handlers.
//!
//! Independent of the cart: submit → notify → reset. The submission is
//! logged and acknowledged; there is no backend to deliver it to.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::routes::checkout::is_valid_email;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/show.html")]
pub struct ContactShowTemplate {
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Success fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "contact/success.html")]
pub struct ContactSuccessTemplate {
    pub name: String,
}

/// Error fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "contact/error.html")]
pub struct ContactErrorTemplate {
    pub message: String,
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Display the contact page.
#[allow(clippy::unused_async)]
#[instrument]
pub async fn show() -> impl IntoResponse {
    ContactShowTemplate {
        name: String::new(),
        email: String::new(),
        text: String::new(),
    }
}

/// Submit the contact form (HTMX).
#[allow(clippy::unused_async)]
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    let name = form.name.trim().to_string();
    let email = form.email.trim().to_lowercase();
    let text = form.message.trim().to_string();

    if name.is_empty() || text.is_empty() {
        return ContactErrorTemplate {
            message: "Заполните все обязательные поля.".to_string(),
            name,
            email,
            text,
        }
        .into_response();
    }

    if !is_valid_email(&email) {
        return ContactErrorTemplate {
            message: "Укажите корректный email.".to_string(),
            name,
            email,
            text,
        }
        .into_response();
    }

    tracing::info!(email = %email, "Contact message received");

    ContactSuccessTemplate { name }.into_response()
}
