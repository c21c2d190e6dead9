use askama::Template;
use axum::{
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use cookie::Cookie;
use serde::Deserialize;

use crate::web::middleware::session::SESSION_COOKIE;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    #[allow(dead_code)]
    password: String,
}

pub async fn login_page() -> Html<String> {
    Html(LoginTemplate.render().unwrap())
}

/// Mock sign-in: any email/password pair is accepted; the email becomes the
/// session cookie. Real credential checks are out of scope for the beta site.
pub async fn login_handler(Form(form): Form<LoginForm>) -> Response {
    let email = form.email.trim().to_string();
    if email.is_empty() {
        return Redirect::to("/login").into_response();
    }

    let cookie = Cookie::build((SESSION_COOKIE, email))
        .path("/")
        .http_only(true)
        .build();

    (
        [(header::SET_COOKIE, cookie.to_string())],
        Redirect::to("/dashboard"),
    )
        .into_response()
}

pub async fn logout_handler() -> Response {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    (
        [(header::SET_COOKIE, cookie.to_string())],
        Redirect::to("/"),
    )
        .into_response()
}
