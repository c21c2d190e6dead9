use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const SESSION_COOKIE: &str = "arisole_session";

/// Identity injected into request extensions for pages behind the login.
/// Mock session: the cookie value IS the email, nothing is verified.
#[derive(Clone, Debug)]
pub struct AuthenticatedVisitor {
    pub email: String,
}

pub async fn require_session(mut request: Request, next: Next) -> Response {
    let email = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find_map(|c| c.strip_prefix("arisole_session="))
        })
        .map(|v| v.to_string());

    match email.filter(|e| !e.is_empty()) {
        Some(email) => {
            request
                .extensions_mut()
                .insert(AuthenticatedVisitor { email });
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
