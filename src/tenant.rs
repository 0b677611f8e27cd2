use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, FieldError},
    validation,
};

/// Tenant identity taken from the `email` request header. Every row a tenant
/// creates carries this value, and reads and deletes never cross it.
#[derive(Clone, Debug)]
pub struct TenantEmail(pub String);

/// Rejects any request whose `email` header is missing or not syntactically
/// an email address, before the route handler runs.
pub async fn require_email(mut request: Request, next: Next) -> Response {
    let email = request
        .headers()
        .get("email")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| validation::is_valid_email(value))
        .map(|value| value.to_string());

    let Some(email) = email else {
        return AppError::Validation(vec![FieldError {
            field: "email",
            message: validation::INVALID_EMAIL,
        }])
        .into_response();
    };

    request.extensions_mut().insert(TenantEmail(email));
    next.run(request).await
}
