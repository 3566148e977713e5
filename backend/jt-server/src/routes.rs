use crate::{
    AppState, create_application, delete_application, edit_application_form, health, home,
    list_applications, new_application_form, show_application, update_application,
};

use axum::{
    Router,
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
    routing::get,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(home::home_page))
        // Health check
        .route("/health", get(health::health_check))
        // Job application resource
        .route(
            "/users/{user_id}/applications",
            get(list_applications).post(create_application),
        )
        .route(
            "/users/{user_id}/applications/new",
            get(new_application_form),
        )
        .route(
            "/users/{user_id}/applications/{application_id}",
            get(show_application)
                .put(update_application)
                .delete(delete_application),
        )
        .route(
            "/users/{user_id}/applications/{application_id}/edit",
            get(edit_application_form),
        )
        // Add shared state
        .with_state(state)
}

/// Rewrite form POSTs carrying a `_method` query into the verb the resource
/// routes expect. Browsers only submit GET and POST, so the edit and delete
/// forms post to e.g. `...?_method=put`.
///
/// Must wrap the router (not be layered onto it) so the rewrite happens
/// before routing.
pub async fn method_override(mut request: Request, next: Next) -> Response {
    if request.method() == Method::POST
        && let Some(method) = override_from_query(request.uri().query())
    {
        *request.method_mut() = method;
    }

    next.run(request).await
}

fn override_from_query(query: Option<&str>) -> Option<Method> {
    let query = query?;

    query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name != "_method" {
            return None;
        }
        match value.to_ascii_lowercase().as_str() {
            "put" => Some(Method::PUT),
            "delete" => Some(Method::DELETE),
            _ => None,
        }
    })
}
