//! Job application resource controller
//!
//! Every operation runs against the signed-in user's document: load,
//! mutate in memory, save whole. The `{user_id}` path segment only
//! decorates the URL; the session identity decides whose document is
//! touched.

use crate::{
    AppState, ControllerError, ControllerResult, CreateApplicationRequest, SessionUser,
    UpdateApplicationRequest, views,
};

use jt_core::Application;

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use uuid::Uuid;

/// GET /users/:user_id/applications/new
pub async fn new_application_form(SessionUser(user_id): SessionUser) -> Html<String> {
    Html(views::applications::new_form(user_id))
}

/// POST /users/:user_id/applications
pub async fn create_application(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Form(request): Form<CreateApplicationRequest>,
) -> ControllerResult<Redirect> {
    // 1. Build the record
    let application = Application::new(
        request.company,
        request.title,
        request.stage,
        request.notes,
        request.link,
    );
    let application_id = application.id;

    // 2. Persist it at the end of the user's collection
    state.store.append_application(user_id, application).await?;

    log::info!("Created application {} for user {}", application_id, user_id);

    // 3. Back to the list
    Ok(Redirect::to(&format!("/users/{}/applications", user_id)))
}

/// GET /users/:user_id/applications
pub async fn list_applications(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ControllerResult<Html<String>> {
    let user = state.store.get_user(user_id).await?;

    Ok(Html(views::applications::index(user_id, &user.applications)))
}

/// GET /users/:user_id/applications/:application_id
pub async fn show_application(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path((_user_id, application_id)): Path<(String, String)>,
) -> ControllerResult<Html<String>> {
    let user = state.store.get_user(user_id).await?;

    // An id that matches nothing (or does not even parse) still reaches the
    // view; the template decides what a missing record means.
    let application = Uuid::parse_str(&application_id)
        .ok()
        .and_then(|id| user.find_application(id));

    Ok(Html(views::applications::show(user_id, application)?))
}

/// GET /users/:user_id/applications/:application_id/edit
pub async fn edit_application_form(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path((_user_id, application_id)): Path<(String, String)>,
) -> ControllerResult<Html<String>> {
    let user = state.store.get_user(user_id).await?;

    let application = Uuid::parse_str(&application_id)
        .ok()
        .and_then(|id| user.find_application(id));

    Ok(Html(views::applications::edit(user_id, application)?))
}

/// PUT /users/:user_id/applications/:application_id
pub async fn update_application(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path((_user_id, application_id)): Path<(String, String)>,
    Form(request): Form<UpdateApplicationRequest>,
) -> ControllerResult<Redirect> {
    // 1. The path id must name one of the user's applications
    let id = Uuid::parse_str(&application_id)
        .map_err(|_| ControllerError::missing_application(application_id.as_str()))?;

    // 2. Overwrite the record with the submitted fields
    state
        .store
        .update_application(user_id, id, &request.into_fields())
        .await?;

    log::info!("Updated application {} for user {}", id, user_id);

    // 3. Back to the record, echoing the path id as given
    Ok(Redirect::to(&format!(
        "/users/{}/applications/{}",
        user_id, application_id
    )))
}

/// DELETE /users/:user_id/applications/:application_id
pub async fn delete_application(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path((_user_id, application_id)): Path<(String, String)>,
) -> ControllerResult<Redirect> {
    // 1. The path id must name one of the user's applications
    let id = Uuid::parse_str(&application_id)
        .map_err(|_| ControllerError::missing_application(application_id.as_str()))?;

    // 2. Drop it and save the document whole
    state.store.remove_application(user_id, id).await?;

    log::info!("Deleted application {} for user {}", id, user_id);

    // 3. Back to the list
    Ok(Redirect::to(&format!("/users/{}/applications", user_id)))
}
