use axum::{extract::State, Json};
use tracing::info;

use crate::{
    model::Activities,
    web::{
        extract::{WebPath, WebQuery},
        types::{EmailQuery, MessageResponse},
        WebResult,
    },
    AppState,
};

#[tracing::instrument(name = "list_activities", skip_all)]
pub async fn list_activities(State(app_state): State<AppState>) -> Json<Activities> {
    Json(app_state.store.list_activities().await)
}

#[tracing::instrument(
    name = "signup",
    skip_all,
    fields(activity = %activity_name, email = %query.email)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    WebPath(activity_name): WebPath<String>,
    WebQuery(query): WebQuery<EmailQuery>,
) -> WebResult<Json<MessageResponse>> {
    let message = app_state.store.signup(&activity_name, &query.email).await?;
    info!("{message}");

    Ok(Json(message.into()))
}

#[tracing::instrument(
    name = "remove_participant",
    skip_all,
    fields(activity = %activity_name, email = %query.email)
)]
pub async fn remove_participant(
    State(app_state): State<AppState>,
    WebPath(activity_name): WebPath<String>,
    WebQuery(query): WebQuery<EmailQuery>,
) -> WebResult<Json<MessageResponse>> {
    let message = app_state
        .store
        .remove_participant(&activity_name, &query.email)
        .await?;
    info!("{message}");

    Ok(Json(message.into()))
}
