use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}
