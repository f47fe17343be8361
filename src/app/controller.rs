use std::sync::Arc;

use axum::extract::State;

use crate::AppState;

pub async fn get_root(State(_state): State<Arc<AppState>>) -> &'static str {
    "hello world"
}
