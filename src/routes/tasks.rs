use axum::{
    Router,
    routing::post,
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::models::{AppState, ErrorDetail, TaskReceipt, TaskSubmission, WORKER_FAILURE_DETAIL};
use tracing::{info, error};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks/", post(submit_task))
        .route("/tasks", post(submit_task))
        .with_state(state)
}

/// POST /tasks/ - Run the crew on the submitted text.
///
/// The request stays open until the whole pipeline has finished.
pub async fn submit_task(
    State(state): State<AppState>,
    Json(task): Json<TaskSubmission>,
) -> Response {
    info!(user_id = task.user_id, text_len = task.text.len(), "Received task");

    match state.runner.run(&task.text).await {
        Ok(result) => {
            info!(user_id = task.user_id, result_len = result.len(), "Task processed");
            (StatusCode::ACCEPTED, Json(TaskReceipt::finished(&result))).into_response()
        }
        Err(e) => {
            error!(user_id = task.user_id, error = %e, "Worker failed to process task");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(WORKER_FAILURE_DETAIL)),
            ).into_response()
        }
    }
}
