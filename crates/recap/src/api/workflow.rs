use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use recap_core::{SummaryOrchestrator, SummaryRequest};

use super::AppState;

/// Request to summarize the work done in a project since the last
/// commit. `task_description` is optional: without it the model infers
/// the task from the diff.
#[derive(Debug, Deserialize)]
pub struct WorkflowEndRequest {
    pub user_id: String,
    #[serde(default)]
    pub task_description: Option<String>,
    pub project_path: String,
}

#[derive(Debug, Serialize)]
pub struct WorkflowEndResponse {
    pub summary_title: String,
    pub summary_markdown: String,
}

/// JSON error envelope returned on any pipeline failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub async fn handle_workflow_end(
    State(state): State<AppState>,
    Json(request): Json<WorkflowEndRequest>,
) -> Result<Json<WorkflowEndResponse>, (StatusCode, Json<ErrorBody>)> {
    info!(
        user_id = %request.user_id,
        project_path = %request.project_path,
        has_task = request.task_description.is_some(),
        "Workflow end received"
    );

    // Diff collection never fails: input and tool problems come back
    // as prose inside the report and flow into the prompt unchanged.
    let diff_report = state.collector.collect(&request.project_path).await;

    let summary_request = SummaryRequest {
        task_description: request.task_description,
        diff_report,
    };

    let orchestrator = SummaryOrchestrator::new(state.client.as_ref()).with_policy(state.retry);

    let summary = orchestrator.run(&summary_request).await.map_err(|e| {
        warn!(error = %e, "Summary pipeline failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
    })?;

    info!(title = %summary.title, "Summary generated");

    Ok(Json(WorkflowEndResponse {
        summary_title: summary.title,
        summary_markdown: summary.markdown,
    }))
}
