use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Periodic status ping from a client. Logged and acknowledged,
/// nothing else.
#[derive(Debug, Deserialize)]
pub struct HeartbeatEvent {
    pub user_id: String,
    pub app_name: String,
    pub window_title: String,
    pub workspace_path: String,
}

#[derive(Debug, Serialize)]
pub struct HeartbeatAck {
    pub status: &'static str,
}

pub async fn handle_heartbeat(Json(event): Json<HeartbeatEvent>) -> Json<HeartbeatAck> {
    info!(
        user_id = %event.user_id,
        app_name = %event.app_name,
        window_title = %event.window_title,
        workspace_path = %event.workspace_path,
        "Heartbeat received"
    );

    Json(HeartbeatAck { status: "received" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_heartbeat_acknowledges() {
        let event = HeartbeatEvent {
            user_id: "u1".to_string(),
            app_name: "code".to_string(),
            window_title: "main.rs - project".to_string(),
            workspace_path: "/tmp/project".to_string(),
        };

        let Json(ack) = handle_heartbeat(Json(event)).await;
        assert_eq!(ack.status, "received");
    }
}
