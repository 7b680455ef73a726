use crate::ai::{HintBackend, request_hint};
use crate::models::{AppEvent, HintRequest};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Run one hint request in the background and post the outcome, tagged
/// with its token, back to the UI task.
pub fn spawn_hint_request(
    backend: Arc<dyn HintBackend>,
    request: HintRequest,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let HintRequest {
            token,
            question_id,
            question,
            answers,
        } = request;

        tracing::info!(?token, question_id, "sending AI hint request");
        let result = request_hint(backend.as_ref(), &question, &answers).await;
        match &result {
            Ok(_) => tracing::info!(?token, question_id, "AI hint received"),
            Err(e) => tracing::warn!(?token, question_id, "AI hint failed: {}", e),
        }

        if tx.send(AppEvent::Hint { token, result }).is_err() {
            tracing::debug!("UI gone, dropping hint response");
        }
    })
}
