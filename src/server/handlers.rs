use crate::inference::InferenceClient;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
}

pub async fn generate(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    info!("Calling inference service");

    match state.inference.generate().await {
        Ok(output_path) => {
            info!("Generated artifact: {}", output_path);
            Ok(output_path)
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
