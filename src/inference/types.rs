use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Body sent to the inference service's `/infer` route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InferenceRequest {
    pub output_file: String,
}

impl InferenceRequest {
    pub fn new(output_file: impl Into<String>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }
}

/// Reply from the inference service after the shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResponse {
    pub output_path: String,
    pub error: String,
}

impl InferenceResponse {
    /// `output_path` must be a string even when `error` is set.
    /// A missing or null `error` counts as empty.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let output_path = match map.get("output_path") {
            Some(Value::String(path)) => path.clone(),
            _ => return Err(Error::UnexpectedResponse),
        };

        let error = match map.get("error") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(msg)) => msg.clone(),
            Some(_) => return Err(Error::UnexpectedResponse),
        };

        Ok(Self { output_path, error })
    }

    /// Artifact path on success, the service's message otherwise.
    pub fn into_result(self) -> Result<String> {
        if self.error.is_empty() {
            Ok(self.output_path)
        } else {
            Err(Error::service(self.error))
        }
    }
}
