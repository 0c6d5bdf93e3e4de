use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgement returned by `POST /process-pdf/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPdfResponse {
    pub message: String,
}

/// Body of a successful `POST /ask-question/` reply.
///
/// The backend does not commit to a type for `answer`: it may be a string,
/// a structured value, or absent entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    pub answer: Option<Value>,
}

/// Body the backend attaches to a non-2xx reply.
///
/// `detail` is optional and, like `answer`, of no fixed JSON type (FastAPI
/// validation errors arrive as an array of objects here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<Value>,
}
