use serde::{Deserialize, Serialize};

/// Body of `POST /ask-question/`.
///
/// The question text is forwarded verbatim: no trimming, and an empty
/// question is a valid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    pub question: String,
}
