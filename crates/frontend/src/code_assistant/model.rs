//! Code Assistant - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::qa::request::AskQuestionRequest;
use contracts::qa::response::{ApiErrorBody, AskQuestionResponse, ProcessPdfResponse};
use serde_json::Value;

/// Shown when a successful reply carries no answer.
const NO_ANSWER_FALLBACK: &str = "No answer returned";
/// Shown when the ask call fails without a usable error detail.
const ASK_ERROR_FALLBACK: &str = "Error getting answer";

/// Submit the selected files for processing.
///
/// Every file goes into the multipart body under the repeated `files` field,
/// in selection order. The browser supplies the multipart boundary, so no
/// Content-Type is set here.
pub async fn upload_documents(files: &[web_sys::File]) -> Result<ProcessPdfResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in files {
        form_data
            .append_with_blob("files", file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/process-pdf/");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: ProcessPdfResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Submit the question verbatim and resolve the text to display.
///
/// The `Err` arm already carries display text: the backend's `detail` when
/// one is present, the fixed fallback otherwise. A body that is absent,
/// malformed, or missing the expected field lands on the fallback instead of
/// escaping as a parser error.
pub async fn ask_question(question: &str) -> Result<String, String> {
    let dto = AskQuestionRequest {
        question: question.to_string(),
    };

    let response = gloo_net::http::Request::post(&api_url("/ask-question/"))
        .json(&dto)
        .map_err(|_| ASK_ERROR_FALLBACK.to_string())?
        .send()
        .await
        .map_err(|_| ASK_ERROR_FALLBACK.to_string())?;

    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(detail_from_body(&body));
    }

    answer_from_body(&body)
}

/// Display form of a JSON value: strings verbatim, anything else as compact
/// JSON rather than a debug dump.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn answer_from_body(body: &str) -> Result<String, String> {
    let parsed: AskQuestionResponse =
        serde_json::from_str(body).map_err(|_| ASK_ERROR_FALLBACK.to_string())?;
    Ok(match parsed.answer {
        Some(value) => display_text(&value),
        None => NO_ANSWER_FALLBACK.to_string(),
    })
}

fn detail_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .map(|value| display_text(&value))
        .unwrap_or_else(|| ASK_ERROR_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_serializes_question_verbatim() {
        let dto = AskQuestionRequest {
            question: "diabetes mellitus \"type 2\"\nwithout complications".to_string(),
        };
        let body: Value = serde_json::from_str(&serde_json::to_string(&dto).unwrap()).unwrap();
        assert_eq!(
            body["question"],
            "diabetes mellitus \"type 2\"\nwithout complications"
        );

        let empty = AskQuestionRequest {
            question: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"question":""}"#
        );
    }

    #[test]
    fn test_answer_present() {
        assert_eq!(
            answer_from_body(r#"{"answer": "E11.9"}"#),
            Ok("E11.9".to_string())
        );
    }

    #[test]
    fn test_answer_structured_value() {
        assert_eq!(
            answer_from_body(r#"{"answer": {"code": "E11.9", "confidence": 0.9}}"#),
            Ok(r#"{"code":"E11.9","confidence":0.9}"#.to_string())
        );
    }

    #[test]
    fn test_answer_missing_or_null() {
        assert_eq!(answer_from_body("{}"), Ok("No answer returned".to_string()));
        assert_eq!(
            answer_from_body(r#"{"answer": null}"#),
            Ok("No answer returned".to_string())
        );
    }

    #[test]
    fn test_answer_malformed_body() {
        assert_eq!(
            answer_from_body("<html>502 Bad Gateway</html>"),
            Err("Error getting answer".to_string())
        );
        assert_eq!(answer_from_body(""), Err("Error getting answer".to_string()));
        assert_eq!(
            answer_from_body("[1, 2, 3]"),
            Err("Error getting answer".to_string())
        );
    }

    #[test]
    fn test_detail_present() {
        assert_eq!(
            detail_from_body(r#"{"detail": "model unavailable"}"#),
            "model unavailable"
        );
    }

    #[test]
    fn test_detail_structured_value() {
        assert_eq!(
            detail_from_body(r#"{"detail": [{"loc": ["body", "question"], "msg": "field required"}]}"#),
            r#"[{"loc":["body","question"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_detail_missing_or_unparseable() {
        assert_eq!(detail_from_body("{}"), "Error getting answer");
        assert_eq!(detail_from_body(r#"{"detail": null}"#), "Error getting answer");
        assert_eq!(detail_from_body(""), "Error getting answer");
        assert_eq!(detail_from_body("Internal Server Error"), "Error getting answer");
    }

    #[test]
    fn test_display_text_coercion() {
        assert_eq!(display_text(&Value::String("A41.51".into())), "A41.51");
        assert_eq!(display_text(&serde_json::json!(42)), "42");
        assert_eq!(display_text(&serde_json::json!(true)), "true");
        assert_eq!(
            display_text(&serde_json::json!(["A41.51", "A41.9"])),
            r#"["A41.51","A41.9"]"#
        );
    }
}
