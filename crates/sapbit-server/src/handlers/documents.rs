//! Documents API endpoint.
//!
//! Lists the source documents the navigation references, with edit links.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use sapbit_nav::DocumentRef;
use serde::Serialize;

use crate::state::AppState;

/// One referenced document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentResponse {
    #[serde(flatten)]
    document: DocumentRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_link: Option<String>,
}

/// Response for GET /api/documents.
#[derive(Serialize)]
pub(crate) struct DocumentsResponse {
    documents: Vec<DocumentResponse>,
}

/// Handle GET /api/documents.
pub(crate) async fn get_documents(State(state): State<Arc<AppState>>) -> Json<DocumentsResponse> {
    let documents = state
        .model
        .required_documents()
        .into_iter()
        .map(|document| DocumentResponse {
            edit_link: state.model.edit_link(&document.path),
            document,
        })
        .collect();

    Json(DocumentsResponse { documents })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::state::test_support::rfc_state;

    #[tokio::test]
    async fn test_documents_response() {
        let Json(response) = get_documents(State(rfc_state())).await;
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json["documents"][0],
            json!({
                "path": "get-started.md",
                "referencedBy": {"kind": "navbar", "name": "Get Started"},
                "editLink": "https://github.com/sapbit/sapbit/edit/main/get-started.md"
            })
        );
        assert_eq!(json["documents"].as_array().unwrap().len(), 3);
        assert_eq!(json["documents"][1]["path"], "rfcs/README.md");
        assert_eq!(json["documents"][2]["path"], "rfcs/standard.md");
    }
}
