use axum::{
    extract::{Query, State},
    Extension, Json,
};
use leadmap_core::Lead;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /api/fetchLeads?segment=..&city=..`
///
/// One model call per request; the reply text goes through the table parser
/// and whatever rows survive are returned, possibly none. A repeated query key
/// resolves to its first value.
pub(super) async fn fetch_leads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Lead>>, ApiError> {
    let (Some(segment), Some(city)) = (
        first_non_blank(&params, "segment"),
        first_non_blank(&params, "city"),
    ) else {
        return Err(ApiError::bad_request("Segment and City are required"));
    };

    let Some(model) = state.model.as_ref() else {
        tracing::error!(request_id = %req_id.0, "model API key is not configured");
        return Err(ApiError::internal("Server API configuration error"));
    };

    tracing::info!(request_id = %req_id.0, %segment, %city, "fetching leads");

    let prompt = leadmap_gemini::lead_search_prompt(&segment, &city);
    let text = model.generate_text(&prompt).await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, %segment, %city, error = %e, "model invocation failed");
        ApiError::internal(e.to_string())
    })?;

    let leads = leadmap_extract::parse_leads_table(&text, &city);
    tracing::info!(
        request_id = %req_id.0,
        %segment,
        %city,
        count = leads.len(),
        "leads extracted"
    );

    Ok(Json(leads))
}

fn first_non_blank(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
