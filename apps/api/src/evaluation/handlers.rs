//! Axum route handlers for the Evaluation API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::evaluator::evaluate;
use crate::evaluation::templates::{find_template, Template, TEMPLATES};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub content: String,
    /// Falls back to the configured default template.
    #[serde(default)]
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub evaluation_id: Uuid,
    pub template_id: String,
    pub model: String,
    pub evaluated_at: DateTime<Utc>,
    /// Primary display area: evaluation and recommendations.
    pub commentary: String,
    /// Secondary display area: the grade badge.
    pub grade: String,
    pub grade_found: bool,
    pub sections: BTreeMap<String, String>,
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: &'static [Template],
    pub default_template: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: TEMPLATES,
        default_template: state.config.default_template.clone(),
    })
}

/// POST /api/v1/evaluate
///
/// Sends the content to the model with the selected rubric and returns the
/// parsed evaluation. Blank content is rejected before any request is made.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter some content to evaluate.".to_string(),
        ));
    }

    let template_id = request
        .template_id
        .as_deref()
        .unwrap_or(&state.config.default_template);
    let template = find_template(template_id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))?;

    let evaluation_id = Uuid::new_v4();
    let span = tracing::info_span!("evaluate", %evaluation_id, template = template.id);

    let result = evaluate(state.llm.as_ref(), template, &request.content)
        .instrument(span)
        .await?;

    Ok(Json(EvaluateResponse {
        evaluation_id,
        template_id: template.id.to_string(),
        model: state.llm.model().to_string(),
        evaluated_at: Utc::now(),
        commentary: result.primary_text(),
        grade_found: result.grade_found(),
        grade: result.grade,
        sections: result.sections,
        raw: result.raw,
    }))
}
