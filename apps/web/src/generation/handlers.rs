//! Axum route handlers for the bullet generation surfaces.

use axum::{extract::State, response::Html, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::generator::generate_bullets;
use crate::generation::profile::{parse_skills, Profile};
use crate::render::{self, FormValues};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields posted by the embedded form. Missing fields land as empty strings.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub name: Option<String>,
    pub job_title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub bullets: Vec<String>,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Serves the embedded form page.
pub async fn handle_index() -> Html<String> {
    render::index_page()
}

/// POST /generate
///
/// The form surface. Every outcome renders the same page: validation
/// problems and model failures come back as inline content, never as an
/// error status.
pub async fn handle_generate_form(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let values = FormValues {
        name: form.name.clone(),
        job_title: form.job_title.clone(),
        skills: form.skills.clone(),
    };

    let skills = parse_skills(&form.skills);
    if form.job_title.trim().is_empty() || skills.is_empty() {
        return render::validation_page(
            &values,
            "Please fill in the Target Job Title and Key Skills fields.",
        );
    }

    let profile = Profile::new(&form.name, form.job_title.trim(), skills);

    match generate_bullets(state.llm.as_ref(), &profile).await {
        Ok(bullets) => render::results_page(&values, &bullets, &state.config.gemini_model),
        Err(err) => {
            warn!("Bullet generation failed: {err}");
            let fallback = vec![render::describe_failure(&err)];
            render::results_page(&values, &fallback, &state.config.gemini_model)
        }
    }
}

/// POST /api/v1/bullets
///
/// JSON surface over the same pipeline. Unlike the form, failures come back
/// as structured error responses.
pub async fn handle_generate_api(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let skills: Vec<String> = request
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if skills.is_empty() {
        return Err(AppError::Validation(
            "skills must contain at least one non-empty entry".to_string(),
        ));
    }

    let profile = Profile::new(
        request.name.as_deref().unwrap_or(""),
        request.job_title.trim(),
        skills,
    );

    let bullets = generate_bullets(state.llm.as_ref(), &profile)
        .await
        .map_err(|e| AppError::Llm(format!("Bullet generation failed: {e}")))?;

    Ok(Json(GenerateResponse {
        bullets,
        model: state.config.gemini_model.clone(),
    }))
}
