//! HTML rendering for the form surface.
//!
//! Everything the browser sees is one embedded page with `{placeholder}`
//! slots, filled with plain string replacement just like the prompt
//! templates. Every user- or model-supplied value passes through
//! `escape_html` before it reaches the page.

use axum::response::Html;

use crate::llm_client::LlmError;

static PAGE: &str = include_str!("page.html");

/// Raw form fields, echoed back into the page so input survives a round trip.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub name: String,
    pub job_title: String,
    pub skills: String,
}

/// Escapes the five HTML-significant characters. `&` must go first.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(values: &FormValues, content: &str) -> Html<String> {
    // The results block goes in first; placeholder text typed into a form
    // field must never expand.
    Html(
        PAGE.replace("{content}", content)
            .replace("{name}", &escape_html(&values.name))
            .replace("{job_title}", &escape_html(&values.job_title))
            .replace("{skills}", &escape_html(&values.skills)),
    )
}

/// The bare form, shown on first load.
pub fn index_page() -> Html<String> {
    page(&FormValues::default(), "")
}

/// The form with a validation notice under it, inputs echoed back.
pub fn validation_page(values: &FormValues, message: &str) -> Html<String> {
    let notice = format!("<p class=\"notice\">{}</p>", escape_html(message));
    page(values, &notice)
}

/// The form plus the generated bullet list.
///
/// Failures land here too: `describe_failure` turns the error into a single
/// pseudo-bullet, so the page keeps one shape for every completed request.
pub fn results_page(values: &FormValues, bullets: &[String], model: &str) -> Html<String> {
    let items: String = bullets
        .iter()
        .map(|bullet| format!("    <li>{}</li>\n", escape_html(bullet)))
        .collect();
    let model = escape_html(model);

    let content = format!(
        "<div class=\"banner\">Generation Complete! Copy and paste these points into your resume.</div>\n\
         <h2>Your Impactful Resume Bullet Points</h2>\n\
         <ul class=\"results\">\n{items}  </ul>\n\
         <p class=\"caption\">Powered by {model}</p>"
    );
    page(values, &content)
}

/// One sentence for the pseudo-bullet shown when generation fails.
pub fn describe_failure(err: &LlmError) -> String {
    match err {
        LlmError::Http(_) | LlmError::Api { .. } => format!(
            "An API Error occurred: Please check your API key or network status. Details: {err}"
        ),
        LlmError::EmptyContent => format!("An unexpected error occurred: {err}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
