//! Bullet generation — orchestrates the pipeline for one submitted profile.
//!
//! Flow: compose prompt → single Gemini call → clean the raw lines.
//!
//! Exactly one model call happens per submission. Failures surface as
//! `LlmError`; each calling surface decides how to present them.

use tracing::info;

use crate::generation::formatter::extract_bullets;
use crate::generation::profile::Profile;
use crate::generation::prompts::compose;
use crate::llm_client::{CompletionProvider, LlmError};

/// Turns one profile into cleaned resume bullet points.
///
/// Steps:
/// 1. compose() → Prompt
/// 2. llm.complete() → raw text (one call, no retries)
/// 3. extract_bullets() → cleaned lines
pub async fn generate_bullets(
    llm: &dyn CompletionProvider,
    profile: &Profile,
) -> Result<Vec<String>, LlmError> {
    let prompt = compose(profile);

    info!(
        "Requesting bullet points for job title '{}'",
        profile.job_title
    );
    let raw = llm.complete(&prompt).await?;

    let bullets = extract_bullets(&raw);
    info!("Cleaned {} bullet points from the model reply", bullets.len());

    Ok(bullets)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
