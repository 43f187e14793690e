// All LLM prompt constants for the Generation module, plus the composer
// that interpolates a Profile into them. Keeping the fixed persona apart
// from the per-request data lets the instruction be tuned independently;
// the interpolated data stays plain text.

use crate::generation::profile::Profile;
use crate::llm_client::Prompt;

/// System instruction — fixes the persona and the output contract.
pub const GENERATION_SYSTEM: &str =
    "You are an expert career coach specializing in high-impact resume writing. \
    Your task is to generate 5 powerful, job-specific resume bullet points. \
    Each bullet MUST start with a strong action verb (past tense), quantify results, \
    and follow the STAR method (Situation, Task, Action, Result) format where possible. \
    The output MUST be a clean, unformatted list of exactly 5 bullet points, \
    separated by newlines.";

/// User message template. Replace `{job_title}`, `{skills}`, `{name}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = "\
Generate the 5 resume bullet points for the following profile:
- Target Job Title: {job_title}
- Key Skills to Emphasize: {skills}
- Applicant Name (for context): {name}";

/// Fallback used when the applicant left the name field blank.
pub const DEFAULT_APPLICANT: &str = "An experienced professional";

/// Builds the prompt pair for one profile.
/// Pure interpolation: no validation, no side effects, cannot fail.
pub fn compose(profile: &Profile) -> Prompt {
    let name = profile.name.as_deref().unwrap_or(DEFAULT_APPLICANT);

    Prompt {
        system_instruction: GENERATION_SYSTEM.to_string(),
        user_message: GENERATION_PROMPT_TEMPLATE
            .replace("{job_title}", &profile.job_title)
            .replace("{skills}", &profile.skills.join(", "))
            .replace("{name}", name),
    }
}
