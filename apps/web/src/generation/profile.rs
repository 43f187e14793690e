//! Profile — the transient, request-scoped snapshot of one form submission.

/// Upper bound on the applicant name, matching the form input's limit.
pub const MAX_NAME_CHARS: usize = 100;

/// One submission's worth of applicant data. Built once per submission,
/// never mutated, discarded after the response is rendered.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: Option<String>,
    pub job_title: String,
    pub skills: Vec<String>,
}

impl Profile {
    /// Builds a profile from already-validated parts. The name is trimmed,
    /// capped at `MAX_NAME_CHARS`, and dropped entirely when blank.
    /// Emptiness checks on `job_title` and `skills` are the caller's job.
    pub fn new(name: &str, job_title: impl Into<String>, skills: Vec<String>) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            None
        } else {
            Some(name.chars().take(MAX_NAME_CHARS).collect())
        };

        Self {
            name,
            job_title: job_title.into(),
            skills,
        }
    }
}

/// Splits the multi-line skills input into an ordered list: one skill per
/// line, trimmed, blanks dropped, duplicates kept.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
