use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use bulletsmith::config::Config;
use bulletsmith::llm_client::{CompletionProvider, LlmError, Prompt};
use bulletsmith::routes::build_router;
use bulletsmith::state::AppState;

enum StubReply {
    Text(String),
    ApiError(u16, String),
    Empty,
}

/// Completion stub with a canned reply and an invocation counter.
pub struct StubProvider {
    reply: StubReply,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn text(reply: &str) -> Self {
        Self {
            reply: StubReply::Text(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn api_error(status: u16, message: &str) -> Self {
        Self {
            reply: StubReply::ApiError(status, message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            reply: StubReply::Empty,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::ApiError(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        gemini_endpoint: "http://localhost:0".to_string(),
        port: 8080,
        rust_log: "info".to_string(),
    }
}

pub fn test_router(llm: Arc<StubProvider>) -> Router {
    build_router(AppState {
        llm,
        config: test_config(),
    })
}
