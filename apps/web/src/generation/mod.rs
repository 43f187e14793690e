// Bullet generation engine.
// Implements: profile parsing, prompt composition, the single Gemini call,
// and response cleanup. All LLM traffic goes through llm_client.

pub mod formatter;
pub mod generator;
pub mod handlers;
pub mod profile;
pub mod prompts;
