//! bulletsmith - an AI resume bullet point generator served as a small web form
//!
//! One submitted profile becomes one Gemini call and a handful of
//! ready-to-paste resume bullets.

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod render;
pub mod routes;
pub mod state;
