//! Completion client adapter for OpenAI-compatible chat endpoints.
//!
//! The rest of the crate only sees the [`Completer`] trait and the tagged
//! [`CompletionResult`]; HTTP and SSE details stay inside this module.

mod client;
mod sse_parser;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub use client::{ChatCompletionClient, ClientSettings, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS};

/// Broad cause of a failed completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing or rejected credential.
    Authentication,
    /// Connection, timeout or broken stream.
    Transport,
    /// The provider answered with an error or nothing usable.
    Provider,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Authentication => "authentication error",
            Self::Transport => "transport error",
            Self::Provider => "provider error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success(String),
    Failure(GenerationFailure),
}

impl CompletionResult {
    pub fn into_result(self) -> Result<String, GenerationFailure> {
        match self {
            Self::Success(text) => Ok(text),
            Self::Failure(failure) => Err(failure),
        }
    }
}

/// Text-completion capability: a prompt in, generated text out.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> CompletionResult;
}
