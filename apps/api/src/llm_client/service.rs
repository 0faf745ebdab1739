use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::LlmClient;

/// Result of a single text-generation round trip.
///
/// AI-assisted paths branch on this instead of propagating errors: `Unavailable`
/// means no backend is configured, `Failed` carries a reason for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome<T> {
    Success(T),
    Unavailable,
    Failed(String),
}

impl<T> GenerationOutcome<T> {
    /// Applies a fallible schema check to a successful payload.
    /// A check failure turns the outcome into `Failed`.
    pub fn and_then<U, F>(self, f: F) -> GenerationOutcome<U>
    where
        F: FnOnce(T) -> Result<U, String>,
    {
        match self {
            GenerationOutcome::Success(value) => match f(value) {
                Ok(checked) => GenerationOutcome::Success(checked),
                Err(reason) => GenerationOutcome::Failed(reason),
            },
            GenerationOutcome::Unavailable => GenerationOutcome::Unavailable,
            GenerationOutcome::Failed(reason) => GenerationOutcome::Failed(reason),
        }
    }
}

/// Text-generation capability injected into the extractor and the explanation generator.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Short label for logs ("anthropic" | "noop").
    fn backend(&self) -> &'static str;

    /// Sends one prompt and returns the parsed JSON body, unvalidated.
    async fn complete_json(&self, system: &str, prompt: &str) -> GenerationOutcome<Value>;
}

#[async_trait]
impl TextGenerationService for LlmClient {
    fn backend(&self) -> &'static str {
        "anthropic"
    }

    async fn complete_json(&self, system: &str, prompt: &str) -> GenerationOutcome<Value> {
        match self.call_json_value(prompt, system).await {
            Ok(value) => GenerationOutcome::Success(value),
            Err(e) => {
                warn!("Text generation call failed: {e}");
                GenerationOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Backend used when no credential is configured. Never performs I/O.
pub struct NoopTextGeneration;

#[async_trait]
impl TextGenerationService for NoopTextGeneration {
    fn backend(&self) -> &'static str {
        "noop"
    }

    async fn complete_json(&self, _system: &str, _prompt: &str) -> GenerationOutcome<Value> {
        GenerationOutcome::Unavailable
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_noop_is_always_unavailable() {
        let outcome = NoopTextGeneration.complete_json("sys", "prompt").await;
        assert_eq!(outcome, GenerationOutcome::Unavailable);
        assert_eq!(NoopTextGeneration.backend(), "noop");
    }

    #[test]
    fn test_and_then_success_passes_through() {
        let outcome = GenerationOutcome::Success(json!(3)).and_then(|v| {
            v.as_i64().ok_or_else(|| "not a number".to_string())
        });
        assert_eq!(outcome, GenerationOutcome::Success(3));
    }

    #[test]
    fn test_and_then_schema_failure_becomes_failed() {
        let outcome = GenerationOutcome::Success(json!("three")).and_then(|v| {
            v.as_i64().ok_or_else(|| "not a number".to_string())
        });
        assert_eq!(outcome, GenerationOutcome::Failed("not a number".to_string()));
    }

    #[test]
    fn test_and_then_keeps_unavailable() {
        let outcome: GenerationOutcome<i64> =
            GenerationOutcome::<Value>::Unavailable.and_then(|_| Ok(1));
        assert_eq!(outcome, GenerationOutcome::Unavailable);
    }
}
