use async_trait::async_trait;
use tracing::info;

use crate::errors::Result;
use crate::provider::provider::ResponseProvider;

const DEFAULT_RESPONSE: &str =
    "Hi, this is RoadBuddy. Traffic looks clear ahead, enjoy the drive.";

/// Stand-in for the Gemini model call. Returns a canned response for any
/// prompt, with no inference and no side effects.
#[derive(Clone, Debug)]
pub struct MockProvider {
    response: String,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            response: DEFAULT_RESPONSE.to_string(),
        }
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseProvider for MockProvider {
    #[tracing::instrument(skip(self))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        info!(prompt_len = prompt.len(), "Returning mocked model response");
        Ok(self.response.clone())
    }
}
