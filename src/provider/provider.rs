use async_trait::async_trait;

use crate::errors::Result;

/// Source of the text to be spoken.
///
/// The shipped implementation is a mock, but the seam is async so a real
/// model client can slot in without touching the pipeline.
#[async_trait]
pub trait ResponseProvider {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
