use bytes::Bytes;
use tracing::info;

use crate::errors::{constants, RBError, Result};
use crate::tts::elevenlabs::structs::{
    synthesize_request::SynthesizeRequest, voice_settings::VoiceSettings,
};

/// Client for the ElevenLabs text-to-speech endpoint.
#[derive(Clone, Debug)]
pub struct ElevenLabs {
    client: reqwest::Client,
    api_key: String,
    voice_id: String,
    base_url: String,
}

impl ElevenLabs {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, voice_id, constants::DEFAULT_API_URL)
    }

    /// Same as [`ElevenLabs::new`] but against a custom endpoint, so tests
    /// can point the client at a local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        voice_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(constants::TTS_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            base_url: base_url.into(),
        })
    }

    /// Synthesize text to speech and return the raw audio bytes.
    ///
    /// Any non-200 status is returned as [`RBError::Synthesis`] carrying the
    /// status code and response body. No retries.
    #[tracing::instrument(skip(self, text))]
    pub async fn synthesize(&self, text: &str, settings: &VoiceSettings) -> Result<Bytes> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            self.voice_id
        );

        let request = SynthesizeRequest {
            text: text.to_string(),
            voice_settings: settings.clone(),
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&request)?)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            let audio = response.bytes().await?;
            info!(bytes = audio.len(), "Synthesis succeeded");
            Ok(audio)
        } else {
            let body = response.text().await?;
            Err(RBError::synthesis(status.as_u16(), body))
        }
    }
}
