use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use crate::tts::elevenlabs::{elevenlabs::ElevenLabs, structs::voice_settings::VoiceSettings};

/// Speech synthesis front-end: synthesizes text and persists the audio.
#[derive(Clone, Debug)]
pub struct TTS {
    elevenlabs_client: ElevenLabs,
    output_file: PathBuf,
}

impl TTS {
    pub fn new(elevenlabs_client: ElevenLabs, output_file: impl AsRef<Path>) -> Self {
        Self {
            elevenlabs_client,
            output_file: output_file.as_ref().to_path_buf(),
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Synthesize `text` and write the audio to the output file.
    ///
    /// The file is only touched when the remote call reports success; an
    /// existing file is overwritten in full.
    #[tracing::instrument(skip(self, text))]
    pub async fn synthesize_to_file(&self, text: &str, settings: &VoiceSettings) -> Result<()> {
        let audio = self.elevenlabs_client.synthesize(text, settings).await?;
        std::fs::write(&self.output_file, &audio)?;
        info!(
            path = %self.output_file.display(),
            bytes = audio.len(),
            "Saved speech"
        );
        Ok(())
    }
}
