use serde::{Deserialize, Serialize};

use crate::tts::elevenlabs::structs::voice_settings::VoiceSettings;

/// Wire body for `POST /v1/text-to-speech/{voice_id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice_settings: VoiceSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SynthesizeRequest {
            text: "Hello world".to_string(),
            voice_settings: VoiceSettings::default(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["text"], "Hello world");
        assert_eq!(value["voice_settings"]["stability"], 0.5);
        assert_eq!(value["voice_settings"]["similarity_boost"], 0.75);
    }
}
