use serde::{Deserialize, Serialize};

use crate::errors::constants;

/// Voice tuning parameters sent verbatim with every synthesis request.
///
/// Example:
/// ```rust
/// # use roadbuddy_tts::tts::elevenlabs::structs::voice_settings::VoiceSettings;
/// let settings = VoiceSettings {
///     stability: 0.5,
///     similarity_boost: 0.75,
/// };
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: constants::DEFAULT_STABILITY,
            similarity_boost: constants::DEFAULT_SIMILARITY_BOOST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_settings_defaults() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.stability, 0.5);
        assert_eq!(settings.similarity_boost, 0.75);
    }
}
