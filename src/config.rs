use serde::Deserialize;

use crate::errors::constants;
use crate::tts::elevenlabs::structs::voice_settings::VoiceSettings;

#[derive(Deserialize)]
pub struct Config {
    pub elevenlabs_key: String,
    pub voice_id: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub voice_settings: VoiceSettings,
}

fn default_output_file() -> String {
    constants::DEFAULT_OUTPUT_FILE.to_string()
}

fn default_prompt() -> String {
    constants::DEFAULT_PROMPT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_full_toml() {
        let config: Config = toml::from_str(
            r#"
            elevenlabs_key = "key123"
            voice_id = "voice456"
            output_file = "speech.mp3"
            prompt = "Where is the nearest rest stop?"

            [voice_settings]
            stability = 0.3
            similarity_boost = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.elevenlabs_key, "key123");
        assert_eq!(config.voice_id, "voice456");
        assert_eq!(config.output_file, "speech.mp3");
        assert_eq!(config.prompt, "Where is the nearest rest stop?");
        assert_eq!(config.voice_settings.stability, 0.3);
        assert_eq!(config.voice_settings.similarity_boost, 0.9);
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = toml::from_str(
            r#"
            elevenlabs_key = "key123"
            voice_id = "voice456"
            "#,
        )
        .unwrap();

        assert_eq!(config.output_file, constants::DEFAULT_OUTPUT_FILE);
        assert_eq!(config.prompt, constants::DEFAULT_PROMPT);
        assert_eq!(config.voice_settings.stability, constants::DEFAULT_STABILITY);
        assert_eq!(
            config.voice_settings.similarity_boost,
            constants::DEFAULT_SIMILARITY_BOOST
        );
    }

    #[test]
    fn test_config_missing_required_field() {
        let result = toml::from_str::<Config>(r#"voice_id = "voice456""#);
        assert!(result.is_err());
    }
}
