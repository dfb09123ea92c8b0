use std::env;

use tracing::error;

use roadbuddy_tts::{
    config::Config,
    errors::{constants, RBError},
    provider::{mock::MockProvider, provider::ResponseProvider},
    trace,
    tts::{
        elevenlabs::{elevenlabs::ElevenLabs, structs::voice_settings::VoiceSettings},
        tts::TTS,
    },
};

fn load_config() -> Result<Config, RBError> {
    let config = std::fs::read_to_string(constants::DEFAULT_CONFIG_PATH);
    if let Ok(config) = config {
        Ok(toml::from_str::<Config>(&config)?)
    } else {
        let elevenlabs_key =
            env::var("RB_ELEVENLABS_KEY").map_err(|_| RBError::missing_env_var("RB_ELEVENLABS_KEY"))?;
        let voice_id =
            env::var("RB_VOICE_ID").map_err(|_| RBError::missing_env_var("RB_VOICE_ID"))?;
        let output_file = env::var("RB_OUTPUT_FILE")
            .unwrap_or_else(|_| constants::DEFAULT_OUTPUT_FILE.to_string());
        let prompt =
            env::var("RB_PROMPT").unwrap_or_else(|_| constants::DEFAULT_PROMPT.to_string());

        Ok(Config {
            elevenlabs_key,
            voice_id,
            output_file,
            prompt,
            voice_settings: VoiceSettings::default(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trace::init_tracing_subscriber();

    // Load config
    let config = load_config()?;

    // Step 1: get text from the model provider (mock)
    let provider = MockProvider::new();
    let text = provider.generate(&config.prompt).await?;

    // Step 2: feed it to ElevenLabs and save the audio
    let elevenlabs = ElevenLabs::new(config.elevenlabs_key, config.voice_id)?;
    let tts = TTS::new(elevenlabs, &config.output_file);

    // A failed synthesis is reported but not fatal
    if let Err(why) = tts.synthesize_to_file(&text, &config.voice_settings).await {
        error!("Synthesis error: {}", why);
    }

    Ok(())
}
