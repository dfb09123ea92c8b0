// Public API for the RoadBuddy TTS library

pub mod config;
pub mod errors;
pub mod provider;
pub mod trace;
pub mod tts;

// Re-export commonly used types
pub use config::Config;
pub use errors::{RBError, Result};
pub use provider::{mock::MockProvider, provider::ResponseProvider};
pub use tts::elevenlabs::elevenlabs::ElevenLabs;
pub use tts::elevenlabs::structs::voice_settings::VoiceSettings;
pub use tts::tts::TTS;
