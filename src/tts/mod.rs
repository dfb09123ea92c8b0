pub mod elevenlabs;
pub mod tts;
