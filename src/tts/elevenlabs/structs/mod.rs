pub mod synthesize_request;
pub mod voice_settings;
